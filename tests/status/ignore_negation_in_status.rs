use crate::common::command::{porcelain_status, repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignore_negation_in_status(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join(".twigignore"), "*.log\n!keep.log\n".to_string()));
    write_file(FileSpec::new(root.join("app.log"), "noise".to_string()));
    write_file(FileSpec::new(root.join("keep.log"), "signal".to_string()));

    assert_eq!(porcelain_status(root)?, "?? keep.log\n");

    Ok(())
}

#[rstest]
fn ignored_directories_hide_their_contents(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join(".twigignore"), "# build output\n/out/\n".to_string()));
    write_file(FileSpec::new(root.join("out").join("app.bin"), "bin".to_string()));
    write_file(FileSpec::new(root.join("src").join("out").join("keep.txt"), "src".to_string()));

    assert_eq!(porcelain_status(root)?, "?? src/out/keep.txt\n");

    Ok(())
}
