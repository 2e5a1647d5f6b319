use crate::common::command::{porcelain_status, repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_from_nested_directory(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("docs").join("guide.md"), "# guide".to_string()));
    write_file(FileSpec::new(root.join("README.md"), "readme".to_string()));

    run_twig_command(&root.join("docs"), &["add", "guide.md", "../README.md"])
        .assert()
        .success();

    assert_eq!(porcelain_status(root)?, "A  README.md\nA  docs/guide.md\n");

    Ok(())
}

#[rstest]
fn add_outside_the_repository_fails(repository_dir: TempDir) {
    let root = repository_dir.path().join("repo");
    std::fs::create_dir_all(&root).expect("Failed to create repository directory");
    write_file(FileSpec::new(
        repository_dir.path().join("outside.txt"),
        "outside".to_string(),
    ));
    run_twig_command(&root, &["init"]).assert().success();

    run_twig_command(&root, &["add", "../outside.txt"])
        .assert()
        .failure();
}
