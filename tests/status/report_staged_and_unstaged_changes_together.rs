use crate::common::command::{init_repository_dir, porcelain_status, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_and_unstaged_changes_together(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "staged".to_string()));
    write_file(FileSpec::new(root.join("new.txt"), "new".to_string()));
    run_twig_command(root, &["add", "1.txt", "new.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(root.join("1.txt"), "changed again".to_string()));
    std::fs::remove_file(root.join("new.txt"))?;
    write_file(FileSpec::new(root.join("z").join("untracked.txt"), "?".to_string()));

    assert_eq!(
        porcelain_status(root)?,
        "MM 1.txt\nAD new.txt\n?? z/untracked.txt\n"
    );

    run_twig_command(root, &["status"])
        .assert()
        .success()
        .stdout(
            "On branch main\n\
             Changes to be committed:\n\
             \x20       modified:   1.txt\n\
             \x20       new file:   new.txt\n\
             \n\
             Changes not staged for commit:\n\
             \x20       modified:   1.txt\n\
             \x20       deleted:    new.txt\n\
             \n\
             Untracked files:\n\
             \x20       z/untracked.txt\n\
             \n",
        );

    Ok(())
}
