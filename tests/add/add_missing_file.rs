use crate::common::command::{init_repository_dir, porcelain_status, run_twig_command};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_untracked_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[rstest]
fn adding_a_deleted_tracked_file_stages_the_deletion(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    delete_path(&root.join("a").join("2.txt"));
    assert_eq!(porcelain_status(root)?, " D a/2.txt\n");

    run_twig_command(root, &["add", "a/2.txt"]).assert().success();

    assert_eq!(porcelain_status(root)?, "D  a/2.txt\n");

    Ok(())
}

#[rstest]
fn add_all_removes_deleted_files_from_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    delete_path(&root.join("a"));

    run_twig_command(root, &["add", "."]).assert().success();

    assert_eq!(porcelain_status(root)?, "D  a/2.txt\nD  a/b/3.txt\n");
    let index = std::fs::read_to_string(root.join(".twig").join("index"))?;
    assert!(index.ends_with(" 1.txt\n"));
    assert_eq!(index.lines().count(), 1);

    Ok(())
}
