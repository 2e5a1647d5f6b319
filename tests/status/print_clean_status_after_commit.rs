use crate::common::command::{init_repository_dir, repository_dir, run_twig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_clean_status_after_commit(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("On branch main\nnothing to commit, working tree clean\n");
}

#[rstest]
fn print_clean_status_on_fresh_repository(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("On branch main\nnothing to commit, working tree clean\n");
}

#[rstest]
fn print_nothing_if_a_file_is_rewritten_with_same_content(init_repository_dir: TempDir) {
    std::fs::write(init_repository_dir.path().join("1.txt"), "one")
        .expect("Failed to rewrite file");

    run_twig_command(init_repository_dir.path(), &["status", "--porcelain"])
        .assert()
        .success()
        .stdout("");
}
