use crate::common::command::{repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_directory_is_unsupported(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("src").join("lib.rs"),
        String::new(),
    ));

    run_twig_command(repository_dir.path(), &["add", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported operation"));
}
