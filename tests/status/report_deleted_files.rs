use crate::common::command::{init_repository_dir, porcelain_status};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&init_repository_dir.path().join("1.txt"));

    assert_eq!(porcelain_status(init_repository_dir.path())?, " D 1.txt\n");

    Ok(())
}

#[rstest]
fn report_files_in_deleted_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&init_repository_dir.path().join("a"));

    assert_eq!(
        porcelain_status(init_repository_dir.path())?,
        " D a/2.txt\n D a/b/3.txt\n"
    );

    Ok(())
}
