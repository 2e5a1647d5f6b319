use crate::common::command::{
    get_head_commit_sha, porcelain_status, read_object, repository_dir, run_twig_command,
    twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_commit_object_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello".to_string()));
    run_twig_command(root, &["add", "a.txt"]).assert().success();

    twig_commit(root, "first")
        .assert()
        .success()
        .stdout("[main (root-commit) 2e28d33] first\n");

    let commit_oid = get_head_commit_sha(root)?;
    assert_eq!(commit_oid, "2e28d33d333f5b7d225a32c4dfcc9164c5215083");
    assert_eq!(
        std::fs::read_to_string(root.join(".twig").join("refs").join("heads").join("main"))?,
        format!("{commit_oid}\n")
    );
    assert_eq!(
        read_object(root, &commit_oid)?,
        b"commit 104\0tree c0ece5f641dbfb905443d1087463bf9e38c9cb62\nparent \n\
          author fake_user\ndate 2023-01-01T12:00:00Z\n\nfirst\n"
    );
    assert_eq!(
        read_object(root, "c0ece5f641dbfb905443d1087463bf9e38c9cb62")?,
        b"tree 47\0a.txt b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0\n"
    );
    assert_eq!(porcelain_status(root)?, "");

    Ok(())
}

#[rstest]
fn commit_message_is_trimmed(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello".to_string()));
    run_twig_command(root, &["add", "a.txt"]).assert().success();

    twig_commit(root, "  first\n\n")
        .assert()
        .success()
        .stdout("[main (root-commit) 2e28d33] first\n");

    Ok(())
}
