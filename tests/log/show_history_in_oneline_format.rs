use crate::common::command::{get_head_commit_sha, init_repository_dir, run_twig_command, twig_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_history_in_oneline_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let first_oid = get_head_commit_sha(root)?;
    std::fs::write(root.join("1.txt"), "changed")?;
    run_twig_command(root, &["add", "1.txt"]).assert().success();
    twig_commit(root, "Update one\n\nLonger description").assert().success();
    let second_oid = get_head_commit_sha(root)?;

    let output = run_twig_command(root, &["log", "--oneline"])
        .assert()
        .success();

    assert_eq!(
        String::from_utf8(output.get_output().stdout.clone())?,
        format!(
            "{} Update one\n{} Initial commit\n",
            &second_oid[..7],
            &first_oid[..7]
        )
    );

    Ok(())
}
