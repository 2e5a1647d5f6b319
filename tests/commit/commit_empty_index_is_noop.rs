use crate::common::command::{
    count_objects, get_head_commit_sha, init_repository_dir, repository_dir, run_twig_command,
    twig_commit,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_on_fresh_repository_is_noop(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_twig_command(root, &["init"]).assert().success();

    twig_commit(root, "nothing here")
        .assert()
        .success()
        .stdout("nothing to commit\n");

    assert_eq!(count_objects(root), 0);
    assert!(!root.join(".twig").join("refs").join("heads").join("main").exists());
}

#[rstest]
fn commit_without_staged_changes_leaves_branch_untouched(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let head_before = get_head_commit_sha(root)?;
    let objects_before = count_objects(root);
    std::fs::write(root.join("1.txt"), "changed but not staged")?;

    twig_commit(root, "again")
        .assert()
        .success()
        .stdout("nothing to commit\n");

    assert_eq!(get_head_commit_sha(root)?, head_before);
    assert_eq!(count_objects(root), objects_before);

    Ok(())
}
