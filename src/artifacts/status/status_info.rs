use crate::artifacts::objects::tree::Manifest;
use crate::artifacts::status::file_change::{
    FileChange, FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, FileChangeType>;
pub type FileSet = BTreeSet<String>;

/// Three-way reconciliation of committed tree, index and working tree
///
/// Categories are independent: a path staged as modified can also be listed
/// as modified in the working tree when it changed again after `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub(crate) branch: String,
    /// committed tree vs index
    pub(crate) index_changeset: ChangeSet,
    /// index vs working tree
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusReport {
    pub fn reconcile(
        branch: impl Into<String>,
        committed: &Manifest,
        index: &Manifest,
        workdir: &Manifest,
    ) -> Self {
        let mut index_changeset = ChangeSet::new();
        let mut workspace_changeset = ChangeSet::new();

        for (path, index_oid) in index {
            match committed.get(path) {
                None => {
                    index_changeset.insert(path.clone(), FileChangeType::Index(IndexChangeType::Added));
                }
                Some(committed_oid) if committed_oid != index_oid => {
                    index_changeset.insert(
                        path.clone(),
                        FileChangeType::Index(IndexChangeType::Modified),
                    );
                }
                Some(_) => {}
            }

            match workdir.get(path) {
                None => {
                    workspace_changeset.insert(
                        path.clone(),
                        FileChangeType::Workspace(WorkspaceChangeType::Deleted),
                    );
                }
                Some(workdir_oid) if workdir_oid != index_oid => {
                    workspace_changeset.insert(
                        path.clone(),
                        FileChangeType::Workspace(WorkspaceChangeType::Modified),
                    );
                }
                Some(_) => {}
            }
        }

        committed
            .keys()
            .filter(|path| !index.contains_key(*path))
            .for_each(|path| {
                index_changeset.insert(
                    path.clone(),
                    FileChangeType::Index(IndexChangeType::Deleted),
                );
            });

        let untracked_files = workdir
            .keys()
            .filter(|path| !index.contains_key(*path))
            .cloned()
            .collect();

        StatusReport {
            branch: branch.into(),
            index_changeset,
            workspace_changeset,
            untracked_files,
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Changes to be committed
    pub fn staged(&self) -> &ChangeSet {
        &self.index_changeset
    }

    /// Changes not staged for commit
    pub fn unstaged(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked_files
    }

    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }

    /// Staged and unstaged changes merged per tracked path
    pub fn changed_files(&self) -> BTreeMap<String, FileChange> {
        let mut changed_files = BTreeMap::<String, FileChange>::new();

        for (path, change) in self.index_changeset.iter().chain(&self.workspace_changeset) {
            let entry = changed_files.entry(path.clone()).or_default();
            match change {
                FileChangeType::Index(index_change) => entry.index_change = *index_change,
                FileChangeType::Workspace(workspace_change) => {
                    entry.workspace_change = *workspace_change
                }
            }
        }

        changed_files
    }
}
