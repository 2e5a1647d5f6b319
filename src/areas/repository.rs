use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::lockfile::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::{Workspace, WorkspacePath};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Manifest, Tree};
use crate::artifacts::status::status_info::StatusReport;
use crate::config::{Author, Config};
use crate::errors::{Error, IoContext, Result};
use std::cell::{RefCell, RefMut};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Result of a `commit` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Created {
        oid: ObjectId,
        commit: Commit,
        branch: String,
    },
    /// The index matches the last commit; nothing was written
    NothingToCommit,
}

pub struct Repository {
    path: Box<Path>,
    config: Config,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the working tree rooted at `path`; the metadata directory need not exist yet
    pub fn new(path: &Path, config: Config, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path).at_path(path)?;
        }
        let path = path.canonicalize().at_path(path)?;

        let metadata_path = path.join(&config.metadata_dir);
        let database = Database::new(
            metadata_path.join("objects").into_boxed_path(),
            config.parse_mode,
        );
        let workspace = Workspace::new(
            path.clone().into_boxed_path(),
            config.metadata_dir.clone(),
            config.ignore_file.clone(),
        );
        let refs = Refs::new(metadata_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            config,
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    /// Open the repository containing `start`, searching parent directories
    pub fn discover(start: &Path, config: Config, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let start = start.canonicalize().at_path(start)?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(&config.metadata_dir).is_dir())
            .ok_or_else(|| Error::NoRepository(start.clone()))?;

        Self::new(root, config, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(&self.config.metadata_dir)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Fresh view of the index; never cached between operations
    pub fn load_index(&self) -> Result<Index> {
        let mut index = Index::new(
            self.metadata_path().join("index").into_boxed_path(),
            self.config.parse_mode,
        );
        index.rehydrate()?;

        Ok(index)
    }

    fn lock(&self) -> Result<RepositoryLock> {
        let metadata_path = self.metadata_path();
        if !metadata_path.is_dir() {
            return Err(Error::NoRepository(self.path.to_path_buf()));
        }

        RepositoryLock::acquire(&metadata_path)
    }

    /// Create the metadata layout: objects, refs/heads, HEAD and an empty index
    pub fn create_layout(&self) -> Result<()> {
        let metadata_path = self.metadata_path();
        if metadata_path.exists() {
            return Err(Error::RepositoryExists(metadata_path));
        }

        for dir in [self.database.objects_path().to_path_buf(), self.refs.heads_path()] {
            std::fs::create_dir_all(&dir).at_path(&dir)?;
        }

        self.refs.set_head(&self.config.default_branch)?;

        let index_path = metadata_path.join("index");
        std::fs::write(&index_path, b"").at_path(index_path)?;
        log::debug!("created repository layout at {}", metadata_path.display());

        Ok(())
    }

    /// File set of the commit HEAD points at; empty before the first commit
    pub fn committed_tree(&self) -> Result<Manifest> {
        match self.refs.read_head()? {
            Some(commit_oid) => self.tree_of(&commit_oid),
            None => Ok(Manifest::new()),
        }
    }

    fn tree_of(&self, commit_oid: &ObjectId) -> Result<Manifest> {
        let commit = self
            .database
            .parse_object_as_commit(commit_oid)?
            .ok_or_else(|| Error::CorruptObject {
                oid: commit_oid.clone(),
                reason: "HEAD does not point at a commit".to_string(),
            })?;

        let tree = self
            .database
            .parse_object_as_tree(commit.tree_oid())?
            .ok_or_else(|| Error::CorruptObject {
                oid: commit.tree_oid().clone(),
                reason: format!("commit {commit_oid} does not reference a tree"),
            })?;

        Ok(tree.into_entries())
    }

    /// Stage `path` (relative to the working-tree root, or absolute)
    ///
    /// - `.` stages every non-ignored file and drops entries no longer found
    /// - a file is stored as a blob and recorded in the index
    /// - a missing path that is tracked is removed from the index
    pub fn stage(&self, path: &Path) -> Result<()> {
        let _lock = self.lock()?;
        let mut index = self.load_index()?;
        let rules = self.workspace.ignore_rules()?;

        match self.workspace.classify(path)? {
            WorkspacePath::Root => {
                let files = self.workspace.list_files(&rules)?;
                for file in &files {
                    self.stage_file(&mut index, file)?;
                }

                let present = files.into_iter().collect::<BTreeSet<_>>();
                let vanished = index
                    .entries()
                    .keys()
                    .filter(|tracked| !present.contains(*tracked))
                    .cloned()
                    .collect::<Vec<_>>();
                for tracked in vanished {
                    log::debug!("unstaging {tracked}");
                    index.remove(&tracked);
                }
            }
            WorkspacePath::Directory(relative) => {
                return Err(Error::UnsupportedOperation(format!(
                    "cannot add directory '{relative}', add individual files or '.'"
                )));
            }
            WorkspacePath::File(relative) => {
                if self.workspace.is_ignore_file(&relative) || rules.is_excluded(&relative) {
                    return Err(Error::IgnoredPath(relative));
                }
                self.stage_file(&mut index, &relative)?;
            }
            WorkspacePath::Missing(relative) => {
                if index.remove(&relative).is_none() {
                    return Err(Error::io(
                        self.path.join(&relative),
                        std::io::ErrorKind::NotFound.into(),
                    ));
                }
                log::debug!("staged deletion of {relative}");
            }
        }

        index.write_updates()
    }

    fn stage_file(&self, index: &mut Index, relative: &str) -> Result<()> {
        let blob = self.workspace.parse_blob(relative)?;
        let oid = self.database.store(&blob)?;
        index.add(relative, oid);

        Ok(())
    }

    /// Record the index as a new commit on the current branch
    ///
    /// Writes the tree, then the commit, then moves the branch. Objects written
    /// before a failed branch update are unreferenced and harmless to retry.
    pub fn commit(&self, message: &str, author: Author) -> Result<CommitOutcome> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::UnsupportedOperation(
                "aborting commit due to empty commit message".to_string(),
            ));
        }

        let _lock = self.lock()?;
        let mut index = self.load_index()?;
        let parent = self.refs.read_head()?;
        let committed = match &parent {
            Some(parent) => self.tree_of(parent)?,
            None => Manifest::new(),
        };

        if index.is_empty() || index.entries() == &committed {
            return Ok(CommitOutcome::NothingToCommit);
        }

        let tree = Tree::new(index.entries().clone());
        let tree_oid = self.database.store(&tree)?;

        let commit = Commit::new(parent, tree_oid, author, message);
        let oid = self.database.store(&commit)?;
        self.refs.update_head(&oid)?;

        // the staged delta is consumed: the index now mirrors the new tree
        index.replace(tree.into_entries());
        index.write_updates()?;

        Ok(CommitOutcome::Created {
            oid,
            commit,
            branch: self.refs.branch_name()?,
        })
    }

    pub fn status_report(&self) -> Result<StatusReport> {
        let branch = self.refs.branch_name()?;
        let committed = self.committed_tree()?;
        let index = self.load_index()?;
        let workdir = self.workspace.scan(&self.workspace.ignore_rules()?)?;

        Ok(StatusReport::reconcile(
            branch,
            &committed,
            index.entries(),
            &workdir,
        ))
    }

    /// History of the current branch, newest first
    pub fn rev_list(&self) -> Result<RevList<'_>> {
        Ok(RevList::new(&self.database, self.refs.read_head()?))
    }
}
