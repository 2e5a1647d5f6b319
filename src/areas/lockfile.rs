//! Crash-safe file replacement and repository-wide locking
//!
//! Index and reference files are rewritten by writing a sibling temp file and
//! renaming it over the target, so readers never observe a half-written file.
//! Read-modify-write sequences on them run under an exclusive advisory lock on
//! `<meta>/lock`.
//!
//! On Unix the lock is a per-process `fcntl` record lock. It serialises
//! separate `twig` processes, but two [`RepositoryLock`]s for the same
//! repository inside one process do not block each other, and dropping either
//! releases both. Within a process, updates to one repository must not overlap.

use crate::errors::{IoContext, Result};
use fake::rand;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = "lock";

/// Held for the duration of an index/ref update; released on drop
pub struct RepositoryLock {
    path: PathBuf,
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the exclusive lock on the metadata directory is acquired
    pub fn acquire(metadata_path: &Path) -> Result<Self> {
        let path = metadata_path.join(LOCK_FILE);

        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .at_path(&path)?;

        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1).at_path(&path)?;
        log::debug!("acquired repository lock {}", path.display());

        Ok(RepositoryLock {
            path,
            _guard: guard,
        })
    }
}

impl Drop for RepositoryLock {
    fn drop(&mut self) {
        log::debug!("released repository lock {}", self.path.display());
    }
}

/// Replace `target` with `content` via temp file + rename
pub fn write_atomically(target: &Path, content: &[u8], kind: &str) -> Result<()> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    let temp_path = parent.join(generate_temp_name(kind));

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .at_path(&temp_path)?;

    let written = file
        .write_all(content)
        .and_then(|_| file.sync_all())
        .at_path(&temp_path);

    if let Err(err) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }

    std::fs::rename(&temp_path, target).at_path(target)
}

fn generate_temp_name(kind: &str) -> String {
    format!("tmp-{}-{}", kind, rand::random::<u32>())
}
