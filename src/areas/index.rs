//! Staging index
//!
//! The index tracks which blob each path will have in the next commit. It is a
//! plain text file of `<hash> <path>` lines sorted by path, so identical
//! contents always serialize to identical bytes.
//!
//! The index is never cached across commands: every operation calls
//! [`Index::rehydrate`] first and [`Index::write_updates`] last, while holding
//! the repository lock.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::core::parse_records;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Manifest;
use crate::config::ParseMode;
use crate::errors::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    entries: Manifest,
    parse_mode: ParseMode,
    /// Set when entries diverge from what was loaded
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>, parse_mode: ParseMode) -> Self {
        Index {
            path,
            entries: Manifest::new(),
            parse_mode,
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file is an empty index, not an error.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(Error::io(self.path.to_path_buf(), err)),
        };

        self.entries = parse_records(&content, &self.path, self.parse_mode, Self::parse_entry)?
            .into_iter()
            .collect();

        Ok(())
    }

    fn parse_entry(line: &str) -> Option<(String, ObjectId)> {
        let (oid, path) = line.split_once(' ')?;
        if path.is_empty() {
            return None;
        }

        ObjectId::try_parse(oid)
            .ok()
            .map(|oid| (path.to_string(), oid))
    }

    /// Serialize entries sorted by path, one `<hash> <path>` line each
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(path, oid)| format!("{oid} {path}\n"))
            .collect()
    }

    /// Persist the index if anything changed since it was loaded
    pub fn write_updates(&mut self) -> Result<()> {
        if !self.changed {
            return Ok(());
        }

        write_atomically(&self.path, self.serialize().as_bytes(), "index")?;
        self.changed = false;
        log::debug!("wrote {} index entries", self.entries.len());

        Ok(())
    }

    pub fn add(&mut self, path: impl Into<String>, oid: ObjectId) {
        let path = path.into();

        if self.entries.get(&path) != Some(&oid) {
            self.entries.insert(path, oid);
            self.changed = true;
        }
    }

    pub fn remove(&mut self, path: &str) -> Option<ObjectId> {
        let removed = self.entries.remove(path);
        self.changed |= removed.is_some();

        removed
    }

    /// Replace the whole map, e.g. with the tree of a fresh commit
    pub fn replace(&mut self, entries: Manifest) {
        if self.entries != entries {
            self.entries = entries;
            self.changed = true;
        }
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> &Manifest {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
