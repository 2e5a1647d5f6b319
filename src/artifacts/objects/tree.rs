//! Tree object (flat manifest)
//!
//! A tree records every tracked file of a commit as a single flat list of
//! `path -> blob id` pairs. There is no nesting: `a/b/c.txt` is one entry,
//! not a chain of sub-trees.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<path> <blob-sha1>\n`, sorted by path
//!
//! Sorting happens on encode, so identical file sets always hash identically
//! whatever order the entries were inserted in.

use crate::artifacts::core::parse_records;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::config::ParseMode;
use crate::errors::Result;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::path::Path;

/// Root-relative, forward-slash path mapped to its blob id
pub type Manifest = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Manifest,
}

impl Tree {
    pub fn new(entries: Manifest) -> Self {
        Tree { entries }
    }

    /// Build a tree from `(path, oid)` pairs in any order
    pub fn build<'e>(entries: impl IntoIterator<Item = (&'e String, &'e ObjectId)>) -> Self {
        Tree {
            entries: entries
                .into_iter()
                .map(|(path, oid)| (path.clone(), oid.clone()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &Manifest {
        &self.entries
    }

    pub fn into_entries(self) -> Manifest {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn parse_entry(line: &str) -> Option<(String, ObjectId)> {
        let (path, oid) = line.rsplit_once(' ')?;
        if path.is_empty() {
            return None;
        }

        ObjectId::try_parse(oid)
            .ok()
            .map(|oid| (path.to_string(), oid))
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        // BTreeMap iteration is already sorted by path
        let manifest = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path} {oid}\n"))
            .collect::<String>();

        Bytes::from(manifest)
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: &[u8], origin: &Path, mode: ParseMode) -> Result<Self> {
        let content = String::from_utf8_lossy(payload);
        let entries = parse_records(&content, origin, mode, Self::parse_entry)?;

        Ok(Tree {
            entries: entries.into_iter().collect(),
        })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.serialize()).into_owned()
    }
}
