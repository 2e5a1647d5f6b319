//! Commit object
//!
//! Commits link a tree snapshot to its single parent commit (none for the
//! root commit) together with author metadata and a message. History is a
//! singly-linked list; there are no merge commits.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha or empty>
//! author <name>
//! date <RFC 3339 UTC timestamp>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::config::{Author, ParseMode};
use crate::errors::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit ID (`None` for the root commit)
    parent: Option<ObjectId>,
    /// Flat manifest of every tracked file
    tree_oid: ObjectId,
    author: Author,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: impl Into<String>,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            author,
            message: message.into(),
        }
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Timestamp rendered like `Mon Jan 2 15:04:05 2006 +0000`
    pub fn readable_timestamp(&self) -> String {
        self.author
            .timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn malformed(origin: &Path, line: usize, content: &str) -> Error {
        Error::MalformedRecord {
            file: origin.to_path_buf(),
            line,
            content: content.to_string(),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let parent = self.parent.as_ref().map(ObjectId::as_ref).unwrap_or("");

        let content = format!(
            "tree {}\nparent {}\nauthor {}\ndate {}\n\n{}\n",
            self.tree_oid,
            parent,
            self.author.name,
            self.author
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            self.message
        );

        Bytes::from(content)
    }
}

impl Unpackable for Commit {
    // Commit headers are never parsed leniently: a commit missing its tree or
    // date cannot be reconstructed, whatever the configured mode.
    fn deserialize(payload: &[u8], origin: &Path, _mode: ParseMode) -> Result<Self> {
        let content = std::str::from_utf8(payload)
            .map_err(|_| Self::malformed(origin, 1, "<non utf-8 commit>"))?;

        let (headers, message) = content
            .split_once("\n\n")
            .ok_or_else(|| Self::malformed(origin, 1, content))?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut author_name = None;
        let mut date = None;

        for (index, line) in headers.lines().enumerate() {
            let (key, raw_value) = line.split_once(' ').unwrap_or((line, ""));
            let value = raw_value.trim();

            match key {
                "tree" => {
                    tree_oid = Some(
                        ObjectId::try_parse(value)
                            .map_err(|_| Self::malformed(origin, index + 1, line))?,
                    )
                }
                "parent" if value.is_empty() => parent = None,
                "parent" => {
                    parent = Some(
                        ObjectId::try_parse(value)
                            .map_err(|_| Self::malformed(origin, index + 1, line))?,
                    )
                }
                // names are kept verbatim, surrounding spaces included
                "author" => author_name = Some(raw_value.to_string()),
                "date" => {
                    date = Some(
                        DateTime::parse_from_rfc3339(value)
                            .map_err(|_| Self::malformed(origin, index + 1, line))?
                            .with_timezone(&Utc),
                    )
                }
                _ => return Err(Self::malformed(origin, index + 1, line)),
            }
        }

        let tree_oid = tree_oid.ok_or_else(|| Self::malformed(origin, 1, "missing tree"))?;
        let author_name =
            author_name.ok_or_else(|| Self::malformed(origin, 1, "missing author"))?;
        let date = date.ok_or_else(|| Self::malformed(origin, 1, "missing date"))?;

        let message = message.strip_suffix('\n').unwrap_or(message);

        Ok(Commit::new(
            parent,
            tree_oid,
            Author::new(author_name, date),
            message,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.serialize()).into_owned()
    }
}
