//! References (HEAD and branches)
//!
//! HEAD is always symbolic: `ref: refs/heads/<branch>`. The branch file it
//! names holds the tip commit id on a single line, or does not exist (or is
//! empty) before the first commit.
//!
//! Both files are rewritten via temp file + rename. Rewriting the branch file
//! is the commit point of `commit`: until it lands, new objects are merely
//! unreferenced.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoContext, Result};
use derive_new::new;
use std::path::{Component, Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

const HEADS_PREFIX: &str = "refs/heads/";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.twig`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    /// The reference HEAD points at, e.g. `refs/heads/main`
    pub fn current_ref(&self) -> Result<String> {
        let head_path = self.head_path();

        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NoRepository(self.path.to_path_buf()));
            }
            Err(err) => return Err(Error::io(head_path, err)),
        };
        let content = content.trim_end();

        let malformed = || Error::MalformedRecord {
            file: head_path.clone(),
            line: 1,
            content: content.to_string(),
        };

        let captures = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .ok_or_else(malformed)?;
        let target = captures[1].trim().to_string();

        let escapes = Path::new(&target)
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if escapes {
            return Err(malformed());
        }

        Ok(target)
    }

    /// Short branch name of the current reference (`main` for `refs/heads/main`)
    pub fn branch_name(&self) -> Result<String> {
        let current_ref = self.current_ref()?;

        Ok(current_ref
            .strip_prefix(HEADS_PREFIX)
            .map(str::to_string)
            .unwrap_or(current_ref))
    }

    pub fn current_ref_path(&self) -> Result<PathBuf> {
        Ok(self.path.join(self.current_ref()?))
    }

    /// Tip commit of the current branch; `None` before the first commit
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        let ref_path = self.current_ref_path()?;

        let content = match std::fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::io(ref_path, err)),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content)
            .map(Some)
            .map_err(|_| Error::MalformedRecord {
                file: ref_path,
                line: 1,
                content: content.to_string(),
            })
    }

    /// Point the current branch at `oid`
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        let ref_path = self.current_ref_path()?;

        if let Some(parent) = ref_path.parent() {
            std::fs::create_dir_all(parent).at_path(parent)?;
        }

        write_atomically(&ref_path, format!("{oid}\n").as_bytes(), "ref")?;
        log::debug!("updated {} to {}", ref_path.display(), oid);

        Ok(())
    }

    /// Make HEAD a symbolic reference to `refs/heads/<branch>`
    pub fn set_head(&self, branch: &str) -> Result<()> {
        write_atomically(
            &self.head_path(),
            format!("ref: {HEADS_PREFIX}{branch}\n").as_bytes(),
            "ref",
        )?;
        log::debug!("HEAD now points at {HEADS_PREFIX}{branch}");

        Ok(())
    }
}
