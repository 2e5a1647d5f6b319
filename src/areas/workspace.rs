use crate::areas::ignore::IgnoreRules;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Manifest;
use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// What an explicit path handed to `add` turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspacePath {
    /// The working-tree root itself (`.`)
    Root,
    File(String),
    Directory(String),
    /// Nothing on disk at that path
    Missing(String),
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    metadata_dir: String,
    ignore_file: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, metadata_dir: String, ignore_file: String) -> Self {
        Workspace {
            path,
            metadata_dir,
            ignore_file,
        }
    }

    /// True only for the ignore file at the working-tree root
    pub fn is_ignore_file(&self, relative_path: &str) -> bool {
        relative_path == self.ignore_file
    }

    pub fn ignore_rules(&self) -> Result<IgnoreRules> {
        IgnoreRules::load(&self.path.join(&self.ignore_file), self.metadata_dir.as_str())
    }

    /// Turn an absolute (or root-relative) path into a root-relative one with `/` separators
    ///
    /// The path is normalised lexically so that it may name a file that no
    /// longer exists.
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let absolute = normalize(&self.path.join(path));

        let relative = absolute
            .strip_prefix(&self.path)
            .map_err(|_| Error::PathOutsideRepository(path.to_path_buf()))?;

        let components = relative
            .components()
            .map(|component| {
                component
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| Error::PathOutsideRepository(path.to_path_buf()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(components.join("/"))
    }

    pub fn classify(&self, path: &Path) -> Result<WorkspacePath> {
        let relative = self.relative_path(path)?;
        if relative.is_empty() {
            return Ok(WorkspacePath::Root);
        }

        let absolute = self.path.join(&relative);
        Ok(match std::fs::metadata(&absolute) {
            Ok(metadata) if metadata.is_dir() => WorkspacePath::Directory(relative),
            Ok(_) => WorkspacePath::File(relative),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                WorkspacePath::Missing(relative)
            }
            Err(err) => return Err(Error::io(absolute, err)),
        })
    }

    /// Every non-ignored file in the working tree, sorted by path
    ///
    /// The metadata directory and ignored directories are pruned without being
    /// descended into. The root ignore file is never listed; files with the
    /// same name further down are ordinary files.
    pub fn list_files(&self, rules: &IgnoreRules) -> Result<Vec<String>> {
        let walker = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }

                match self.entry_relative_path(entry.path()) {
                    Some(relative) => !rules.is_ignored(&relative, entry.file_type().is_dir()),
                    None => {
                        log::warn!("skipping non utf-8 path {}", entry.path().display());
                        false
                    }
                }
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.path.to_path_buf());
                Error::io(path, err.into())
            })?;

            if !entry.file_type().is_file()
                || (entry.depth() == 1 && entry.file_name() == self.ignore_file.as_str())
            {
                continue;
            }

            if let Some(relative) = self.entry_relative_path(entry.path()) {
                files.push(relative);
            }
        }

        Ok(files)
    }

    /// Hash every non-ignored file as a blob without storing anything
    pub fn scan(&self, rules: &IgnoreRules) -> Result<Manifest> {
        self.list_files(rules)?
            .into_iter()
            .map(|path| {
                let oid = self.parse_blob(&path)?.object_id();
                Ok((path, oid))
            })
            .collect()
    }

    pub fn read_file(&self, relative_path: &str) -> Result<Bytes> {
        let path = self.path.join(relative_path);

        std::fs::read(&path).map(Bytes::from).at_path(path)
    }

    pub fn parse_blob(&self, relative_path: &str) -> Result<Blob> {
        Ok(Blob::new(self.read_file(relative_path)?))
    }

    fn entry_relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.path).ok()?;

        relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()
            .map(|components| components.join("/"))
    }
}

/// Resolve `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
