//! Error types for repository operations
//!
//! Every fallible operation in the library returns [`Result`]. The binary wraps
//! these with `anyhow` context; nothing in here terminates the process.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Errors raised by the object store, index, references and workspace
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("not a twig repository: {0}")]
    NoRepository(PathBuf),

    #[error("repository already exists at {0}")]
    RepositoryExists(PathBuf),

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    #[error("malformed record in {file} at line {line}: {content:?}")]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        content: String,
    },

    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("path is ignored by the ignore file: {0}")]
    IgnoredPath(String),

    #[error("path is outside the repository: {0}")]
    PathOutsideRepository(PathBuf),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error denotes an absent object or file rather than a failure
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ObjectNotFound(_) | Error::NoRepository(_) => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Attach a path to a raw `std::io::Result`
pub(crate) trait IoContext<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::io(path, source))
    }
}
