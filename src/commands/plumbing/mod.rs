//! Plumbing commands (low-level object access)
//!
//! - `hash-object`: compute a blob id and optionally store it
//! - `cat-file`: print the payload of a stored object

pub mod cat_file;
pub mod hash_object;
