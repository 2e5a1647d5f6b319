//! Core repository components
//!
//! - `database`: content-addressed object store for blobs, trees and commits
//! - `ignore`: ignore-file pattern matching
//! - `index`: staging area mapping tracked paths to blob ids
//! - `lockfile`: repository lock and atomic file replacement
//! - `refs`: HEAD and branch references
//! - `repository`: high-level operations tying the areas together
//! - `workspace`: working directory scanning and file access

pub mod database;
pub mod ignore;
pub mod index;
pub mod lockfile;
pub mod refs;
pub mod repository;
pub mod workspace;
