//! Command implementations
//!
//! - `plumbing`: low-level commands for direct object manipulation
//! - `porcelain`: user-facing commands for the add / commit / status workflow
//!
//! Each command is an `impl Repository` block that renders to the
//! repository's writer and reports failures through `anyhow`.

pub mod plumbing;
pub mod porcelain;
