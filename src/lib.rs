//! A minimal content-addressed version-control core
//!
//! - [`areas`]: object store, index, references, workspace and the
//!   [`Repository`](areas::repository::Repository) that ties them together
//! - [`artifacts`]: objects, status reconciliation and history traversal
//! - [`commands`]: CLI-facing renderers for each subcommand
//! - [`config`] / [`errors`]: repository context and error types

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
