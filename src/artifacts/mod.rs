//! Data structures and algorithms
//!
//! - `core`: shared record parsing
//! - `log`: commit history traversal
//! - `objects`: object types (blob, tree, commit)
//! - `status`: three-way status reconciliation

pub mod core;
pub mod log;
pub mod objects;
pub mod status;
