//! Working tree status
//!
//! - `file_change`: change kinds and their short / long labels
//! - `status_info`: reconciliation of committed tree, index and working tree

pub mod file_change;
pub mod status_info;
