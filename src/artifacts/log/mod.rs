//! Commit history traversal
//!
//! - `rev_list`: first-parent walk from a branch tip back to the root commit

pub mod rev_list;
