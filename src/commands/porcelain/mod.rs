//! Porcelain commands (user-facing operations)
//!
//! - `init`: create the metadata directory
//! - `add`: stage files for commit
//! - `commit`: record the index as a new commit
//! - `status`: show staged, unstaged and untracked changes
//! - `log`: show the history of the current branch

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
