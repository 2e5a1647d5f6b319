use crate::areas::repository::{CommitOutcome, Repository};
use crate::config::Author;
use colored::Colorize;

impl Repository {
    pub fn commit_changes(&self, message: &str, author: Author) -> anyhow::Result<()> {
        match self.commit(message, author)? {
            CommitOutcome::Created {
                oid,
                commit,
                branch,
            } => {
                let is_root = match commit.parent() {
                    Some(_) => "",
                    None => " (root-commit)",
                };

                writeln!(
                    self.writer(),
                    "[{}{} {}] {}",
                    branch,
                    is_root,
                    oid.to_short_oid().yellow(),
                    commit.short_message()
                )?;
            }
            CommitOutcome::NothingToCommit => {
                writeln!(self.writer(), "nothing to commit")?;
            }
        }

        Ok(())
    }
}
