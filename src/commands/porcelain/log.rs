use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let mut rev_list = self.rev_list()?.peekable();

        if rev_list.peek().is_none() {
            writeln!(
                self.writer(),
                "your current branch '{}' does not have any commits yet",
                self.refs().branch_name()?
            )?;
            return Ok(());
        }

        let mut first = true;
        for entry in rev_list {
            let (oid, commit) = entry?;

            if opts.oneline {
                self.show_commit_oneline(&oid, &commit)?;
            } else {
                if !first {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&oid, &commit)?;
            }
            first = false;
        }

        Ok(())
    }

    fn show_commit_medium(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("commit {}", oid).yellow())?;
        writeln!(self.writer(), "Author: {}", commit.author().name)?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
