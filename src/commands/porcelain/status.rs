use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{ChangeSet, StatusReport};
use colored::Colorize;

impl Repository {
    pub fn status(&self, porcelain: bool) -> anyhow::Result<()> {
        let report = self.status_report()?;

        if porcelain {
            self.print_porcelain_format(&report)
        } else {
            self.print_long_format(&report)
        }
    }

    fn print_porcelain_format(&self, report: &StatusReport) -> anyhow::Result<()> {
        for (path, change) in report.changed_files() {
            writeln!(self.writer(), "{} {}", change, path)?;
        }

        for path in report.untracked() {
            writeln!(self.writer(), "?? {}", path)?;
        }

        Ok(())
    }

    fn print_long_format(&self, report: &StatusReport) -> anyhow::Result<()> {
        writeln!(self.writer(), "On branch {}", report.branch())?;

        if report.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
            return Ok(());
        }

        self.print_changeset("Changes to be committed:", report.staged())?;
        self.print_changeset("Changes not staged for commit:", report.unstaged())?;

        if !report.untracked().is_empty() {
            writeln!(self.writer(), "Untracked files:")?;
            for path in report.untracked() {
                writeln!(self.writer(), "{:>width$}{}", "", path.red(), width = 8)?;
            }
            writeln!(self.writer())?;
        }

        if report.staged().is_empty() {
            if report.unstaged().is_empty() {
                writeln!(
                    self.writer(),
                    "nothing added to commit but untracked files present"
                )?;
            } else {
                writeln!(self.writer(), "no changes added to commit")?;
            }
        }

        Ok(())
    }

    fn print_changeset(&self, header: &str, changeset: &ChangeSet) -> anyhow::Result<()> {
        if changeset.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "{}", header)?;
        for (path, change) in changeset {
            writeln!(self.writer(), "{}{}", change, path)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
