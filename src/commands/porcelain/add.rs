use crate::areas::repository::Repository;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Paths are relative to the working-tree root or absolute
    pub fn add(&self, paths: &[impl AsRef<Path>]) -> anyhow::Result<()> {
        for path in paths {
            let path = path.as_ref();

            self.stage(path)
                .with_context(|| format!("failed to add '{}'", path.display()))?;
        }

        Ok(())
    }
}
