use crate::areas::repository::Repository;
use anyhow::Context;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        self.create_layout().with_context(|| {
            format!(
                "failed to initialize repository in {}",
                self.path().display()
            )
        })?;

        writeln!(
            self.writer(),
            "Initialized empty twig repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
