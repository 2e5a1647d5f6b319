use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::path::Path;

impl Repository {
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        let data = std::fs::read(object_path)
            .with_context(|| format!("could not read '{}'", object_path.display()))?;
        let object = Blob::new(data);

        let object_id = if write {
            self.database().store(&object)?
        } else {
            object.object_id()
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
