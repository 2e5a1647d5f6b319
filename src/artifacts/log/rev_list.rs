use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;

/// Walks first parents from a starting commit back to the root
///
/// Yields `(oid, commit)` pairs newest first. A missing or non-commit object
/// in the chain is yielded once as an error and ends the walk.
#[derive(Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevList<'_> {
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(Some(commit)) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Ok(None) => Some(Err(Error::CorruptObject {
                oid: commit_oid,
                reason: "expected a commit object".to_string(),
            })),
            Err(err) => Some(Err(err)),
        }
    }
}
