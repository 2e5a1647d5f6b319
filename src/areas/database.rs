//! Content-addressed object store
//!
//! Objects are written verbatim (header + payload, no compression) under
//! `objects/<2 hex>/<38 hex>`. A given content is written at most once; an
//! existing object file is never touched again, which makes concurrent
//! writers of the same content harmless without locking.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, RawObject, Unpackable, encode_raw};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::config::ParseMode;
use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    parse_mode: ParseMode,
}

impl Database {
    pub fn new(path: Box<Path>, parse_mode: ParseMode) -> Self {
        Database { path, parse_mode }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Store `payload` under `kind`, returning its id
    ///
    /// Idempotent: if the object already exists nothing is written.
    pub fn put(&self, kind: ObjectType, payload: &[u8]) -> Result<ObjectId> {
        let raw = encode_raw(kind, payload);
        let object_id = ObjectId::digest(&raw);

        self.write_if_absent(&object_id, &raw)?;

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let raw = object.encode();
        let object_id = ObjectId::digest(&raw);

        self.write_if_absent(&object_id, &raw)?;

        Ok(object_id)
    }

    /// Read an object and split off its header
    pub fn load(&self, object_id: &ObjectId) -> Result<RawObject> {
        let object_path = self.object_path(object_id);

        let content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(object_id.clone()));
            }
            Err(err) => return Err(Error::io(object_path, err)),
        };

        Self::parse_header(object_id, Bytes::from(content))
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let raw = self.load(object_id)?;
        let origin = self.object_path(object_id);

        Ok(match raw.object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(
                &raw.payload,
                &origin,
                self.parse_mode,
            )?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(
                &raw.payload,
                &origin,
                self.parse_mode,
            )?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(
                &raw.payload,
                &origin,
                self.parse_mode,
            )?)),
        })
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Option<Blob>> {
        self.parse_object_as(object_id, ObjectType::Blob)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Result<Option<Tree>> {
        self.parse_object_as(object_id, ObjectType::Tree)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Option<Commit>> {
        self.parse_object_as(object_id, ObjectType::Commit)
    }

    fn parse_object_as<T: Unpackable>(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> Result<Option<T>> {
        let raw = self.load(object_id)?;

        if raw.object_type != expected {
            return Ok(None);
        }

        T::deserialize(&raw.payload, &self.object_path(object_id), self.parse_mode).map(Some)
    }

    fn write_if_absent(&self, object_id: &ObjectId, raw: &[u8]) -> Result<()> {
        let object_path = self.object_path(object_id);

        if object_path.exists() {
            log::debug!("object {object_id} already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::CorruptObject {
                oid: object_id.clone(),
                reason: format!("invalid object path {}", object_path.display()),
            })?;
        std::fs::create_dir_all(object_dir).at_path(object_dir)?;

        write_atomically(&object_path, raw, "obj")?;
        log::debug!("stored object {object_id}");

        Ok(())
    }

    fn parse_header(object_id: &ObjectId, content: Bytes) -> Result<RawObject> {
        let corrupt = |reason: &str| Error::CorruptObject {
            oid: object_id.clone(),
            reason: reason.to_string(),
        };

        let nul = content
            .iter()
            .position(|&byte| byte == 0)
            .ok_or_else(|| corrupt("missing header terminator"))?;

        let header =
            std::str::from_utf8(&content[..nul]).map_err(|_| corrupt("non utf-8 header"))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| corrupt("header has no size"))?;

        let object_type = kind.parse::<ObjectType>().map_err(|reason| corrupt(&reason))?;
        let size = size
            .parse::<usize>()
            .map_err(|_| corrupt("header size is not a number"))?;

        let payload = content.slice(nul + 1..);
        if payload.len() != size {
            return Err(corrupt(&format!(
                "header announces {} bytes but payload has {}",
                size,
                payload.len()
            )));
        }

        Ok(RawObject {
            object_type,
            payload,
        })
    }
}
