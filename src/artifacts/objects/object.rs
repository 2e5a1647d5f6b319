use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::config::ParseMode;
use crate::errors::Result;
use bytes::{BufMut, Bytes, BytesMut};
use std::path::Path;

/// Serialize an object's payload (without the type header)
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Rebuild an object from its payload
///
/// `origin` names where the payload came from and is only used for error
/// reporting; `mode` decides whether malformed records abort the read.
pub trait Unpackable {
    fn deserialize(payload: &[u8], origin: &Path, mode: ParseMode) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// Header plus payload, exactly as stored and hashed
    fn encode(&self) -> Bytes {
        encode_raw(self.object_type(), &self.serialize())
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::digest(&self.encode())
    }
}

pub(crate) fn encode_raw(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = object_type.header(payload.len());

    let mut buffer = BytesMut::with_capacity(header.len() + payload.len());
    buffer.put_slice(header.as_bytes());
    buffer.put_slice(payload);

    buffer.freeze()
}

/// An object read back from the store with its header already stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub object_type: ObjectType,
    pub payload: Bytes,
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
