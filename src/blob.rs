//! Key-addressed storage of opaque serialized values.
//!
//! Both stores persist through this trait and nothing else. Each key is
//! independent; there are no transactions spanning keys.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

pub trait BlobStore {
    /// Returns the blob stored at `key`, or `None` if it was never written
    /// or has been removed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob at `key` in a single call.
    fn write(&self, key: &str, blob: &str) -> Result<()>;

    /// Deletes the blob at `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local blob store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
