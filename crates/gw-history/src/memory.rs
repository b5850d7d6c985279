//! In-process blob backend.

use std::collections::HashMap;

use crate::HistoryResult;
use crate::blob::BlobStore;

/// Keeps blobs in a `HashMap`.  Contents vanish with the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> HistoryResult<()> {
        self.blobs.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> HistoryResult<()> {
        self.blobs.remove(key);
        Ok(())
    }
}
