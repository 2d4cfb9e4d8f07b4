//! In-memory blob store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{BlobStore, CacheError};

/// Blob store that keeps payloads in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BlobStore for MemoryStore {
    fn exists(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        self.lock()
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), CacheError> {
        self.lock().insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
