//! Durable key to byte-payload store.
//!
//! Used to keep expensive, rarely-changing upstream responses on disk.
//! Entries are never expired; callers that need fresh data clear the store
//! out-of-band (see [`DiskStore::clear`]).
//!
//! No locking is performed. A store is meant for a single in-process caller.

pub mod disk;
pub mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Errors from blob store operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache entry not found: {0}")]
    NotFound(String),
}

/// A string-keyed blob store.
pub trait BlobStore: Send + Sync {
    /// Returns `true` if an entry exists for `key`.
    fn exists(&self, key: &str) -> bool;

    /// Reads the payload stored under `key`.
    ///
    /// Fails with [`CacheError::NotFound`] if the key is absent.
    fn read(&self, key: &str) -> Result<Vec<u8>, CacheError>;

    /// Stores `data` under `key`, replacing any previous payload.
    fn write(&self, key: &str, data: &[u8]) -> Result<(), CacheError>;
}
