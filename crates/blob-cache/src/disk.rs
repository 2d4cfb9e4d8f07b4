//! File-system blob store.
//!
//! Keys of the form `namespace:name` are laid out as
//! `<root>/<namespace>/<name>.json`, so `appdetails:570` lands in
//! `<root>/appdetails/570.json`. Keys that don't fit that shape (or contain
//! characters unsafe for a file name) are stored under a filename derived
//! from the SHA-256 hash of the key.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{BlobStore, CacheError};

const EXTENSION: &str = "json";

/// Blob store rooted at a directory.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Creates a store rooted at `root`.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        match key.split_once(':') {
            Some((namespace, name)) if is_safe_segment(namespace) && is_safe_segment(name) => self
                .root
                .join(namespace)
                .join(format!("{name}.{EXTENSION}")),
            _ => self.root.join(format!("{}.{EXTENSION}", hash_key(key))),
        }
    }

    /// Removes every entry in the store.
    ///
    /// Only files shaped like store entries are touched: hashed `*.json`
    /// files directly under the root and `*.json` files inside namespace
    /// directories. Namespace directories left empty are removed. A missing
    /// root directory is treated as an empty store.
    pub fn clear(&self) -> Result<(), CacheError> {
        let layout = self.scan()?;
        for file in &layout.files {
            std::fs::remove_file(file)?;
        }
        for dir in &layout.namespaces {
            if std::fs::read_dir(dir)?.next().is_none() {
                std::fs::remove_dir(dir)?;
            }
        }
        debug!(
            root = %self.root.display(),
            removed = layout.files.len(),
            "cleared blob store"
        );
        Ok(())
    }

    /// Returns the total size of all stored payloads in bytes.
    pub fn size(&self) -> u64 {
        let Ok(layout) = self.scan() else {
            return 0;
        };
        layout
            .files
            .iter()
            .filter_map(|file| std::fs::metadata(file).ok())
            .map(|meta| meta.len())
            .sum()
    }

    /// Collects the files this store could have written.
    fn scan(&self) -> Result<Layout, std::io::Error> {
        let mut layout = Layout::default();
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(layout),
            Err(e) => return Err(e),
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if path.is_dir() {
                if !is_safe_segment(&name) {
                    continue;
                }
                for inner in std::fs::read_dir(&path)?.flatten() {
                    let inner_path = inner.path();
                    let inner_name = inner.file_name();
                    let is_entry = json_stem(&inner_name.to_string_lossy())
                        .is_some_and(is_safe_segment);
                    if inner_path.is_file() && is_entry {
                        layout.files.push(inner_path);
                    }
                }
                layout.namespaces.push(path);
            } else if json_stem(&name).is_some_and(is_hash) {
                layout.files.push(path);
            }
        }
        Ok(layout)
    }
}

/// Store entries found on disk.
#[derive(Debug, Default)]
struct Layout {
    files: Vec<PathBuf>,
    namespaces: Vec<PathBuf>,
}

impl BlobStore for DiskStore {
    fn exists(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        match std::fs::read(self.path_for(key)) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CacheError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data)?;
        debug!(key, path = %path.display(), bytes = data.len(), "wrote blob");
        Ok(())
    }
}

/// Creates a deterministic filename hash from a key.
///
/// Uses first 16 bytes of SHA-256 (32 hex characters).
pub fn hash_key(key: &str) -> String {
    let hash = Sha256::digest(key.as_bytes());
    hex::encode(&hash[..16])
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn json_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(".json")
}

fn is_hash(stem: &str) -> bool {
    stem.len() == 32 && stem.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
