//! In-memory blob store
//!
//! DashMap keyed by blob path: sharded writes, lock-free reads. Nothing
//! touches disk and all data is lost on drop.

use crate::blob::{Blob, BlobStore};
use admissions_core::{Error, Result};
use dashmap::DashMap;

/// Blob store that keeps everything in memory
///
/// # Example
///
/// ```
/// use admissions_storage::{BlobStore, InMemoryBlobStore};
///
/// let store = InMemoryBlobStore::new();
/// store.put("applications/ada", b"{}".to_vec(), "application/json").unwrap();
/// assert!(store.get("applications/ada").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: DashMap<String, Blob>,
}

impl InMemoryBlobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

fn check_path(path: &str) -> Result<()> {
    if path.is_empty() || path.starts_with('/') {
        return Err(Error::storage(path, "blob path must be relative and non-empty"));
    }
    Ok(())
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, path: &str) -> Result<Option<Blob>> {
        check_path(path)?;
        Ok(self.blobs.get(path).map(|entry| entry.value().clone()))
    }

    fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        check_path(path)?;
        self.blobs
            .insert(path.to_string(), Blob::new(bytes, content_type));
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<bool> {
        check_path(path)?;
        Ok(self.blobs.remove(path).is_some())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut paths: Vec<String> = self
            .blobs
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
