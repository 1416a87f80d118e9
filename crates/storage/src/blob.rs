//! Blob store contract

use admissions_core::Result;
use std::sync::Arc;

/// Content type used for every record, index and aid blob.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A stored object: raw bytes plus the content type given at `put`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Payload
    pub bytes: Vec<u8>,
    /// MIME type
    pub content_type: String,
}

impl Blob {
    /// Create a blob
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Blob {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Blob/object storage capability
///
/// Paths are slash-separated, relative, and never empty. `put` replaces the
/// whole object; there is no partial write or merge.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Individual operations are atomic
/// per path, but no ordering is promised between concurrent writers to the
/// same path (last write wins).
pub trait BlobStore: Send + Sync {
    /// Read a blob; `Ok(None)` when nothing is stored at `path`
    fn get(&self, path: &str) -> Result<Option<Blob>>;

    /// Store a blob, replacing any previous one
    fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Remove a blob; returns whether one existed
    fn delete(&self, path: &str) -> Result<bool>;

    /// Paths starting with `prefix`, sorted
    fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Short name for logs
    fn backend_name(&self) -> &'static str;
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn get(&self, path: &str) -> Result<Option<Blob>> {
        (**self).get(path)
    }

    fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        (**self).put(path, bytes, content_type)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        (**self).delete(path)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        (**self).list(prefix)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
