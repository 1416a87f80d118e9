//! Database: shared handle over the blob store
//!
//! ## Design
//!
//! The Database holds no application data itself. It owns:
//! - the blob store (`Arc<dyn BlobStore>`) every primitive reads and writes
//! - the Index write lock, a single mutex for "the Index resource"
//! - the access mode and lifecycle policy
//!
//! Primitives are stateless facades over `Arc<Database>`.
//!
//! ## Index Write Serialization
//!
//! The Index is one blob rewritten as a whole. Two unsynchronized
//! read-modify-write cycles on it lose an update. Every Index mutation runs
//! inside [`Database::with_index_lock`], so concurrent decisions on different
//! applicants serialize on the Index only; record writes stay concurrent.

use crate::config::{Config, LifecycleConfig, StorageBackend};
use admissions_core::{Error, Result, TransitionPolicy};
use admissions_security::{AccessMode, OpenOptions};
use admissions_storage::{BlobStore, FsBlobStore, InMemoryBlobStore, CONTENT_TYPE_JSON};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared database handle
///
/// # Example
///
/// ```ignore
/// use admissions_engine::Database;
///
/// // Ephemeral (no disk)
/// let db = Database::ephemeral()?;
///
/// // Filesystem-backed with fsync
/// let db = Database::open("./admissions-data")?;
/// ```
pub struct Database {
    blobs: Arc<dyn BlobStore>,
    index_lock: Mutex<()>,
    access_mode: AccessMode,
    lifecycle: LifecycleConfig,
    data_dir: Option<PathBuf>,
}

impl Database {
    /// Open a filesystem-backed database with default settings
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Open a filesystem-backed database with explicit options
    pub fn open_with(path: impl AsRef<Path>, opts: OpenOptions) -> Result<Self> {
        Self::builder()
            .path(path)
            .access_mode(opts.access_mode)
            .open()
    }

    /// Create an in-memory database; all data is lost on drop
    pub fn ephemeral() -> Result<Self> {
        Self::builder().open()
    }

    /// Build a database from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().config(config).open()
    }

    /// Builder for custom configuration
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Underlying blob store
    pub fn blobs(&self) -> &dyn BlobStore {
        self.blobs.as_ref()
    }

    /// Current access mode
    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Policy for admin decisions
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.lifecycle.transition_policy
    }

    /// Whether submission requires every required document
    pub fn require_documents(&self) -> bool {
        self.lifecycle.require_documents
    }

    /// Data directory of a filesystem-backed database
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Whether nothing is persisted to disk
    pub fn is_ephemeral(&self) -> bool {
        self.data_dir.is_none()
    }

    /// Read and decode a JSON blob; `Ok(None)` when absent
    pub fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.blobs.get(path)? {
            Some(blob) => {
                let value = serde_json::from_slice(&blob.bytes).map_err(|e| {
                    Error::Serialization(format!("{}: {}", path, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Encode and store a JSON blob, replacing what was there
    pub fn write_json<T: Serialize>(&self, path: &str, value: &T) -> Result<()> {
        self.access_mode.check_write()?;
        let bytes = serde_json::to_vec(value)?;
        debug!(path, bytes = bytes.len(), "writing blob");
        self.blobs.put(path, bytes, CONTENT_TYPE_JSON)
    }

    /// Paths under a prefix, sorted
    pub fn list_paths(&self, prefix: &str) -> Result<Vec<String>> {
        self.blobs.list(prefix)
    }

    /// Run `f` while holding the Index write lock
    ///
    /// Every read-modify-write of the Index blob must go through here.
    /// The lock is not reentrant: `f` must not call back into another
    /// Index-mutating operation.
    pub fn with_index_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.access_mode.check_write()?;
        let _guard = self.index_lock.lock();
        f()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.blobs.backend_name())
            .field("access_mode", &self.access_mode)
            .field("lifecycle", &self.lifecycle)
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

/// Builder for database configuration
///
/// # Example
///
/// ```ignore
/// // Production: disk-backed, fsync on every write
/// let db = Database::builder()
///     .path("./admissions-data")
///     .open()?;
///
/// // Tests: in memory, terminal decisions are final
/// let db = Database::builder()
///     .transition_policy(TransitionPolicy::ForwardOnly)
///     .open()?;
/// ```
pub struct DatabaseBuilder {
    path: Option<PathBuf>,
    fsync: bool,
    access_mode: AccessMode,
    lifecycle: LifecycleConfig,
    blobs: Option<Arc<dyn BlobStore>>,
}

impl DatabaseBuilder {
    /// Create a builder with default settings (in-memory)
    pub fn new() -> Self {
        DatabaseBuilder {
            path: None,
            fsync: true,
            access_mode: AccessMode::ReadWrite,
            lifecycle: LifecycleConfig::default(),
            blobs: None,
        }
    }

    /// Apply a loaded configuration
    pub fn config(mut self, config: &Config) -> Self {
        self.path = match config.storage.backend {
            StorageBackend::Filesystem => Some(config.storage.path.clone()),
            StorageBackend::Memory => None,
        };
        self.fsync = config.storage.fsync;
        self.lifecycle = config.lifecycle;
        self
    }

    /// Store blobs on disk under `path`
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep blobs in memory
    pub fn in_memory(mut self) -> Self {
        self.path = None;
        self
    }

    /// fsync every blob write (filesystem backend only)
    pub fn fsync(mut self, fsync: bool) -> Self {
        self.fsync = fsync;
        self
    }

    /// Read-write or read-only
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Policy for admin decisions
    pub fn transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.lifecycle.transition_policy = policy;
        self
    }

    /// Refuse submission until required documents are attached
    pub fn require_documents(mut self, required: bool) -> Self {
        self.lifecycle.require_documents = required;
        self
    }

    /// Use a caller-supplied blob store (takes precedence over `path`)
    pub fn blob_store(mut self, blobs: Arc<dyn BlobStore>) -> Self {
        self.blobs = Some(blobs);
        self
    }

    /// Open the database
    pub fn open(self) -> Result<Database> {
        let (blobs, data_dir): (Arc<dyn BlobStore>, Option<PathBuf>) = match (self.blobs, self.path)
        {
            (Some(blobs), _) => (blobs, None),
            (None, Some(path)) => {
                let store = FsBlobStore::open(&path, self.fsync)?;
                (Arc::new(store), Some(path))
            }
            (None, None) => (Arc::new(InMemoryBlobStore::new()), None),
        };

        info!(
            backend = blobs.backend_name(),
            access_mode = ?self.access_mode,
            policy = ?self.lifecycle.transition_policy,
            "database opened"
        );

        Ok(Database {
            blobs,
            index_lock: Mutex::new(()),
            access_mode: self.access_mode,
            lifecycle: self.lifecycle,
            data_dir,
        })
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
