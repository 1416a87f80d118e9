//! Main entry point for the admissions store.
//!
//! This module provides the `Admissions` struct, the primary entry point for
//! all operations.

use crate::error::{Error, Result};
use crate::primitives::{Aid, Applications, Review};
use crate::types::{AccessMode, BlobStore, Config, TransitionPolicy};
use std::path::Path;
use std::sync::Arc;

/// The admissions store.
///
/// Create one with [`Admissions::open`], [`Admissions::ephemeral`] or
/// [`Admissions::builder`].
///
/// # Example
///
/// ```ignore
/// use admissions::prelude::*;
///
/// let db = Admissions::open("./admissions-data")?;
///
/// db.applications.submit("ada", draft)?;
/// db.review.decide("ada", ApplicationStatus::Accepted, Some("Welcome"), "dean")?;
/// db.aid.set("ada", 5000.0, 1500.0)?;
/// ```
pub struct Admissions {
    /// The underlying engine database
    pub(crate) inner: Arc<admissions_engine::Database>,

    /// Drafts, documents, submission
    pub applications: Applications,

    /// Index queries, decisions, notes
    pub review: Review,

    /// Financial aid
    pub aid: Aid,
}

impl Admissions {
    /// Open a filesystem-backed store at the given directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create an in-memory store; everything is lost on drop.
    ///
    /// | Method | Disk Files |
    /// |--------|------------|
    /// | `Admissions::ephemeral()` | None |
    /// | `Admissions::open(path)` | One per blob under `path` |
    pub fn ephemeral() -> Result<Self> {
        Self::builder().open()
    }

    /// Open a store as described by a configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().config(config).open()
    }

    /// Create a builder for store configuration.
    pub fn builder() -> AdmissionsBuilder {
        AdmissionsBuilder::new()
    }

    /// Underlying engine database, for building an executor.
    pub fn database(&self) -> &Arc<admissions_engine::Database> {
        &self.inner
    }

    /// Data directory, when filesystem-backed.
    pub fn path(&self) -> Option<&Path> {
        self.inner.data_dir()
    }

    /// Check if nothing is persisted to disk.
    pub fn is_ephemeral(&self) -> bool {
        self.inner.is_ephemeral()
    }

    /// Read-write or read-only.
    pub fn access_mode(&self) -> AccessMode {
        self.inner.access_mode()
    }

    /// Policy applied to decisions.
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.inner.transition_policy()
    }

    fn from_engine(db: Arc<admissions_engine::Database>) -> Self {
        Self {
            applications: Applications::new(db.clone()),
            review: Review::new(db.clone()),
            aid: Aid::new(db.clone()),
            inner: db,
        }
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// // Production: disk-backed, fsync on every write
/// let db = Admissions::builder()
///     .path("./admissions-data")
///     .open()?;
///
/// // Strict review rules, documents required before submission
/// let db = Admissions::builder()
///     .transition_policy(TransitionPolicy::ForwardOnly)
///     .require_documents(true)
///     .open()?;
/// ```
pub struct AdmissionsBuilder {
    inner: admissions_engine::DatabaseBuilder,
}

impl AdmissionsBuilder {
    /// Create a new builder (in-memory, permissive, read-write).
    pub fn new() -> Self {
        Self {
            inner: admissions_engine::DatabaseBuilder::new(),
        }
    }

    /// Apply a loaded configuration.
    pub fn config(mut self, config: &Config) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    /// Store blobs under this directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.inner = self.inner.path(path);
        self
    }

    /// Keep blobs in memory.
    pub fn in_memory(mut self) -> Self {
        self.inner = self.inner.in_memory();
        self
    }

    /// fsync every write (filesystem only, default on).
    pub fn fsync(mut self, fsync: bool) -> Self {
        self.inner = self.inner.fsync(fsync);
        self
    }

    /// Reject every write with `ReadOnly`.
    pub fn read_only(mut self) -> Self {
        self.inner = self.inner.access_mode(AccessMode::ReadOnly);
        self
    }

    /// Policy applied to decisions.
    pub fn transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.inner = self.inner.transition_policy(policy);
        self
    }

    /// Refuse submission until required documents are attached.
    pub fn require_documents(mut self, required: bool) -> Self {
        self.inner = self.inner.require_documents(required);
        self
    }

    /// Use a custom blob store.
    pub fn blob_store(mut self, blobs: Arc<dyn BlobStore>) -> Self {
        self.inner = self.inner.blob_store(blobs);
        self
    }

    /// Open the store.
    pub fn open(self) -> Result<Admissions> {
        let db = Arc::new(self.inner.open().map_err(Error::from)?);
        Ok(Admissions::from_engine(db))
    }
}

impl Default for AdmissionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
