//! RecordStore: applicant key -> full application record
//!
//! ## Design: STATELESS FACADE
//!
//! RecordStore holds ONLY `Arc<Database>`. Each record is one JSON blob at
//! `applications/{key}`; `put` replaces the whole document. Callers do their
//! own read-modify-write.

use admissions_core::{ApplicantKey, ApplicationRecord, Error, Result};
use admissions_engine::Database;
use admissions_storage::paths::{self, APPLICATIONS_PREFIX};
use std::sync::Arc;

/// Durable mapping from applicant key to application record
///
/// # Example
///
/// ```ignore
/// let db = Arc::new(Database::ephemeral()?);
/// let records = RecordStore::new(db);
///
/// let key = ApplicantKey::new("ada")?;
/// records.put(&key, &ApplicationRecord::new(key.clone(), Utc::now()))?;
/// assert!(records.exists(&key)?);
/// ```
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Create a new RecordStore over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Load a record; `NotFound` when absent
    pub fn get(&self, key: &ApplicantKey) -> Result<ApplicationRecord> {
        self.get_optional(key)?
            .ok_or_else(|| Error::not_found(format!("application {}", key)))
    }

    /// Load a record if one exists
    pub fn get_optional(&self, key: &ApplicantKey) -> Result<Option<ApplicationRecord>> {
        let record: Option<ApplicationRecord> = self.db.read_json(&paths::record_path(key))?;
        match record {
            Some(record) if record.applicant_key != *key => Err(Error::Internal(format!(
                "record at {} belongs to {}",
                paths::record_path(key),
                record.applicant_key
            ))),
            other => Ok(other),
        }
    }

    /// Replace the record stored under `key`
    pub fn put(&self, key: &ApplicantKey, record: &ApplicationRecord) -> Result<()> {
        if record.applicant_key != *key {
            return Err(Error::InvalidInput(format!(
                "record for {} cannot be stored under {}",
                record.applicant_key, key
            )));
        }
        self.db.write_json(&paths::record_path(key), record)
    }

    /// Whether a record exists
    pub fn exists(&self, key: &ApplicantKey) -> Result<bool> {
        Ok(self.db.blobs().get(&paths::record_path(key))?.is_some())
    }

    /// Every applicant key with a record, sorted
    ///
    /// The Index blob shares the `applications/` prefix; `index` is a
    /// reserved key, so it never parses as an applicant.
    pub fn list_keys(&self) -> Result<Vec<ApplicantKey>> {
        let mut keys: Vec<ApplicantKey> = self
            .db
            .list_paths(APPLICATIONS_PREFIX)?
            .iter()
            .filter_map(|path| paths::key_from_record_path(path))
            .collect();
        keys.sort();
        Ok(keys)
    }
}
