//! ApplicationIndex: denormalized list of submitted applications
//!
//! ## Design
//!
//! The Index is a single JSON array at `applications/index`, kept in
//! submission order. It is a projection of the Record Store, never a source
//! of truth: every entry is derived from a record.
//!
//! ## Write Serialization
//!
//! Every mutation is a read-modify-write of the whole blob and runs under
//! the database's Index lock. Reads take no lock; blob replacement is
//! atomic, so a reader sees either the old list or the new one.
//!
//! A missing Index blob reads as an empty list.

use admissions_core::{ApplicantKey, ApplicationStatus, IndexEntry, Result};
use admissions_engine::Database;
use admissions_storage::paths::INDEX_PATH;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Ordered summary list of submitted applications
#[derive(Clone)]
pub struct ApplicationIndex {
    db: Arc<Database>,
}

impl ApplicationIndex {
    /// Create a new ApplicationIndex over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// All entries in submission order
    pub fn list(&self) -> Result<Vec<IndexEntry>> {
        self.load()
    }

    /// Entry for one applicant
    pub fn get(&self, key: &ApplicantKey) -> Result<Option<IndexEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|entry| entry.applicant_key == *key))
    }

    /// Entries with the given status, in submission order
    pub fn list_by_status(&self, status: ApplicationStatus) -> Result<Vec<IndexEntry>> {
        let mut entries = self.load()?;
        entries.retain(|entry| entry.status == status);
        Ok(entries)
    }

    /// Number of entries per status; statuses with no entries are absent
    pub fn counts(&self) -> Result<HashMap<ApplicationStatus, usize>> {
        let mut counts = HashMap::new();
        for entry in self.load()? {
            *counts.entry(entry.status).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Replace the entry with the same key in place, else append
    pub fn upsert(&self, entry: IndexEntry) -> Result<()> {
        self.db.with_index_lock(|| {
            let mut entries = self.load()?;
            upsert_entry(&mut entries, entry);
            self.store(&entries)
        })
    }

    /// Replace the whole Index
    pub fn replace_all(&self, entries: Vec<IndexEntry>) -> Result<()> {
        self.db.with_index_lock(|| self.store(&entries))
    }

    /// Read the Index blob; caller decides whether the lock is needed
    pub(crate) fn load(&self) -> Result<Vec<IndexEntry>> {
        Ok(self.db.read_json(INDEX_PATH)?.unwrap_or_default())
    }

    /// Write the Index blob; caller must hold the Index lock
    pub(crate) fn store(&self, entries: &[IndexEntry]) -> Result<()> {
        debug!(entries = entries.len(), "writing index");
        self.db.write_json(INDEX_PATH, &entries)
    }
}

/// Replace the entry with the same key in place, else append
///
/// Returns `true` when an existing entry was replaced.
pub(crate) fn upsert_entry(entries: &mut Vec<IndexEntry>, entry: IndexEntry) -> bool {
    match entries
        .iter_mut()
        .find(|existing| existing.applicant_key == entry.applicant_key)
    {
        Some(existing) => {
            *existing = entry;
            true
        }
        None => {
            entries.push(entry);
            false
        }
    }
}
