//! Admissions Integration Test Suite
//!
//! End-to-end behavior of the record lifecycle through the public facade:
//! submission, decisions, Index consistency under failure and concurrency,
//! reconciliation, and filesystem persistence.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test admissions
//!
//! # Decision tests only
//! cargo test --test admissions decisions::
//! ```

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use admissions::prelude::*;
use admissions::{
    AcademicInfo, AccessMode, Blob, BlobStore, Config, InMemoryBlobStore, PersonalInfo,
    PersonalStatement,
};
use chrono::NaiveDate;
use parking_lot::Mutex;

// Test modules
pub mod concurrency;
pub mod decisions;
pub mod index_consistency;
pub mod persistence;
pub mod properties;
pub mod reconcile;
pub mod submission;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Path of the Index blob
pub const INDEX_PATH: &str = "applications/index";

/// Path of the record blob for `key`
pub fn record_path(key: &str) -> String {
    format!("applications/{}", key)
}

/// Create an in-memory store
pub fn create_store() -> Admissions {
    Admissions::ephemeral().expect("Failed to create in-memory store")
}

/// Create a store over a fault-injecting blob store
pub fn create_faulty_store() -> (Admissions, Arc<FaultyStore>) {
    let blobs = Arc::new(FaultyStore::new());
    let db = Admissions::builder()
        .blob_store(blobs.clone())
        .open()
        .expect("Failed to create store");
    (db, blobs)
}

/// A draft with every required section
pub fn complete_draft(name: &str) -> ApplicationDraft {
    ApplicationDraft {
        personal: Some(PersonalInfo {
            full_name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2007, 5, 17).unwrap(),
            address: "221B Baker Street".into(),
            email: None,
            phone: None,
        }),
        academic: Some(AcademicInfo {
            high_school: "Westfield High".into(),
            gpa: 3.7,
            sat_score: Some(1380),
            graduation_year: Some(2025),
        }),
        extracurricular: None,
        statement: Some(PersonalStatement {
            essay: "A short essay.".into(),
        }),
    }
}

/// Submit a complete application for `key`
pub fn submit(db: &Admissions, key: &str) -> ApplicationRecord {
    db.applications
        .submit(key, complete_draft(&key.to_uppercase()))
        .expect("submission failed")
}

/// Assert the Index entry for `key` mirrors its record
pub fn assert_index_matches(db: &Admissions, key: &str) {
    let record = db.applications.get(key).unwrap();
    let entry = db
        .review
        .entry(key)
        .unwrap()
        .unwrap_or_else(|| panic!("no index entry for {}", key));
    assert!(entry.matches(&record), "{:?} != {:?}", entry, record);
}

// =============================================================================
// FAULT INJECTION
// =============================================================================

/// In-memory blob store that can be told to fail writes to given paths
/// and records every successful write.
pub struct FaultyStore {
    inner: InMemoryBlobStore,
    failing: Mutex<HashSet<String>>,
    writes: Mutex<Vec<String>>,
    put_attempts: AtomicUsize,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryBlobStore::new(),
            failing: Mutex::new(HashSet::new()),
            writes: Mutex::new(Vec::new()),
            put_attempts: AtomicUsize::new(0),
        }
    }

    /// Make every put to `path` fail
    pub fn fail_puts(&self, path: &str) {
        self.failing.lock().insert(path.to_string());
    }

    /// Stop failing puts to `path`
    pub fn heal(&self, path: &str) {
        self.failing.lock().remove(path);
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// Put attempts, including failed ones
    pub fn put_attempts(&self) -> usize {
        self.put_attempts.load(Ordering::SeqCst)
    }
}

impl BlobStore for FaultyStore {
    fn get(&self, path: &str) -> admissions_core::Result<Option<Blob>> {
        self.inner.get(path)
    }

    fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> admissions_core::Result<()> {
        self.put_attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().contains(path) {
            return Err(admissions_core::Error::storage(path, "injected write failure"));
        }
        self.inner.put(path, bytes, content_type)?;
        self.writes.lock().push(path.to_string());
        Ok(())
    }

    fn delete(&self, path: &str) -> admissions_core::Result<bool> {
        self.inner.delete(path)
    }

    fn list(&self, prefix: &str) -> admissions_core::Result<Vec<String>> {
        self.inner.list(prefix)
    }

    fn backend_name(&self) -> &'static str {
        "faulty"
    }
}
