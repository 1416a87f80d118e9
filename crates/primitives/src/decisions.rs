//! TransitionHandler: admin decisions and notes
//!
//! ## Decision Sequence
//!
//! 1. Load the record (`NotFound` if absent, no writes)
//! 2. Check the transition against the database's [`TransitionPolicy`]
//!    (`InvalidTransition`, no writes)
//! 3. Set the status, append the comment as a note when non-blank
//! 4. Write the record; on failure the Index is untouched
//! 5. Under the Index lock, update the entry from the record and write the
//!    Index, leaving every other entry as it was
//!
//! The record commits first, so after a failure in step 5 the Index lags
//! the record and never leads it. [`Reconciler`](crate::Reconciler) repairs
//! the lag.
//!
//! ## Index Desync
//!
//! A submitted record with no Index entry is a desync. The decision still
//! succeeds: the entry is rebuilt from the record, appended, and the
//! outcome reports `index_desync = true`.
//!
//! [`TransitionPolicy`]: admissions_core::TransitionPolicy

use crate::application_index::ApplicationIndex;
use crate::record_store::RecordStore;
use admissions_core::{ApplicantKey, ApplicationStatus, Error, IndexEntry, Result};
use admissions_engine::Database;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Result of a successful decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    /// Applicant the decision applies to
    pub applicant_key: ApplicantKey,
    /// Status before the decision
    pub previous_status: ApplicationStatus,
    /// Status after the decision
    pub status: ApplicationStatus,
    /// The Index had no entry for this applicant; one was rebuilt
    pub index_desync: bool,
}

/// Applies admin decisions to records and propagates them to the Index
#[derive(Clone)]
pub struct TransitionHandler {
    records: RecordStore,
    index: ApplicationIndex,
}

impl TransitionHandler {
    /// Create a new TransitionHandler over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            records: RecordStore::new(db.clone()),
            index: ApplicationIndex::new(db),
        }
    }

    /// Get the underlying database
    pub fn database(&self) -> &Arc<Database> {
        self.records.database()
    }

    /// Set an application's status and mirror it into the Index
    ///
    /// `comments` are stored as a note by `author` unless blank.
    pub fn apply_decision(
        &self,
        key: &ApplicantKey,
        new_status: ApplicationStatus,
        comments: Option<&str>,
        author: &str,
    ) -> Result<DecisionOutcome> {
        let db = self.database();
        db.access_mode().check_write()?;

        let mut record = self.records.get(key)?;
        let previous_status = record.status;
        db.transition_policy()
            .check_decision(previous_status, new_status)?;
        if record.submitted_at.is_none() {
            return Err(Error::InvalidTransition {
                from: previous_status,
                to: new_status,
                reason: "application has no submission time".into(),
            });
        }

        let now = Utc::now();
        record.status = new_status;
        record.updated_at = now;
        if let Some(comments) = comments.filter(|c| !c.trim().is_empty()) {
            record.add_note(author, comments, now)?;
        }

        self.records.put(key, &record)?;

        let index_desync = db
            .with_index_lock(|| {
                let mut entries = self.index.load()?;
                let desync = match entries.iter_mut().find(|e| e.applicant_key == *key) {
                    Some(entry) => {
                        entry.status = record.status;
                        entry.display_name = record.display_name();
                        false
                    }
                    None => {
                        let entry = IndexEntry::from_record(&record).ok_or_else(|| {
                            Error::Internal(format!("submitted record {} has no entry", key))
                        })?;
                        warn!(
                            applicant = %key,
                            status = %record.status,
                            "IndexDesync: no index entry for submitted record, rebuilding"
                        );
                        entries.push(entry);
                        true
                    }
                };
                self.index.store(&entries)?;
                Ok(desync)
            })
            .map_err(|e| {
                error!(
                    applicant = %key,
                    status = %new_status,
                    error = %e,
                    "index update failed after record commit; index lags record"
                );
                e
            })?;

        info!(
            applicant = %key,
            from = %previous_status,
            to = %new_status,
            author,
            "decision applied"
        );

        Ok(DecisionOutcome {
            applicant_key: key.clone(),
            previous_status,
            status: new_status,
            index_desync,
        })
    }

    /// Apply a decision given by status name, e.g. `"accepted"`
    ///
    /// The record is checked before the name, so an unknown applicant is
    /// `NotFound` whatever the status says.
    pub fn apply_named_decision(
        &self,
        key: &ApplicantKey,
        decision: &str,
        comments: Option<&str>,
        author: &str,
    ) -> Result<DecisionOutcome> {
        if !self.records.exists(key)? {
            return Err(Error::not_found(format!("application {}", key)));
        }
        let status: ApplicationStatus = decision.parse()?;
        self.apply_decision(key, status, comments, author)
    }

    /// Append an admin note to a submitted application
    ///
    /// Status and the Index are untouched.
    pub fn add_note(&self, key: &ApplicantKey, author: &str, content: &str) -> Result<()> {
        self.database().access_mode().check_write()?;

        let mut record = self.records.get(key)?;
        if !record.is_submitted() {
            return Err(Error::InvalidTransition {
                from: record.status,
                to: record.status,
                reason: "notes require a submitted application".into(),
            });
        }
        record.add_note(author, content, Utc::now())?;
        self.records.put(key, &record)?;

        info!(applicant = %key, author, "note added");
        Ok(())
    }
}
