//! Submissions: the student side of the application lifecycle
//!
//! ## Status Flow
//!
//! - `save_draft` / `attach_document` keep a draft in `in_progress` or
//!   `documents_pending`, whichever the content implies
//! - `submit` moves a draft to `submitted` and adds it to the Index
//! - resubmission is allowed while the status is still `submitted`; it
//!   keeps the original `submitted_at` and upserts the same entry
//! - once a decision has been made the student can no longer edit
//!
//! Every check runs before the first write, so a refused operation leaves
//! both the record and the Index untouched.

use crate::application_index::ApplicationIndex;
use crate::record_store::RecordStore;
use admissions_core::{
    ApplicantKey, ApplicationDraft, ApplicationRecord, ApplicationStatus, DocumentRef,
    DocumentType, Error, IndexEntry, Result,
};
use admissions_engine::Database;
use admissions_storage::paths;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

/// Draft, document and submission operations for one applicant at a time
#[derive(Clone)]
pub struct Submissions {
    records: RecordStore,
    index: ApplicationIndex,
}

impl Submissions {
    /// Create a new Submissions facade over a database
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

    /// Create or update the student-editable sections of a draft
    pub fn save_draft(
        &self,
        key: &ApplicantKey,
        draft: ApplicationDraft,
    ) -> Result<ApplicationRecord> {
        let now = Utc::now();
        let mut record = self.load_or_new(key)?;
        if !record.status.is_draft() {
            return Err(Error::InvalidTransition {
                from: record.status,
                to: ApplicationStatus::InProgress,
                reason: "application has already been submitted".into(),
            });
        }

        record.apply_draft(draft, now)?;
        record.status = record.derived_draft_status();
        self.records.put(key, &record)?;

        info!(applicant = %key, status = %record.status, "draft saved");
        Ok(record)
    }

    /// Attach a document reference
    ///
    /// Without an explicit `location` the canonical document path is
    /// recorded. Allowed on drafts and on submitted applications that are
    /// not yet under review.
    pub fn attach_document(
        &self,
        key: &ApplicantKey,
        doc_type: DocumentType,
        filename: &str,
        location: Option<&str>,
    ) -> Result<DocumentRef> {
        let now = Utc::now();
        let mut record = self.load_or_new(key)?;
        let status = record.status;
        if !(status.is_draft() || status == ApplicationStatus::Submitted) {
            return Err(Error::InvalidTransition {
                from: status,
                to: status,
                reason: "documents can no longer be attached".into(),
            });
        }

        let location = match location {
            Some(location) => location.to_string(),
            None => paths::document_path(key, doc_type, filename),
        };
        let doc = record.attach_document(doc_type, filename, location, now)?;
        if record.status.is_draft() {
            record.status = record.derived_draft_status();
        }
        self.records.put(key, &record)?;

        info!(applicant = %key, doc_type = %doc_type, document = %doc.id, "document attached");
        Ok(doc)
    }

    /// Submit (or resubmit) an application
    ///
    /// The draft is merged over the stored sections first. Personal,
    /// academic and statement sections are required; with
    /// `require_documents` configured, so are the required documents.
    pub fn submit(&self, key: &ApplicantKey, draft: ApplicationDraft) -> Result<ApplicationRecord> {
        let db = self.database();
        db.access_mode().check_write()?;

        let now = Utc::now();
        let mut record = self.load_or_new(key)?;
        if !(record.status.is_draft() || record.status == ApplicationStatus::Submitted) {
            return Err(Error::InvalidTransition {
                from: record.status,
                to: ApplicationStatus::Submitted,
                reason: "review has already started".into(),
            });
        }

        record.apply_draft(draft, now)?;

        let missing = record.missing_sections();
        if !missing.is_empty() {
            return Err(Error::InvalidInput(format!(
                "missing required sections: {}",
                missing.join(", ")
            )));
        }
        if db.require_documents() {
            let missing: Vec<&str> = record
                .missing_documents()
                .iter()
                .map(|d| d.as_str())
                .collect();
            if !missing.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "missing required documents: {}",
                    missing.join(", ")
                )));
            }
        }

        let resubmission = record.is_submitted();
        record.status = ApplicationStatus::Submitted;
        record.submitted_at = Some(record.submitted_at.unwrap_or(now));

        self.records.put(key, &record)?;

        let entry = IndexEntry::from_record(&record)
            .ok_or_else(|| Error::Internal(format!("submitted record {} has no entry", key)))?;
        self.index.upsert(entry).map_err(|e| {
            error!(
                applicant = %key,
                error = %e,
                "index update failed after submission; index lags record"
            );
            e
        })?;

        info!(applicant = %key, resubmission, "application submitted");
        Ok(record)
    }

    /// Current status; `not_started` when no record exists
    pub fn status_of(&self, key: &ApplicantKey) -> Result<ApplicationStatus> {
        Ok(self
            .records
            .get_optional(key)?
            .map(|record| record.status)
            .unwrap_or(ApplicationStatus::NotStarted))
    }

    fn load_or_new(&self, key: &ApplicantKey) -> Result<ApplicationRecord> {
        Ok(self
            .records
            .get_optional(key)?
            .unwrap_or_else(|| ApplicationRecord::new(key.clone(), Utc::now())))
    }
}
