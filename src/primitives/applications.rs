//! Student-side application operations.
//!
//! # Example
//!
//! ```ignore
//! use admissions::prelude::*;
//!
//! let db = Admissions::ephemeral()?;
//! db.applications.save_draft("ada", draft)?;
//! db.applications.attach_document("ada", DocumentType::Transcript, "t.pdf", None)?;
//! db.applications.submit("ada", ApplicationDraft::default())?;
//! assert_eq!(db.applications.status("ada")?, ApplicationStatus::Submitted);
//! ```

use crate::error::Result;
use crate::types::{
    key, ApplicantKey, ApplicationDraft, ApplicationRecord, ApplicationStatus, DocumentRef,
    DocumentType,
};
use admissions_engine::Database;
use admissions_primitives::{RecordStore, Submissions};
use std::sync::Arc;

/// Drafts, documents, submission and record access.
///
/// Access via `db.applications`.
pub struct Applications {
    records: RecordStore,
    submissions: Submissions,
}

impl Applications {
    pub(crate) fn new(db: Arc<Database>) -> Self {
        Self {
            records: RecordStore::new(db.clone()),
            submissions: Submissions::new(db),
        }
    }

    /// Full record; `NotFound` when the applicant has none.
    pub fn get(&self, applicant: &str) -> Result<ApplicationRecord> {
        Ok(self.records.get(&key(applicant)?)?)
    }

    /// Full record, if any.
    pub fn get_optional(&self, applicant: &str) -> Result<Option<ApplicationRecord>> {
        Ok(self.records.get_optional(&key(applicant)?)?)
    }

    /// Whether the applicant has a record.
    pub fn exists(&self, applicant: &str) -> Result<bool> {
        Ok(self.records.exists(&key(applicant)?)?)
    }

    /// Every applicant with a record, sorted.
    pub fn keys(&self) -> Result<Vec<ApplicantKey>> {
        Ok(self.records.list_keys()?)
    }

    /// Create or update draft sections.
    pub fn save_draft(&self, applicant: &str, draft: ApplicationDraft) -> Result<ApplicationRecord> {
        Ok(self.submissions.save_draft(&key(applicant)?, draft)?)
    }

    /// Attach a document reference.
    pub fn attach_document(
        &self,
        applicant: &str,
        doc_type: DocumentType,
        filename: &str,
        location: Option<&str>,
    ) -> Result<DocumentRef> {
        Ok(self
            .submissions
            .attach_document(&key(applicant)?, doc_type, filename, location)?)
    }

    /// Submit or resubmit.
    pub fn submit(&self, applicant: &str, draft: ApplicationDraft) -> Result<ApplicationRecord> {
        Ok(self.submissions.submit(&key(applicant)?, draft)?)
    }

    /// Current status; `NotStarted` without a record.
    pub fn status(&self, applicant: &str) -> Result<ApplicationStatus> {
        Ok(self.submissions.status_of(&key(applicant)?)?)
    }
}
