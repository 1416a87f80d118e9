//! Admin review: the Index, decisions, notes and reconciliation.
//!
//! # Example
//!
//! ```ignore
//! use admissions::prelude::*;
//!
//! let db = Admissions::open("./admissions-data")?;
//! for entry in db.review.list_by_status(ApplicationStatus::Submitted)? {
//!     db.review.decide(entry.applicant_key.as_str(), ApplicationStatus::UnderReview, None, "dean")?;
//! }
//! ```

use crate::error::Result;
use crate::types::{key, ApplicationStatus, DecisionOutcome, IndexEntry, ReconcileReport};
use admissions_engine::Database;
use admissions_primitives::{ApplicationIndex, Reconciler, TransitionHandler};
use std::collections::HashMap;
use std::sync::Arc;

/// Index queries and admin decisions.
///
/// Access via `db.review`.
pub struct Review {
    index: ApplicationIndex,
    decisions: TransitionHandler,
    reconciler: Reconciler,
}

impl Review {
    pub(crate) fn new(db: Arc<Database>) -> Self {
        Self {
            index: ApplicationIndex::new(db.clone()),
            decisions: TransitionHandler::new(db.clone()),
            reconciler: Reconciler::new(db),
        }
    }

    /// Every Index entry in submission order.
    pub fn list(&self) -> Result<Vec<IndexEntry>> {
        Ok(self.index.list()?)
    }

    /// Index entry for one applicant.
    pub fn entry(&self, applicant: &str) -> Result<Option<IndexEntry>> {
        Ok(self.index.get(&key(applicant)?)?)
    }

    /// Entries with a status, in submission order.
    pub fn list_by_status(&self, status: ApplicationStatus) -> Result<Vec<IndexEntry>> {
        Ok(self.index.list_by_status(status)?)
    }

    /// Entries per status.
    pub fn counts(&self) -> Result<HashMap<ApplicationStatus, usize>> {
        Ok(self.index.counts()?)
    }

    /// Apply a decision; non-blank `comments` become a note by `author`.
    pub fn decide(
        &self,
        applicant: &str,
        status: ApplicationStatus,
        comments: Option<&str>,
        author: &str,
    ) -> Result<DecisionOutcome> {
        Ok(self
            .decisions
            .apply_decision(&key(applicant)?, status, comments, author)?)
    }

    /// Apply a decision given by name, e.g. `"accepted"`.
    pub fn decide_str(
        &self,
        applicant: &str,
        status: &str,
        comments: Option<&str>,
        author: &str,
    ) -> Result<DecisionOutcome> {
        Ok(self
            .decisions
            .apply_named_decision(&key(applicant)?, status, comments, author)?)
    }

    /// Append a note to a submitted application.
    pub fn add_note(&self, applicant: &str, author: &str, content: &str) -> Result<()> {
        Ok(self.decisions.add_note(&key(applicant)?, author, content)?)
    }

    /// Rebuild the Index from the records.
    pub fn reconcile(&self) -> Result<ReconcileReport> {
        Ok(self.reconciler.reconcile()?)
    }
}
