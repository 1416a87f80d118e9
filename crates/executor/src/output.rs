//! Output enum: results returned by the executor

use admissions_core::{
    ApplicantKey, ApplicationRecord, ApplicationStatus, DocumentRef, FinancialAid, IndexEntry,
};
use admissions_primitives::{DecisionOutcome, ReconcileReport, RosterEntry};
use serde::{Deserialize, Serialize};

/// Student-facing view of an application's status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Applicant key
    pub applicant: ApplicantKey,
    /// Status
    pub status: ApplicationStatus,
    /// Dashboard label
    pub label: String,
    /// Progress percentage
    pub progress: u8,
}

impl StatusReport {
    /// Build a report for a status
    pub fn new(applicant: ApplicantKey, status: ApplicationStatus) -> Self {
        StatusReport {
            applicant,
            status,
            label: status.label().to_string(),
            progress: status.progress(),
        }
    }
}

/// Result of a [`Command`](crate::Command)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Command succeeded with nothing to return
    Unit,
    /// A full application record
    Application(Box<ApplicationRecord>),
    /// The attached document
    Document(DocumentRef),
    /// Status of one application
    Status(StatusReport),
    /// Index entries
    Entries(Vec<IndexEntry>),
    /// Entries per status, in lifecycle order, zero counts omitted
    Counts(Vec<(ApplicationStatus, usize)>),
    /// Applied decision
    Decision(DecisionOutcome),
    /// Financial aid award, if any
    Aid(Option<FinancialAid>),
    /// Index entries with awards
    Roster(Vec<RosterEntry>),
    /// Reconcile result
    Reconciled(ReconcileReport),
}
