//! Command enum: every operation a caller can request
//!
//! Applicant keys and statuses arrive as plain strings and are validated by
//! the executor, so a malformed request fails with the same error codes
//! regardless of the front end.

use admissions_core::ApplicationDraft;
use serde::{Deserialize, Serialize};

/// A request to the executor
///
/// | Command | Role |
/// |---------|------|
/// | `SaveDraft`, `AttachDocument`, `Submit`, `Status`, `GetApplication`, `GetAid` | owning student or admin |
/// | `ListApplications`, `Counts`, `Decide`, `AddNote`, `SetAid`, `Roster`, `Reconcile` | admin |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Create or update a draft
    SaveDraft {
        /// Applicant key
        applicant: String,
        /// Sections to write
        draft: ApplicationDraft,
    },

    /// Attach a document reference
    AttachDocument {
        /// Applicant key
        applicant: String,
        /// `transcript`, `recommendation`, `personal_statement` or `additional`
        doc_type: String,
        /// Original file name
        filename: String,
        /// Storage location; the canonical path when absent
        #[serde(default)]
        location: Option<String>,
    },

    /// Submit or resubmit an application
    Submit {
        /// Applicant key
        applicant: String,
        /// Sections merged in before submitting
        #[serde(default)]
        draft: ApplicationDraft,
    },

    /// Status, label and progress of an application
    Status {
        /// Applicant key
        applicant: String,
    },

    /// Full application record
    GetApplication {
        /// Applicant key
        applicant: String,
    },

    /// Index entries, optionally filtered by status
    ListApplications {
        /// Status filter
        #[serde(default)]
        status: Option<String>,
    },

    /// Index entries per status
    Counts,

    /// Admin decision
    Decide {
        /// Applicant key
        applicant: String,
        /// `under_review`, `accepted` or `rejected`
        decision: String,
        /// Stored as a note when non-blank
        #[serde(default)]
        comments: Option<String>,
    },

    /// Admin note on a submitted application
    AddNote {
        /// Applicant key
        applicant: String,
        /// Note text
        content: String,
    },

    /// Set the financial aid award
    SetAid {
        /// Applicant key
        applicant: String,
        /// Scholarship amount
        scholarship: f64,
        /// Grant amount
        grant: f64,
    },

    /// Read the financial aid award
    GetAid {
        /// Applicant key
        applicant: String,
    },

    /// Index entries joined with awards
    Roster,

    /// Rebuild the Index from the Record Store
    Reconcile,
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::SaveDraft { .. } => "save_draft",
            Command::AttachDocument { .. } => "attach_document",
            Command::Submit { .. } => "submit",
            Command::Status { .. } => "status",
            Command::GetApplication { .. } => "get_application",
            Command::ListApplications { .. } => "list_applications",
            Command::Counts => "counts",
            Command::Decide { .. } => "decide",
            Command::AddNote { .. } => "add_note",
            Command::SetAid { .. } => "set_aid",
            Command::GetAid { .. } => "get_aid",
            Command::Roster => "roster",
            Command::Reconcile => "reconcile",
        }
    }

    /// Whether the command only reads
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Command::Status { .. }
                | Command::GetApplication { .. }
                | Command::ListApplications { .. }
                | Command::Counts
                | Command::GetAid { .. }
                | Command::Roster
        )
    }
}
