//! Application status lifecycle
//!
//! ## Status Transitions
//!
//! Draft statuses are owned by the submission lifecycle:
//! - NotStarted → InProgress, DocumentsPending
//! - InProgress ⇄ DocumentsPending
//! - any draft status → Submitted (submission action)
//!
//! Admin decisions apply only after submission and only set
//! UnderReview, Accepted or Rejected. Whether a decision may leave a
//! terminal status is a [`TransitionPolicy`] choice:
//! - `Permissive`: every admin-settable status is reachable from every
//!   submitted status (Accepted → UnderReview is allowed)
//! - `ForwardOnly`: Accepted and Rejected are final

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// No record exists yet
    NotStarted,
    /// Student is editing a draft
    InProgress,
    /// Draft sections are complete but a required document is missing
    DocumentsPending,
    /// Submitted, awaiting review
    Submitted,
    /// An admin has started reviewing
    UnderReview,
    /// Admitted (terminal)
    Accepted,
    /// Not admitted (terminal)
    Rejected,
}

impl ApplicationStatus {
    /// All statuses in lifecycle order
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::NotStarted,
        ApplicationStatus::InProgress,
        ApplicationStatus::DocumentsPending,
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Wire name (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::NotStarted => "not_started",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::DocumentsPending => "documents_pending",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Label shown to students
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::NotStarted => "Not Started",
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::DocumentsPending => "Documents Pending",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Not Accepted",
        }
    }

    /// Completion percentage of the student-facing progress bar
    pub fn progress(&self) -> u8 {
        match self {
            ApplicationStatus::NotStarted => 0,
            ApplicationStatus::InProgress => 40,
            ApplicationStatus::DocumentsPending => 70,
            _ => 100,
        }
    }

    /// Statuses a student may still edit freely
    pub fn is_draft(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::NotStarted
                | ApplicationStatus::InProgress
                | ApplicationStatus::DocumentsPending
        )
    }

    /// Statuses only reachable through submission
    pub fn is_submitted(&self) -> bool {
        !self.is_draft()
    }

    /// Closure states
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        )
    }

    /// Statuses an admin decision may set
    pub fn is_admin_settable(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::UnderReview
                | ApplicationStatus::Accepted
                | ApplicationStatus::Rejected
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ApplicationStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// Policy deciding which admin decisions may leave which statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any admin-settable status from any submitted status
    #[default]
    Permissive,
    /// Accepted and Rejected are final; re-applying the same status is allowed
    ForwardOnly,
}

impl TransitionPolicy {
    /// Validate an admin decision `from → to`
    ///
    /// Checks, in order:
    /// 1. `to` is admin-settable
    /// 2. `from` is a submitted status
    /// 3. the policy allows leaving `from`
    pub fn check_decision(&self, from: ApplicationStatus, to: ApplicationStatus) -> Result<()> {
        let refuse = |reason: &str| {
            Err(Error::InvalidTransition {
                from,
                to,
                reason: reason.to_string(),
            })
        };

        if !to.is_admin_settable() {
            return refuse("status is not settable by a decision");
        }
        if !from.is_submitted() {
            return refuse("application has not been submitted");
        }
        if *self == TransitionPolicy::ForwardOnly && from.is_terminal() && from != to {
            return refuse("decision is final");
        }
        Ok(())
    }
}

impl FromStr for TransitionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "forward_only" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(Error::InvalidInput(format!(
                "unknown transition policy: {}",
                other
            ))),
        }
    }
}
