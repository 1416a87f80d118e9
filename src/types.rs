//! Public types for the admissions facade.
//!
//! Re-exports types from internal crates with a clean public interface.

// Identity and time
pub use admissions_core::{ApplicantKey, Timestamp};

// Status lifecycle
pub use admissions_core::{ApplicationStatus, TransitionPolicy};

// Record sections
pub use admissions_core::{
    AcademicInfo, Activity, ApplicationDraft, ApplicationRecord, DocumentRef, DocumentType,
    ExtracurricularInfo, Note, PersonalInfo, PersonalStatement,
};

// Index and aid
pub use admissions_core::{FinancialAid, IndexEntry};

// Operation results
pub use admissions_primitives::{DecisionOutcome, ReconcileReport, RosterEntry};

// Storage capability, for plugging in a custom blob store
pub use admissions_storage::{Blob, BlobStore, FsBlobStore, InMemoryBlobStore};

// Configuration and access
pub use admissions_engine::{Config, LifecycleConfig, StorageBackend, StorageConfig};
pub use admissions_security::AccessMode;

/// Parse and validate an applicant key.
pub(crate) fn key(raw: &str) -> crate::Result<ApplicantKey> {
    Ok(ApplicantKey::new(raw)?)
}
