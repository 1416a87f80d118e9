//! Core types for the admissions record store
//!
//! This crate defines the data model shared by every layer:
//! - [`ApplicantKey`]: validated identity of a student
//! - [`ApplicationStatus`] and [`TransitionPolicy`]: the status lifecycle
//! - [`ApplicationRecord`]: the full application document
//! - [`IndexEntry`]: the denormalized summary kept in the Index
//! - [`FinancialAid`]: per-applicant award amounts
//! - [`Error`]: the canonical error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aid;
pub mod error;
pub mod index;
pub mod record;
pub mod status;
pub mod types;

pub use aid::FinancialAid;
pub use error::{Error, Result};
pub use index::IndexEntry;
pub use record::{
    Activity, AcademicInfo, ApplicationDraft, ApplicationRecord, DocumentRef, DocumentType,
    ExtracurricularInfo, Note, PersonalInfo, PersonalStatement,
};
pub use status::{ApplicationStatus, TransitionPolicy};
pub use types::{ApplicantKey, Timestamp};
