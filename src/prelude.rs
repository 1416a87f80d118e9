//! Convenient imports for the admissions store.
//!
//! ```ignore
//! use admissions::prelude::*;
//!
//! let db = Admissions::ephemeral()?;
//! db.applications.submit("ada", draft)?;
//! db.review.decide("ada", ApplicationStatus::Accepted, None, "dean")?;
//! ```

// Main entry point
pub use crate::database::{Admissions, AdmissionsBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Primitives
pub use crate::primitives::{Aid, Applications, Review};

// Core types
pub use crate::types::{
    ApplicantKey, ApplicationDraft, ApplicationRecord, ApplicationStatus, DocumentType,
    IndexEntry, Timestamp, TransitionPolicy,
};
