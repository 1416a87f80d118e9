//! # Admissions
//!
//! Application record store, status index and decision handling for
//! college admissions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use admissions::prelude::*;
//!
//! let db = Admissions::open("./admissions-data")?;
//!
//! // Student side
//! db.applications.save_draft("ada", draft)?;
//! db.applications.submit("ada", ApplicationDraft::default())?;
//!
//! // Admin side
//! let pending = db.review.list_by_status(ApplicationStatus::Submitted)?;
//! db.review.decide("ada", ApplicationStatus::Accepted, Some("Welcome"), "dean")?;
//! ```
//!
//! ## Storage
//!
//! Every application is one JSON blob at `applications/{key}`. The Index,
//! a denormalized list of submitted applications, is one blob at
//! `applications/index`. Records are always written before the Index, so
//! the Index may lag a record after a failure but never leads it;
//! [`Review::reconcile`] repairs any lag.
//!
//! ## Primitives
//!
//! - [`Applications`] - drafts, documents, submission
//! - [`Review`] - Index queries, decisions, notes, reconciliation
//! - [`Aid`] - financial aid awards and roster

#![warn(missing_docs)]

mod database;
mod error;
mod primitives;
mod types;

pub mod prelude;

// Re-export main entry points
pub use database::{Admissions, AdmissionsBuilder};
pub use error::{Error, Result};

// Re-export primitives
pub use primitives::{Aid, Applications, Review};

// Re-export types
pub use types::*;
