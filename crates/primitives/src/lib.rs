//! Primitives for the admissions store
//!
//! Every primitive is a stateless facade over `Arc<Database>`:
//! - [`RecordStore`]: applicant key -> full application record
//! - [`ApplicationIndex`]: ordered list of submitted-application summaries
//! - [`Submissions`]: student-side lifecycle (draft, documents, submit)
//! - [`TransitionHandler`]: admin decisions and notes
//! - [`Reconciler`]: rebuilds the Index from the Record Store
//! - [`FinancialAidStore`]: award amounts and the admin roster
//!
//! Multiple instances over the same database are safe; all shared state
//! lives in the database.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application_index;
pub mod decisions;
pub mod financial_aid;
pub mod lifecycle;
pub mod reconcile;
pub mod record_store;

pub use application_index::ApplicationIndex;
pub use decisions::{DecisionOutcome, TransitionHandler};
pub use financial_aid::{FinancialAidStore, RosterEntry};
pub use lifecycle::Submissions;
pub use reconcile::{ReconcileReport, Reconciler};
pub use record_store::RecordStore;
