//! Bridge between executor requests and the primitives
//!
//! Holds one instance of every primitive and converts the string fields of
//! a [`Command`](crate::Command) into validated core types.

use admissions_core::{ApplicantKey, ApplicationStatus, DocumentType};
use admissions_engine::Database;
use admissions_primitives::{
    ApplicationIndex, FinancialAidStore, Reconciler, RecordStore, Submissions, TransitionHandler,
};
use std::sync::Arc;

use crate::error::{convert_result, Result};

/// Every primitive, sharing one database
pub struct Primitives {
    pub db: Arc<Database>,
    pub records: RecordStore,
    pub index: ApplicationIndex,
    pub submissions: Submissions,
    pub decisions: TransitionHandler,
    pub reconciler: Reconciler,
    pub aid: FinancialAidStore,
}

impl Primitives {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            records: RecordStore::new(db.clone()),
            index: ApplicationIndex::new(db.clone()),
            submissions: Submissions::new(db.clone()),
            decisions: TransitionHandler::new(db.clone()),
            reconciler: Reconciler::new(db.clone()),
            aid: FinancialAidStore::new(db.clone()),
            db,
        }
    }
}

pub fn to_key(raw: &str) -> Result<ApplicantKey> {
    convert_result(ApplicantKey::new(raw))
}

pub fn to_status(raw: &str) -> Result<ApplicationStatus> {
    convert_result(raw.parse())
}

pub fn to_doc_type(raw: &str) -> Result<DocumentType> {
    convert_result(raw.parse())
}
