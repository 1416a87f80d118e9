//! Financial aid awards and the admin roster.

use crate::error::Result;
use crate::types::{key, FinancialAid, RosterEntry};
use admissions_engine::Database;
use admissions_primitives::FinancialAidStore;
use std::sync::Arc;

/// Financial aid operations.
///
/// Access via `db.aid`.
pub struct Aid {
    store: FinancialAidStore,
}

impl Aid {
    pub(crate) fn new(db: Arc<Database>) -> Self {
        Self {
            store: FinancialAidStore::new(db),
        }
    }

    /// Set the award for an applicant with a record.
    pub fn set(&self, applicant: &str, scholarship: f64, grant: f64) -> Result<FinancialAid> {
        Ok(self.store.set_aid(&key(applicant)?, scholarship, grant)?)
    }

    /// Award, if any.
    pub fn get(&self, applicant: &str) -> Result<Option<FinancialAid>> {
        Ok(self.store.get_aid(&key(applicant)?)?)
    }

    /// Index entries with their awards.
    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        Ok(self.store.roster()?)
    }
}
