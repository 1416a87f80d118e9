//! FinancialAidStore: scholarship and grant awards
//!
//! Awards live at `financial-aid/{key}`, one JSON blob per applicant. The
//! roster joins the Index with the awards for the admin students view.

use crate::application_index::ApplicationIndex;
use crate::record_store::RecordStore;
use admissions_core::{ApplicantKey, FinancialAid, IndexEntry, Result};
use admissions_engine::Database;
use admissions_storage::paths;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// One row of the admin roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Index summary of the application
    pub entry: IndexEntry,
    /// Award, when one has been set
    pub aid: Option<FinancialAid>,
}

/// Financial aid awards per applicant
#[derive(Clone)]
pub struct FinancialAidStore {
    db: Arc<Database>,
}

impl FinancialAidStore {
    /// Create a new FinancialAidStore over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Set the award for an applicant with a record
    pub fn set_aid(
        &self,
        key: &ApplicantKey,
        scholarship_amount: f64,
        grant_amount: f64,
    ) -> Result<FinancialAid> {
        self.db.access_mode().check_write()?;
        let aid = FinancialAid::new(key.clone(), scholarship_amount, grant_amount, Utc::now())?;
        // Awards only exist for real applicants
        RecordStore::new(self.db.clone()).get(key)?;

        self.db.write_json(&paths::aid_path(key), &aid)?;
        info!(
            applicant = %key,
            scholarship = scholarship_amount,
            grant = grant_amount,
            "financial aid set"
        );
        Ok(aid)
    }

    /// Award for an applicant, if any
    pub fn get_aid(&self, key: &ApplicantKey) -> Result<Option<FinancialAid>> {
        self.db.read_json(&paths::aid_path(key))
    }

    /// Every Index entry in order, with its award
    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        ApplicationIndex::new(self.db.clone())
            .list()?
            .into_iter()
            .map(|entry| {
                let aid = self.get_aid(&entry.applicant_key)?;
                Ok(RosterEntry { entry, aid })
            })
            .collect()
    }
}
