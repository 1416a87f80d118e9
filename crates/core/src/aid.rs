//! Financial aid awarded to an applicant

use crate::error::{Error, Result};
use crate::types::{ApplicantKey, Timestamp};
use serde::{Deserialize, Serialize};

/// Scholarship and grant amounts for one applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAid {
    /// Recipient
    pub applicant_key: ApplicantKey,
    /// Scholarship amount
    pub scholarship_amount: f64,
    /// Grant amount
    pub grant_amount: f64,
    /// Last change
    pub updated_at: Timestamp,
}

impl FinancialAid {
    /// Build an award, rejecting negative or non-finite amounts
    pub fn new(
        applicant_key: ApplicantKey,
        scholarship_amount: f64,
        grant_amount: f64,
        now: Timestamp,
    ) -> Result<Self> {
        for (name, amount) in [("scholarship", scholarship_amount), ("grant", grant_amount)] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{} amount must be a non-negative number, got {}",
                    name, amount
                )));
            }
        }

        Ok(FinancialAid {
            applicant_key,
            scholarship_amount,
            grant_amount,
            updated_at: now,
        })
    }

    /// Combined award
    pub fn total(&self) -> f64 {
        self.scholarship_amount + self.grant_amount
    }
}
