//! Canonical blob layout
//!
//! | Path | Content |
//! |------|---------|
//! | `applications/{key}` | one ApplicationRecord |
//! | `applications/index` | the Index (JSON array of IndexEntry) |
//! | `financial-aid/{key}` | one FinancialAid |
//! | `documents/{key}/{type}-{filename}` | suggested document location |
//!
//! `index` is a reserved applicant key, so record and Index paths never
//! collide.

use admissions_core::{ApplicantKey, DocumentType};

/// Prefix shared by records and the Index
pub const APPLICATIONS_PREFIX: &str = "applications/";

/// Path of the Index blob
pub const INDEX_PATH: &str = "applications/index";

/// Prefix of financial aid blobs
pub const FINANCIAL_AID_PREFIX: &str = "financial-aid/";

/// Path of an applicant's record
pub fn record_path(key: &ApplicantKey) -> String {
    format!("{}{}", APPLICATIONS_PREFIX, key)
}

/// Path of an applicant's financial aid
pub fn aid_path(key: &ApplicantKey) -> String {
    format!("{}{}", FINANCIAL_AID_PREFIX, key)
}

/// Location a document upload for this applicant would use
pub fn document_path(key: &ApplicantKey, doc_type: DocumentType, filename: &str) -> String {
    format!("documents/{}/{}-{}", key, doc_type, filename)
}

/// Recover the applicant key from a record path
///
/// Returns `None` for the Index blob and for paths outside
/// `applications/`.
pub fn key_from_record_path(path: &str) -> Option<ApplicantKey> {
    let rest = path.strip_prefix(APPLICATIONS_PREFIX)?;
    ApplicantKey::new(rest).ok()
}
