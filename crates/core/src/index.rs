//! Index entry: denormalized summary of a submitted record

use crate::record::ApplicationRecord;
use crate::status::ApplicationStatus;
use crate::types::{ApplicantKey, Timestamp};
use serde::{Deserialize, Serialize};

/// Lightweight summary used for listing without loading full records
///
/// The Index is a projection of the Record Store: an entry is always
/// derived from a record, never edited on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Owner of the record
    pub applicant_key: ApplicantKey,
    /// Applicant name at the time of the last projection
    pub display_name: String,
    /// Status mirrored from the record
    pub status: ApplicationStatus,
    /// Submission time mirrored from the record
    pub submitted_at: Timestamp,
}

impl IndexEntry {
    /// Project a record into an entry
    ///
    /// Returns `None` for records that were never submitted; those have no
    /// place in the Index.
    pub fn from_record(record: &ApplicationRecord) -> Option<Self> {
        record.submitted_at.map(|submitted_at| IndexEntry {
            applicant_key: record.applicant_key.clone(),
            display_name: record.display_name(),
            status: record.status,
            submitted_at,
        })
    }

    /// Whether this entry agrees with the record it summarizes
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        Some(self) == IndexEntry::from_record(record).as_ref()
    }
}
