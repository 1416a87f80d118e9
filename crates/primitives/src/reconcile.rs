//! Reconciler: rebuild the Index from the Record Store
//!
//! The Index can lag the Record Store after a failed Index write. A
//! reconcile pass, run under the Index lock:
//! - keeps surviving entries in their current order
//! - drops entries whose record is missing or was never submitted
//! - drops duplicate entries for the same applicant
//! - rewrites entries whose status or name disagrees with the record
//! - appends submitted records with no entry, oldest submission first
//!
//! The Index blob is only rewritten when something changed.

use crate::application_index::ApplicationIndex;
use crate::record_store::RecordStore;
use admissions_core::{ApplicantKey, ApplicationRecord, IndexEntry, Result};
use admissions_engine::Database;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::info;

/// What a reconcile pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Applicants appended to the Index
    pub added: Vec<ApplicantKey>,
    /// Applicants whose entry was rewritten
    pub updated: Vec<ApplicantKey>,
    /// Applicants whose entry was dropped
    pub removed: Vec<ApplicantKey>,
}

impl ReconcileReport {
    /// The Index already matched the Record Store
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Repairs the Index against the Record Store
#[derive(Clone)]
pub struct Reconciler {
    records: RecordStore,
    index: ApplicationIndex,
}

impl Reconciler {
    /// Create a new Reconciler over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            records: RecordStore::new(db.clone()),
            index: ApplicationIndex::new(db),
        }
    }

    /// Rebuild the Index so it mirrors every submitted record
    pub fn reconcile(&self) -> Result<ReconcileReport> {
        self.records.database().with_index_lock(|| {
            let mut submitted: HashMap<ApplicantKey, ApplicationRecord> = HashMap::new();
            for key in self.records.list_keys()? {
                if let Some(record) = self.records.get_optional(&key)? {
                    if record.is_submitted() {
                        submitted.insert(key, record);
                    }
                }
            }

            let current = self.index.load()?;
            let mut report = ReconcileReport::default();
            let mut seen = HashSet::new();
            let mut rebuilt = Vec::with_capacity(submitted.len());

            for entry in current {
                let key = entry.applicant_key.clone();
                let expected = match submitted.get(&key).and_then(IndexEntry::from_record) {
                    Some(expected) if !seen.contains(&key) => expected,
                    _ => {
                        report.removed.push(key);
                        continue;
                    }
                };
                if entry != expected {
                    report.updated.push(key.clone());
                }
                seen.insert(key);
                rebuilt.push(expected);
            }

            let mut missing: Vec<IndexEntry> = submitted
                .values()
                .filter(|record| !seen.contains(&record.applicant_key))
                .filter_map(IndexEntry::from_record)
                .collect();
            missing.sort_by(|a, b| {
                a.submitted_at
                    .cmp(&b.submitted_at)
                    .then_with(|| a.applicant_key.cmp(&b.applicant_key))
            });
            for entry in missing {
                report.added.push(entry.applicant_key.clone());
                rebuilt.push(entry);
            }

            if !report.is_clean() {
                self.index.store(&rebuilt)?;
            }
            info!(
                added = report.added.len(),
                updated = report.updated.len(),
                removed = report.removed.len(),
                entries = rebuilt.len(),
                "index reconciled"
            );
            Ok(report)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admissions_core::{ApplicationStatus, Timestamp};
    use chrono::{TimeZone, Utc};

    struct Fixture {
        records: RecordStore,
        index: ApplicationIndex,
        reconciler: Reconciler,
    }

    fn setup() -> Fixture {
        let db = Arc::new(Database::ephemeral().unwrap());
        Fixture {
            records: RecordStore::new(db.clone()),
            index: ApplicationIndex::new(db.clone()),
            reconciler: Reconciler::new(db),
        }
    }

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn put_record(
        f: &Fixture,
        name: &str,
        status: ApplicationStatus,
        submitted: Option<i64>,
    ) -> ApplicationRecord {
        let key = ApplicantKey::new(name).unwrap();
        let mut record = ApplicationRecord::new(key.clone(), at(0));
        record.status = status;
        record.submitted_at = submitted.map(at);
        f.records.put(&key, &record).unwrap();
        record
    }

    fn names(keys: &[ApplicantKey]) -> Vec<&str> {
        keys.iter().map(|k| k.as_str()).collect()
    }

    #[test]
    fn test_clean_index_is_untouched() {
        let f = setup();
        let record = put_record(&f, "ada", ApplicationStatus::Submitted, Some(1));
        f.index
            .upsert(IndexEntry::from_record(&record).unwrap())
            .unwrap();

        let report = f.reconciler.reconcile().unwrap();
        assert!(report.is_clean());
        assert_eq!(f.index.list().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_store_and_index() {
        let f = setup();
        assert!(f.reconciler.reconcile().unwrap().is_clean());
        assert!(f.index.list().unwrap().is_empty());
    }

    #[test]
    fn test_repairs_every_kind_of_drift() {
        let f = setup();
        let a = put_record(&f, "a", ApplicationStatus::Submitted, Some(1));
        let b = put_record(&f, "b", ApplicationStatus::Accepted, Some(2));
        put_record(&f, "draft", ApplicationStatus::InProgress, None);
        put_record(&f, "late", ApplicationStatus::Submitted, Some(9));
        put_record(&f, "early", ApplicationStatus::UnderReview, Some(3));

        let mut stale_b = IndexEntry::from_record(&b).unwrap();
        stale_b.status = ApplicationStatus::Submitted;
        let ghost = IndexEntry {
            applicant_key: ApplicantKey::new("ghost").unwrap(),
            display_name: "Ghost".into(),
            status: ApplicationStatus::Submitted,
            submitted_at: at(0),
        };
        f.index
            .replace_all(vec![
                stale_b,
                ghost,
                IndexEntry::from_record(&a).unwrap(),
                IndexEntry::from_record(&a).unwrap(),
            ])
            .unwrap();

        let report = f.reconciler.reconcile().unwrap();
        assert_eq!(names(&report.updated), vec!["b"]);
        assert_eq!(names(&report.removed), vec!["ghost", "a"]);
        assert_eq!(names(&report.added), vec!["early", "late"]);

        let entries = f.index.list().unwrap();
        let order: Vec<&str> = entries.iter().map(|e| e.applicant_key.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "early", "late"]);
        assert_eq!(entries[0].status, ApplicationStatus::Accepted);

        assert!(f.reconciler.reconcile().unwrap().is_clean());
    }
}
