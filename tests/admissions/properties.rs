//! Property Tests
//!
//! Random decision sequences keep every Index entry equal to its record.

use crate::*;
use proptest::prelude::*;

const KEYS: [&str; 4] = ["ada", "bob", "cy", "dee"];

fn decision_status() -> impl Strategy<Value = ApplicationStatus> {
    prop_oneof![
        Just(ApplicationStatus::UnderReview),
        Just(ApplicationStatus::Accepted),
        Just(ApplicationStatus::Rejected),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Submit(usize),
    Decide(usize, ApplicationStatus),
    Reconcile,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..KEYS.len()).prop_map(Op::Submit),
        ((0..KEYS.len()), decision_status()).prop_map(|(k, s)| Op::Decide(k, s)),
        Just(Op::Reconcile),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn index_mirrors_records(ops in proptest::collection::vec(op(), 1..40)) {
        let db = create_store();

        for op in ops {
            match op {
                Op::Submit(k) => {
                    // Refused once review has started; either way nothing diverges.
                    let _ = db.applications.submit(KEYS[k], complete_draft(KEYS[k]));
                }
                Op::Decide(k, status) => {
                    let result = db.review.decide(KEYS[k], status, None, "dean");
                    match db.applications.get_optional(KEYS[k]).unwrap() {
                        Some(record) if record.is_submitted() => {
                            let outcome = result.unwrap();
                            prop_assert_eq!(outcome.status, status);
                            prop_assert!(!outcome.index_desync);
                        }
                        _ => prop_assert!(result.unwrap_err().is_not_found()),
                    }
                }
                Op::Reconcile => {
                    prop_assert!(db.review.reconcile().unwrap().is_clean());
                }
            }

            let submitted: Vec<ApplicationRecord> = db
                .applications
                .keys()
                .unwrap()
                .iter()
                .map(|k| db.applications.get(k.as_str()).unwrap())
                .filter(ApplicationRecord::is_submitted)
                .collect();
            let entries = db.review.list().unwrap();
            prop_assert_eq!(entries.len(), submitted.len());
            for record in &submitted {
                assert_index_matches(&db, record.applicant_key.as_str());
            }
        }
    }

    #[test]
    fn refused_decisions_change_nothing(status in prop_oneof![
        Just(ApplicationStatus::NotStarted),
        Just(ApplicationStatus::InProgress),
        Just(ApplicationStatus::DocumentsPending),
        Just(ApplicationStatus::Submitted),
    ]) {
        let (db, blobs) = create_faulty_store();
        submit(&db, "ada");
        let record = db.applications.get("ada").unwrap();
        let index = db.review.list().unwrap();
        let attempts = blobs.put_attempts();

        prop_assert!(db.review.decide("ada", status, Some("x"), "dean").is_err());
        prop_assert_eq!(blobs.put_attempts(), attempts);
        prop_assert_eq!(db.applications.get("ada").unwrap(), record);
        prop_assert_eq!(db.review.list().unwrap(), index);
    }
}
