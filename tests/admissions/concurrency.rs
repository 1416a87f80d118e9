//! Concurrency Tests
//!
//! Concurrent decisions serialize on the Index, so no entry update is lost.

use crate::*;
use std::sync::Barrier;
use std::thread;

#[test]
fn concurrent_decisions_on_different_applicants_all_land() {
    let db = Arc::new(create_store());
    let keys: Vec<String> = (0..16).map(|i| format!("applicant-{}", i)).collect();
    for key in &keys {
        submit(&db, key);
    }

    let barrier = Arc::new(Barrier::new(keys.len()));
    let handles: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let db = Arc::clone(&db);
            let barrier = Arc::clone(&barrier);
            let key = key.clone();
            thread::spawn(move || {
                let status = if i % 2 == 0 {
                    ApplicationStatus::Accepted
                } else {
                    ApplicationStatus::Rejected
                };
                barrier.wait();
                db.review.decide(&key, status, None, "dean").unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap().index_desync);
    }

    let entries = db.review.list().unwrap();
    assert_eq!(entries.len(), keys.len());
    for key in &keys {
        assert_index_matches(&db, key);
    }
    let counts = db.review.counts().unwrap();
    assert_eq!(counts[&ApplicationStatus::Accepted], 8);
    assert_eq!(counts[&ApplicationStatus::Rejected], 8);
}

#[test]
fn concurrent_submissions_produce_one_entry_each() {
    let db = Arc::new(create_store());
    let handles: Vec<_> = (0..12)
        .map(|i| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                let key = format!("s{}", i % 6);
                submit(&db, &key);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let entries = db.review.list().unwrap();
    let unique: HashSet<String> = entries
        .iter()
        .map(|e| e.applicant_key.to_string())
        .collect();
    assert_eq!(entries.len(), 6);
    assert_eq!(unique.len(), 6);
}

#[test]
fn readers_see_complete_index_during_writes() {
    let db = Arc::new(create_store());
    for i in 0..8 {
        submit(&db, &format!("r{}", i));
    }

    let writer = {
        let db = Arc::clone(&db);
        thread::spawn(move || {
            for round in 0..5 {
                for i in 0..8 {
                    let status = if round % 2 == 0 {
                        ApplicationStatus::UnderReview
                    } else {
                        ApplicationStatus::Accepted
                    };
                    db.review
                        .decide(&format!("r{}", i), status, None, "dean")
                        .unwrap();
                }
            }
        })
    };

    for _ in 0..50 {
        assert_eq!(db.review.list().unwrap().len(), 8);
    }
    writer.join().unwrap();
}
