//! Reconciliation Tests

use crate::*;

#[test]
fn reconcile_on_consistent_index_is_clean() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    submit(&db, "bob");
    let writes = blobs.writes().len();

    let report = db.review.reconcile().unwrap();
    assert!(report.is_clean());
    assert_eq!(blobs.writes().len(), writes);
}

#[test]
fn reconcile_repairs_lagging_index() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    submit(&db, "bob");

    blobs.fail_puts(INDEX_PATH);
    assert!(db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .is_err());
    assert!(db.applications.submit("cy", complete_draft("Cy")).is_err());
    blobs.heal(INDEX_PATH);

    let report = db.review.reconcile().unwrap();
    assert_eq!(report.updated, vec![ApplicantKey::new("ada").unwrap()]);
    assert_eq!(report.added, vec![ApplicantKey::new("cy").unwrap()]);
    assert!(report.removed.is_empty());

    for key in ["ada", "bob", "cy"] {
        assert_index_matches(&db, key);
    }
    assert!(db.review.reconcile().unwrap().is_clean());
}

#[test]
fn reconcile_drops_entries_without_submitted_records() {
    let db = create_store();
    submit(&db, "ada");
    let stale = db.review.entry("ada").unwrap().unwrap();
    let mut ghost = stale.clone();
    ghost.applicant_key = ApplicantKey::new("ghost").unwrap();

    let entries = vec![stale.clone(), ghost, stale];
    let bytes = serde_json::to_vec(&entries).unwrap();
    db.database()
        .blobs()
        .put(INDEX_PATH, bytes, "application/json")
        .unwrap();

    let report = db.review.reconcile().unwrap();
    assert_eq!(report.removed.len(), 2);
    assert_eq!(db.review.list().unwrap().len(), 1);
    assert_index_matches(&db, "ada");
}

#[test]
fn reconcile_rebuilds_deleted_index() {
    let db = create_store();
    for key in ["ada", "bob", "cy"] {
        submit(&db, key);
    }
    let order: Vec<IndexEntry> = db.review.list().unwrap();
    db.database().blobs().delete(INDEX_PATH).unwrap();
    assert!(db.review.list().unwrap().is_empty());

    let report = db.review.reconcile().unwrap();
    assert_eq!(report.added.len(), 3);
    assert_eq!(db.review.list().unwrap(), order);
}
