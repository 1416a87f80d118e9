//! Index Consistency Tests
//!
//! The record is written before the Index, so after a failure the Index may
//! lag a record but never lead one.

use crate::*;

// =============================================================================
// FAILED INDEX WRITES
// =============================================================================

#[test]
fn index_failure_leaves_committed_record_and_stale_entry() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    blobs.fail_puts(INDEX_PATH);

    let err = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap_err();
    assert!(err.is_retryable());

    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::Accepted
    );
    assert_eq!(
        db.review.entry("ada").unwrap().unwrap().status,
        ApplicationStatus::Submitted
    );
}

#[test]
fn retry_after_index_failure_converges() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    blobs.fail_puts(INDEX_PATH);
    assert!(db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .is_err());

    blobs.heal(INDEX_PATH);
    let outcome = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap();
    assert!(!outcome.index_desync);
    assert_index_matches(&db, "ada");
}

// =============================================================================
// FAILED RECORD WRITES
// =============================================================================

#[test]
fn record_failure_never_touches_index() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    let before = db.review.list().unwrap();
    blobs.fail_puts(&record_path("ada"));
    let writes = blobs.writes().len();

    assert!(db
        .review
        .decide("ada", ApplicationStatus::Rejected, Some("No"), "dean")
        .is_err());

    assert_eq!(blobs.writes().len(), writes);
    assert_eq!(db.review.list().unwrap(), before);
    let record = db.applications.get("ada").unwrap();
    assert_eq!(record.status, ApplicationStatus::Submitted);
    assert!(record.notes.is_empty());
}

#[test]
fn record_is_always_written_before_index() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    db.review
        .decide("ada", ApplicationStatus::UnderReview, None, "dean")
        .unwrap();

    let record = record_path("ada");
    let writes = blobs.writes();
    let first_record = writes.iter().position(|p| *p == record).unwrap();
    let first_index = writes.iter().position(|p| p == INDEX_PATH).unwrap();
    let last_record = writes.iter().rposition(|p| *p == record).unwrap();
    let last_index = writes.iter().rposition(|p| p == INDEX_PATH).unwrap();
    assert!(first_record < first_index);
    assert!(last_record < last_index);
}

// =============================================================================
// DESYNC HEALING
// =============================================================================

#[test]
fn missing_entry_is_rebuilt_by_decision() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "bob");
    blobs.fail_puts(INDEX_PATH);
    assert!(db.applications.submit("ada", complete_draft("Ada")).is_err());
    blobs.heal(INDEX_PATH);

    assert!(db.applications.get("ada").unwrap().is_submitted());
    assert!(db.review.entry("ada").unwrap().is_none());

    let outcome = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap();
    assert!(outcome.index_desync);
    assert_index_matches(&db, "ada");
    assert_index_matches(&db, "bob");
    assert_eq!(db.review.list().unwrap().len(), 2);
}

#[test]
fn resubmission_repairs_missing_entry() {
    let (db, blobs) = create_faulty_store();
    blobs.fail_puts(INDEX_PATH);
    assert!(db.applications.submit("ada", complete_draft("Ada")).is_err());
    blobs.heal(INDEX_PATH);

    submit(&db, "ada");
    assert_index_matches(&db, "ada");
}
