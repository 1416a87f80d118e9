//! Decision Tests
//!
//! apply_decision: record and Index agree afterwards; refused decisions
//! write nothing.

use crate::*;

// =============================================================================
// SUCCESSFUL DECISIONS
// =============================================================================

#[test]
fn decision_is_visible_through_get() {
    let db = create_store();
    submit(&db, "ada");

    for status in [
        ApplicationStatus::UnderReview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ] {
        let outcome = db.review.decide("ada", status, None, "dean").unwrap();
        assert_eq!(outcome.status, status);
        assert_eq!(db.applications.get("ada").unwrap().status, status);
        assert_index_matches(&db, "ada");
    }
}

#[test]
fn decision_reports_previous_status() {
    let db = create_store();
    submit(&db, "ada");

    let first = db
        .review
        .decide("ada", ApplicationStatus::UnderReview, None, "dean")
        .unwrap();
    assert_eq!(first.previous_status, ApplicationStatus::Submitted);

    let second = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap();
    assert_eq!(second.previous_status, ApplicationStatus::UnderReview);
}

#[test]
fn comments_become_notes() {
    let db = create_store();
    submit(&db, "ada");

    db.review
        .decide_str("ada", "under_review", Some("Interview scheduled"), "dean")
        .unwrap();
    db.review
        .decide_str("ada", "accepted", Some("Congratulations"), "provost")
        .unwrap();

    let notes = db.applications.get("ada").unwrap().notes;
    let authors: Vec<&str> = notes.iter().map(|n| n.author.as_str()).collect();
    assert_eq!(authors, vec!["dean", "provost"]);
    assert_eq!(notes[1].content, "Congratulations");
}

#[test]
fn other_entries_are_untouched() {
    let db = create_store();
    submit(&db, "ada");
    submit(&db, "bob");
    submit(&db, "cy");
    let before = db.review.list().unwrap();

    db.review
        .decide("bob", ApplicationStatus::Rejected, None, "dean")
        .unwrap();

    let after = db.review.list().unwrap();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].status, ApplicationStatus::Rejected);
    assert_eq!(after[1].submitted_at, before[1].submitted_at);
}

// =============================================================================
// REFUSED DECISIONS
// =============================================================================

#[test]
fn unknown_applicant_is_not_found_and_writes_nothing() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    let writes = blobs.writes().len();

    let err = db
        .review
        .decide("nobody", ApplicationStatus::Accepted, Some("hi"), "dean")
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(blobs.writes().len(), writes);
}

#[test]
fn non_decision_status_is_invalid_transition_and_writes_nothing() {
    let (db, blobs) = create_faulty_store();
    submit(&db, "ada");
    let writes = blobs.writes().len();

    for status in [
        ApplicationStatus::NotStarted,
        ApplicationStatus::InProgress,
        ApplicationStatus::DocumentsPending,
        ApplicationStatus::Submitted,
    ] {
        let err = db.review.decide("ada", status, Some("x"), "dean").unwrap_err();
        assert!(err.is_invalid_transition(), "{:?}", status);
    }
    assert_eq!(blobs.writes().len(), writes);
    assert_eq!(
        db.applications.get("ada").unwrap().status,
        ApplicationStatus::Submitted
    );
}

#[test]
fn unknown_status_name_is_invalid_transition() {
    let db = create_store();
    submit(&db, "ada");
    let err = db
        .review
        .decide_str("ada", "waitlisted", None, "dean")
        .unwrap_err();
    assert!(err.is_invalid_transition());
}

#[test]
fn unknown_applicant_wins_over_unknown_status() {
    let (db, blobs) = create_faulty_store();
    let err = db
        .review
        .decide_str("ghost", "waitlisted", None, "dean")
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(blobs.put_attempts(), 0);
}

#[test]
fn draft_cannot_be_decided() {
    let db = create_store();
    db.applications
        .save_draft("ada", complete_draft("Ada"))
        .unwrap();

    let err = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap_err();
    assert!(err.is_invalid_transition());
    assert!(db.review.list().unwrap().is_empty());
}

#[test]
fn forward_only_policy_keeps_decisions_final() {
    let db = Admissions::builder()
        .transition_policy(TransitionPolicy::ForwardOnly)
        .open()
        .unwrap();
    submit(&db, "ada");

    db.review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap();
    for status in [ApplicationStatus::UnderReview, ApplicationStatus::Rejected] {
        assert!(db
            .review
            .decide("ada", status, None, "dean")
            .unwrap_err()
            .is_invalid_transition());
    }
    assert_index_matches(&db, "ada");
}

#[test]
fn read_only_store_refuses_decisions() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = Admissions::builder().path(dir.path()).fsync(false).open().unwrap();
        submit(&db, "ada");
    }
    let db = Admissions::builder()
        .path(dir.path())
        .read_only()
        .open()
        .unwrap();

    let err = db
        .review
        .decide("ada", ApplicationStatus::Accepted, None, "dean")
        .unwrap_err();
    assert!(matches!(err, Error::ReadOnly));
    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::Submitted
    );
}
