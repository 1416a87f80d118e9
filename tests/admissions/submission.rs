//! Submission Lifecycle Tests

use crate::*;

#[test]
fn status_progresses_through_drafts() {
    let db = create_store();
    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::NotStarted
    );

    db.applications
        .save_draft(
            "ada",
            ApplicationDraft {
                personal: complete_draft("Ada").personal,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::InProgress
    );

    db.applications
        .save_draft("ada", complete_draft("Ada"))
        .unwrap();
    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::DocumentsPending
    );

    db.applications
        .attach_document("ada", DocumentType::Transcript, "transcript.pdf", None)
        .unwrap();
    db.applications
        .attach_document("ada", DocumentType::PersonalStatement, "essay.pdf", None)
        .unwrap();
    assert_eq!(
        db.applications.status("ada").unwrap(),
        ApplicationStatus::InProgress
    );

    let record = db
        .applications
        .submit("ada", ApplicationDraft::default())
        .unwrap();
    assert_eq!(record.status, ApplicationStatus::Submitted);
    assert_eq!(record.documents.len(), 2);
}

#[test]
fn double_submission_yields_one_entry() {
    let db = create_store();
    let first = submit(&db, "ada");
    let second = submit(&db, "ada");

    assert_eq!(first.submitted_at, second.submitted_at);
    assert_eq!(db.review.list().unwrap().len(), 1);
    assert_index_matches(&db, "ada");
}

#[test]
fn incomplete_submission_writes_nothing() {
    let (db, blobs) = create_faulty_store();
    let err = db
        .applications
        .submit(
            "ada",
            ApplicationDraft {
                statement: complete_draft("Ada").statement,
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(blobs.writes().is_empty());
    assert!(!db.applications.exists("ada").unwrap());
}

#[test]
fn invalid_sections_are_rejected() {
    let db = create_store();
    let mut draft = complete_draft("Ada");
    if let Some(academic) = draft.academic.as_mut() {
        academic.gpa = 7.5;
    }
    assert!(db.applications.submit("ada", draft).is_err());

    let mut draft = complete_draft("Ada");
    if let Some(academic) = draft.academic.as_mut() {
        academic.sat_score = Some(200);
    }
    assert!(db.applications.save_draft("ada", draft).is_err());
}

#[test]
fn required_documents_can_be_enforced() {
    let db = Admissions::builder().require_documents(true).open().unwrap();
    assert!(db.applications.submit("ada", complete_draft("Ada")).is_err());
    assert!(db.review.list().unwrap().is_empty());

    db.applications
        .attach_document("ada", DocumentType::Transcript, "t.pdf", None)
        .unwrap();
    db.applications
        .attach_document("ada", DocumentType::PersonalStatement, "ps.pdf", None)
        .unwrap();
    submit(&db, "ada");
    assert_index_matches(&db, "ada");
}

#[test]
fn resubmission_after_review_is_refused() {
    let db = create_store();
    submit(&db, "ada");
    db.review
        .decide("ada", ApplicationStatus::UnderReview, None, "dean")
        .unwrap();

    let err = db
        .applications
        .submit("ada", complete_draft("Ada"))
        .unwrap_err();
    assert!(err.is_invalid_transition());
    assert_eq!(
        db.review.entry("ada").unwrap().unwrap().status,
        ApplicationStatus::UnderReview
    );
}

#[test]
fn reserved_and_malformed_keys_are_rejected() {
    let db = create_store();
    for key in ["", "index", "a/b", "..", ".hidden"] {
        let err = db
            .applications
            .submit(key, complete_draft("X"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)), "{:?}", key);
    }
}

#[test]
fn index_entries_keep_submission_order() {
    let db = create_store();
    for key in ["zed", "ada", "mia"] {
        submit(&db, key);
    }
    let order: Vec<String> = db
        .review
        .list()
        .unwrap()
        .into_iter()
        .map(|e| e.applicant_key.to_string())
        .collect();
    assert_eq!(order, vec!["zed", "ada", "mia"]);
}
