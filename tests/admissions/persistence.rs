//! Filesystem Persistence Tests

use crate::*;

#[test]
fn records_and_index_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = Admissions::open(dir.path()).unwrap();
        submit(&db, "ada");
        submit(&db, "bob");
        db.review
            .decide("ada", ApplicationStatus::Accepted, Some("Welcome"), "dean")
            .unwrap();
        db.aid.set("ada", 5000.0, 1500.0).unwrap();
    }

    let db = Admissions::open(dir.path()).unwrap();
    assert!(!db.is_ephemeral());
    assert_eq!(db.path(), Some(dir.path()));

    let record = db.applications.get("ada").unwrap();
    assert_eq!(record.status, ApplicationStatus::Accepted);
    assert_eq!(record.notes[0].content, "Welcome");
    assert_index_matches(&db, "ada");
    assert_index_matches(&db, "bob");
    assert_eq!(db.aid.get("ada").unwrap().unwrap().total(), 6500.0);
    assert!(db.review.reconcile().unwrap().is_clean());
}

#[test]
fn longest_email_key_is_stored_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let domain = "@example.edu";
    let key = format!(
        "{}{}",
        "a".repeat(admissions_core::types::MAX_KEY_LEN - domain.len()),
        domain
    );
    assert_eq!(key.len(), admissions_core::types::MAX_KEY_LEN);

    {
        let db = Admissions::open(dir.path()).unwrap();
        db.applications
            .save_draft(&key, complete_draft("Long Address"))
            .unwrap();
        submit(&db, &key);
        db.aid.set(&key, 100.0, 0.0).unwrap();
    }

    let db = Admissions::open(dir.path()).unwrap();
    assert!(db.applications.get(&key).unwrap().is_submitted());
    assert_index_matches(&db, &key);
    assert!(db.aid.get(&key).unwrap().is_some());
}

#[test]
fn read_only_open_serves_reads_and_refuses_writes() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = Admissions::open(dir.path()).unwrap();
        submit(&db, "ada");
    }

    let db = Admissions::builder()
        .path(dir.path())
        .read_only()
        .open()
        .unwrap();
    assert_eq!(db.access_mode(), AccessMode::ReadOnly);
    assert_eq!(db.review.list().unwrap().len(), 1);

    assert!(matches!(
        db.applications.save_draft("bob", complete_draft("Bob")),
        Err(Error::ReadOnly)
    ));
    assert!(matches!(
        db.applications.submit("ada", ApplicationDraft::default()),
        Err(Error::ReadOnly)
    ));
    assert!(matches!(db.aid.set("ada", 1.0, 0.0), Err(Error::ReadOnly)));
    assert!(matches!(db.review.reconcile(), Err(Error::ReadOnly)));
}

#[test]
fn corrupt_record_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = Admissions::open(dir.path()).unwrap();
    db.database()
        .blobs()
        .put(&record_path("ada"), b"{not json".to_vec(), "application/json")
        .unwrap();

    assert!(matches!(
        db.applications.get("ada"),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn config_selects_storage_and_policy() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_toml_str(&format!(
        r#"
        [storage]
        backend = "filesystem"
        path = "{}"
        fsync = false

        [lifecycle]
        transition_policy = "forward_only"
        "#,
        dir.path().display()
    ))
    .unwrap();

    let db = Admissions::from_config(&config).unwrap();
    assert_eq!(db.transition_policy(), TransitionPolicy::ForwardOnly);
    submit(&db, "ada");
    assert!(dir.path().join("applications").exists());
}
