//! Executor tests: authorization rules and end-to-end command flows.


use std::sync::Arc;

use admissions_core::{AcademicInfo, ApplicationDraft, PersonalInfo, PersonalStatement};
use admissions_engine::Database;
use chrono::NaiveDate;

use crate::Executor;

/// Create a test executor over an in-memory database.
fn create_test_executor() -> Executor {
    Executor::new(Arc::new(Database::ephemeral().unwrap()))
}

/// A draft with every required section filled in.
fn complete_draft(name: &str) -> ApplicationDraft {
    ApplicationDraft {
        personal: Some(PersonalInfo {
            full_name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2006, 9, 1).unwrap(),
            address: "12 College Ave".into(),
            email: Some(format!("{}@example.edu", name.to_lowercase())),
            phone: None,
        }),
        academic: Some(AcademicInfo {
            high_school: "Lincoln High".into(),
            gpa: 3.9,
            sat_score: Some(1500),
            graduation_year: Some(2025),
        }),
        extracurricular: None,
        statement: Some(PersonalStatement {
            essay: "I like building things.".into(),
        }),
    }
}
