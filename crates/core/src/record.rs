//! Application record: the full document stored per applicant
//!
//! A record is stored as one JSON blob and always replaced as a whole.
//! Student-editable sections arrive as an [`ApplicationDraft`] and are merged
//! over the stored record; documents and notes are appended.

use crate::error::{Error, Result};
use crate::status::ApplicationStatus;
use crate::types::{ApplicantKey, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Sections
// =============================================================================

/// Personal details of the applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full legal name, used as the Index display name
    pub full_name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Postal address
    pub address: String,
    /// Contact e-mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl PersonalInfo {
    fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::InvalidInput("full name is required".into()));
        }
        if self.address.trim().is_empty() {
            return Err(Error::InvalidInput("address is required".into()));
        }
        Ok(())
    }
}

/// Academic history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicInfo {
    /// High school attended
    pub high_school: String,
    /// Grade point average on a 0.0 - 5.0 scale
    pub gpa: f64,
    /// SAT total, 400 - 1600
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat_score: Option<u16>,
    /// Expected graduation year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
}

impl AcademicInfo {
    fn validate(&self) -> Result<()> {
        if self.high_school.trim().is_empty() {
            return Err(Error::InvalidInput("high school is required".into()));
        }
        if !self.gpa.is_finite() || !(0.0..=5.0).contains(&self.gpa) {
            return Err(Error::InvalidInput(format!(
                "gpa {} outside 0.0 - 5.0",
                self.gpa
            )));
        }
        if let Some(score) = self.sat_score {
            if !(400..=1600).contains(&score) {
                return Err(Error::InvalidInput(format!(
                    "sat score {} outside 400 - 1600",
                    score
                )));
            }
        }
        Ok(())
    }
}

/// One extracurricular activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name
    pub name: String,
    /// Role held
    #[serde(default)]
    pub role: String,
    /// Years of participation
    #[serde(default)]
    pub years: u8,
}

/// Extracurricular activities and awards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtracurricularInfo {
    /// Activities
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Awards and honours
    #[serde(default)]
    pub awards: Vec<String>,
}

/// Personal statement essay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalStatement {
    /// Essay text
    pub essay: String,
}

// =============================================================================
// Documents and notes
// =============================================================================

/// Kind of supporting document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Official high school transcript (required)
    Transcript,
    /// Letter of recommendation
    Recommendation,
    /// Personal statement essay as a file (required)
    PersonalStatement,
    /// Anything else
    Additional,
}

impl DocumentType {
    /// Document types a complete application must carry
    pub const REQUIRED: [DocumentType; 2] =
        [DocumentType::Transcript, DocumentType::PersonalStatement];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Transcript => "transcript",
            DocumentType::Recommendation => "recommendation",
            DocumentType::PersonalStatement => "personal_statement",
            DocumentType::Additional => "additional",
        }
    }

    /// Whether submission may require this type
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "transcript" => Ok(DocumentType::Transcript),
            "recommendation" => Ok(DocumentType::Recommendation),
            "personal_statement" | "personal-statement" => Ok(DocumentType::PersonalStatement),
            "additional" => Ok(DocumentType::Additional),
            other => Err(Error::InvalidInput(format!("unknown document type: {}", other))),
        }
    }
}

/// Reference to an uploaded document held by the document storage facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Unique id
    pub id: Uuid,
    /// Kind of document
    pub doc_type: DocumentType,
    /// Original file name
    pub filename: String,
    /// Upload time
    pub uploaded_at: Timestamp,
    /// Retrievable location (URL or storage path)
    pub location: String,
}

/// Admin note attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Who wrote it
    pub author: String,
    /// Note text
    pub content: String,
    /// When it was written
    pub created_at: Timestamp,
}

// =============================================================================
// Draft input
// =============================================================================

/// Student-editable sections of an application
///
/// Every field is optional: present sections replace the stored ones,
/// absent sections leave them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    /// Personal details
    #[serde(default)]
    pub personal: Option<PersonalInfo>,
    /// Academic history
    #[serde(default)]
    pub academic: Option<AcademicInfo>,
    /// Extracurriculars
    #[serde(default)]
    pub extracurricular: Option<ExtracurricularInfo>,
    /// Personal statement
    #[serde(default)]
    pub statement: Option<PersonalStatement>,
}

impl ApplicationDraft {
    /// Validate every section that is present
    pub fn validate(&self) -> Result<()> {
        if let Some(personal) = &self.personal {
            personal.validate()?;
        }
        if let Some(academic) = &self.academic {
            academic.validate()?;
        }
        if let Some(statement) = &self.statement {
            if statement.essay.trim().is_empty() {
                return Err(Error::InvalidInput("personal statement is empty".into()));
            }
        }
        Ok(())
    }
}

// =============================================================================
// ApplicationRecord
// =============================================================================

/// Full application document for one applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Owner of the record
    pub applicant_key: ApplicantKey,
    /// Personal details
    #[serde(default)]
    pub personal: Option<PersonalInfo>,
    /// Academic history
    #[serde(default)]
    pub academic: Option<AcademicInfo>,
    /// Extracurriculars
    #[serde(default)]
    pub extracurricular: ExtracurricularInfo,
    /// Personal statement
    #[serde(default)]
    pub statement: Option<PersonalStatement>,
    /// Attached documents, in upload order
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
    /// Admin notes, in creation order
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Current status
    pub status: ApplicationStatus,
    /// First submission time
    #[serde(default)]
    pub submitted_at: Option<Timestamp>,
    /// Last write time
    pub updated_at: Timestamp,
}

impl ApplicationRecord {
    /// Create an empty record
    pub fn new(applicant_key: ApplicantKey, now: Timestamp) -> Self {
        ApplicationRecord {
            applicant_key,
            personal: None,
            academic: None,
            extracurricular: ExtracurricularInfo::default(),
            statement: None,
            documents: Vec::new(),
            notes: Vec::new(),
            status: ApplicationStatus::NotStarted,
            submitted_at: None,
            updated_at: now,
        }
    }

    /// Whether the submission action has run
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// Name shown in the Index; falls back to the key
    pub fn display_name(&self) -> String {
        self.personal
            .as_ref()
            .map(|p| p.full_name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.applicant_key.to_string())
    }

    /// Merge a validated draft over the stored sections
    pub fn apply_draft(&mut self, draft: ApplicationDraft, now: Timestamp) -> Result<()> {
        draft.validate()?;

        if let Some(personal) = draft.personal {
            self.personal = Some(personal);
        }
        if let Some(academic) = draft.academic {
            self.academic = Some(academic);
        }
        if let Some(extracurricular) = draft.extracurricular {
            self.extracurricular = extracurricular;
        }
        if let Some(statement) = draft.statement {
            self.statement = Some(statement);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Required sections that are still empty
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.personal.is_none() {
            missing.push("personal");
        }
        if self.academic.is_none() {
            missing.push("academic");
        }
        if self.statement.is_none() {
            missing.push("statement");
        }
        missing
    }

    /// Required document types not yet attached
    pub fn missing_documents(&self) -> Vec<DocumentType> {
        DocumentType::REQUIRED
            .iter()
            .copied()
            .filter(|required| !self.documents.iter().any(|d| d.doc_type == *required))
            .collect()
    }

    /// Draft status implied by the current content
    ///
    /// DocumentsPending once every required section is filled but a required
    /// document is missing, InProgress otherwise.
    pub fn derived_draft_status(&self) -> ApplicationStatus {
        if self.missing_sections().is_empty() && !self.missing_documents().is_empty() {
            ApplicationStatus::DocumentsPending
        } else {
            ApplicationStatus::InProgress
        }
    }

    /// Append a document reference
    pub fn attach_document(
        &mut self,
        doc_type: DocumentType,
        filename: impl Into<String>,
        location: impl Into<String>,
        now: Timestamp,
    ) -> Result<DocumentRef> {
        let filename = filename.into();
        let location = location.into();
        if filename.trim().is_empty() {
            return Err(Error::InvalidInput("filename is required".into()));
        }
        if location.trim().is_empty() {
            return Err(Error::InvalidInput("document location is required".into()));
        }

        let doc = DocumentRef {
            id: Uuid::new_v4(),
            doc_type,
            filename,
            uploaded_at: now,
            location,
        };
        self.documents.push(doc.clone());
        self.updated_at = now;
        Ok(doc)
    }

    /// Append an admin note; blank content is rejected
    pub fn add_note(
        &mut self,
        author: impl Into<String>,
        content: impl Into<String>,
        now: Timestamp,
    ) -> Result<()> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(Error::InvalidInput("note content is empty".into()));
        }
        self.notes.push(Note {
            author: author.into(),
            content,
            created_at: now,
        });
        self.updated_at = now;
        Ok(())
    }
}
