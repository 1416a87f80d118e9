//! Student-side handlers: drafts, documents, submission, status

use std::sync::Arc;

use admissions_core::{ApplicantKey, ApplicationDraft};

use crate::bridge::Primitives;
use crate::error::convert_result;
use crate::output::StatusReport;
use crate::{Output, Result};

/// Handle SaveDraft command.
pub fn save_draft(p: &Arc<Primitives>, key: &ApplicantKey, draft: ApplicationDraft) -> Result<Output> {
    let record = convert_result(p.submissions.save_draft(key, draft))?;
    Ok(Output::Application(Box::new(record)))
}

/// Handle AttachDocument command.
pub fn attach_document(
    p: &Arc<Primitives>,
    key: &ApplicantKey,
    doc_type: &str,
    filename: &str,
    location: Option<&str>,
) -> Result<Output> {
    let doc_type = crate::bridge::to_doc_type(doc_type)?;
    let doc = convert_result(p.submissions.attach_document(key, doc_type, filename, location))?;
    Ok(Output::Document(doc))
}

/// Handle Submit command.
pub fn submit(p: &Arc<Primitives>, key: &ApplicantKey, draft: ApplicationDraft) -> Result<Output> {
    let record = convert_result(p.submissions.submit(key, draft))?;
    Ok(Output::Application(Box::new(record)))
}

/// Handle Status command.
pub fn status(p: &Arc<Primitives>, key: &ApplicantKey) -> Result<Output> {
    let status = convert_result(p.submissions.status_of(key))?;
    Ok(Output::Status(StatusReport::new(key.clone(), status)))
}

/// Handle GetApplication command.
pub fn get_application(p: &Arc<Primitives>, key: &ApplicantKey) -> Result<Output> {
    let record = convert_result(p.records.get(key))?;
    Ok(Output::Application(Box::new(record)))
}
