//! Admin handlers: listing, decisions, notes, reconciliation

use std::sync::Arc;

use admissions_core::{ApplicantKey, ApplicationStatus};
use admissions_security::Principal;

use crate::bridge::{self, Primitives};
use crate::error::convert_result;
use crate::{Output, Result};

/// Handle ListApplications command.
pub fn list_applications(p: &Arc<Primitives>, status: Option<&str>) -> Result<Output> {
    let entries = match status {
        Some(raw) => convert_result(p.index.list_by_status(bridge::to_status(raw)?))?,
        None => convert_result(p.index.list())?,
    };
    Ok(Output::Entries(entries))
}

/// Handle Counts command.
pub fn counts(p: &Arc<Primitives>) -> Result<Output> {
    let counts = convert_result(p.index.counts())?;
    let ordered = ApplicationStatus::ALL
        .iter()
        .filter_map(|status| counts.get(status).map(|n| (*status, *n)))
        .collect();
    Ok(Output::Counts(ordered))
}

/// Handle Decide command. The caller becomes the note author.
pub fn decide(
    p: &Arc<Primitives>,
    caller: &Principal,
    key: &ApplicantKey,
    decision: &str,
    comments: Option<&str>,
) -> Result<Output> {
    let outcome = convert_result(p.decisions.apply_named_decision(
        key,
        decision,
        comments,
        &caller.subject,
    ))?;
    Ok(Output::Decision(outcome))
}

/// Handle AddNote command.
pub fn add_note(
    p: &Arc<Primitives>,
    caller: &Principal,
    key: &ApplicantKey,
    content: &str,
) -> Result<Output> {
    convert_result(p.decisions.add_note(key, &caller.subject, content))?;
    Ok(Output::Unit)
}

/// Handle Reconcile command.
pub fn reconcile(p: &Arc<Primitives>) -> Result<Output> {
    let report = convert_result(p.reconciler.reconcile())?;
    Ok(Output::Reconciled(report))
}
