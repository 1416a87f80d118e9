//! Output formatting for human and JSON modes.

use admissions_core::{ApplicationRecord, IndexEntry};
use admissions_executor::{Error, Output};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(err),
        OutputMode::Human => format!("(error) {} [{}]", err, err.code()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"code\":\"Serialization\",\"reason\":\"{}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Application(record) => format_record(record),
        Output::Document(doc) => format!(
            "attached {} {} ({}) at {}",
            doc.doc_type, doc.filename, doc.id, doc.location
        ),
        Output::Status(report) => format!(
            "{}: {} ({}%)",
            report.applicant, report.label, report.progress
        ),
        Output::Entries(entries) => format_entries(entries),
        Output::Counts(counts) => {
            if counts.is_empty() {
                return "(empty)".to_string();
            }
            counts
                .iter()
                .map(|(status, n)| format!("{:<18} {}", status.label(), n))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Decision(outcome) => {
            let mut line = format!(
                "{}: {} -> {}",
                outcome.applicant_key,
                outcome.previous_status.label(),
                outcome.status.label()
            );
            if outcome.index_desync {
                line.push_str(" (index entry was missing and has been rebuilt)");
            }
            line
        }
        Output::Aid(None) => "(no award)".to_string(),
        Output::Aid(Some(aid)) => format!(
            "{}: scholarship {:.2}, grant {:.2}, total {:.2}",
            aid.applicant_key,
            aid.scholarship_amount,
            aid.grant_amount,
            aid.total()
        ),
        Output::Roster(rows) => {
            if rows.is_empty() {
                return "(empty)".to_string();
            }
            rows.iter()
                .map(|row| {
                    let award = row
                        .aid
                        .as_ref()
                        .map(|aid| format!("{:.2}", aid.total()))
                        .unwrap_or_else(|| "-".to_string());
                    format!("{}  award: {}", format_entry(&row.entry), award)
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Reconciled(report) => {
            if report.is_clean() {
                return "index already consistent".to_string();
            }
            format!(
                "added {}, updated {}, removed {}",
                report.added.len(),
                report.updated.len(),
                report.removed.len()
            )
        }
    }
}

fn format_entry(entry: &IndexEntry) -> String {
    format!(
        "{:<24} {:<24} {:<18} {}",
        entry.applicant_key.as_str(),
        entry.display_name,
        entry.status.label(),
        entry.submitted_at.format("%Y-%m-%d %H:%M")
    )
}

fn format_entries(entries: &[IndexEntry]) -> String {
    if entries.is_empty() {
        return "(empty)".to_string();
    }
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_record(record: &ApplicationRecord) -> String {
    let mut lines = vec![
        format!("applicant: {}", record.applicant_key),
        format!("name:      {}", record.display_name()),
        format!(
            "status:    {} ({}%)",
            record.status.label(),
            record.status.progress()
        ),
    ];
    if let Some(at) = record.submitted_at {
        lines.push(format!("submitted: {}", at.format("%Y-%m-%d %H:%M")));
    }
    let missing = record.missing_sections();
    if !missing.is_empty() {
        lines.push(format!("missing:   {}", missing.join(", ")));
    }
    for doc in &record.documents {
        lines.push(format!("document:  {} {}", doc.doc_type, doc.filename));
    }
    for note in &record.notes {
        lines.push(format!(
            "note:      [{}] {}: {}",
            note.created_at.format("%Y-%m-%d"),
            note.author,
            note.content
        ));
    }
    lines.join("\n")
}
