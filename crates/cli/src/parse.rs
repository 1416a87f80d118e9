//! ArgMatches → Command conversion.

use std::fs;
use std::io::Read;

use admissions_core::{AcademicInfo, ApplicationDraft, PersonalInfo, PersonalStatement};
use admissions_executor::Command;
use chrono::NaiveDate;
use clap::ArgMatches;

/// Convert clap ArgMatches into an executor Command.
///
/// `caller` is the `--as` subject; student commands without an explicit
/// applicant act on it.
pub fn matches_to_command(matches: &ArgMatches, caller: Option<&str>) -> Result<Command, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "draft" => Ok(Command::SaveDraft {
            applicant: applicant(m, caller)?,
            draft: parse_draft(m)?,
        }),
        "attach" => Ok(Command::AttachDocument {
            applicant: applicant(m, caller)?,
            doc_type: required(m, "type")?,
            filename: required(m, "filename")?,
            location: m.get_one::<String>("location").cloned(),
        }),
        "submit" => Ok(Command::Submit {
            applicant: applicant(m, caller)?,
            draft: parse_draft(m)?,
        }),
        "status" => Ok(Command::Status {
            applicant: applicant(m, caller)?,
        }),
        "show" => Ok(Command::GetApplication {
            applicant: applicant(m, caller)?,
        }),
        "list" => {
            if m.get_flag("counts") {
                Ok(Command::Counts)
            } else {
                Ok(Command::ListApplications {
                    status: m.get_one::<String>("status").cloned(),
                })
            }
        }
        "decide" => Ok(Command::Decide {
            applicant: required(m, "applicant")?,
            decision: required(m, "decision")?,
            comments: m.get_one::<String>("comments").cloned(),
        }),
        "note" => Ok(Command::AddNote {
            applicant: required(m, "applicant")?,
            content: required(m, "content")?,
        }),
        "aid" => parse_aid(m, caller),
        "roster" => Ok(Command::Roster),
        "reconcile" => Ok(Command::Reconcile),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_aid(matches: &ArgMatches, caller: Option<&str>) -> Result<Command, String> {
    let (sub, m) = matches.subcommand().ok_or("No aid subcommand")?;
    match sub {
        "set" => Ok(Command::SetAid {
            applicant: required(m, "applicant")?,
            scholarship: parse_amount(m, "scholarship")?,
            grant: parse_amount(m, "grant")?,
        }),
        "get" => Ok(Command::GetAid {
            applicant: applicant(m, caller)?,
        }),
        other => Err(format!("Unknown aid subcommand: {}", other)),
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing <{}>", name))
}

fn applicant(m: &ArgMatches, caller: Option<&str>) -> Result<String, String> {
    m.get_one::<String>("applicant")
        .map(String::as_str)
        .or(caller)
        .map(str::to_string)
        .ok_or_else(|| "No applicant given; pass one or use --as".to_string())
}

fn parse_amount(m: &ArgMatches, name: &str) -> Result<f64, String> {
    let raw = required(m, name)?;
    raw.parse::<f64>()
        .map_err(|e| format!("Invalid {} amount '{}': {}", name, raw, e))
}

fn parse_num<T>(m: &ArgMatches, name: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    m.get_one::<String>(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| format!("Invalid --{} '{}': {}", name, raw, e))
        })
        .transpose()
}

fn read_draft_file(path: &str) -> Result<ApplicationDraft, String> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
    };
    serde_json::from_str(&text).map_err(|e| format!("Invalid draft JSON: {}", e))
}

/// Build a draft from `--file` and the section flags; flags win.
fn parse_draft(m: &ArgMatches) -> Result<ApplicationDraft, String> {
    let mut draft = match m.get_one::<String>("file") {
        Some(path) => read_draft_file(path)?,
        None => ApplicationDraft::default(),
    };

    let name = m.get_one::<String>("name");
    let dob = m.get_one::<String>("dob");
    let address = m.get_one::<String>("address");
    match (name, dob, address) {
        (Some(name), Some(dob), Some(address)) => {
            let date_of_birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d")
                .map_err(|e| format!("Invalid --dob '{}': {}", dob, e))?;
            draft.personal = Some(PersonalInfo {
                full_name: name.clone(),
                date_of_birth,
                address: address.clone(),
                email: m.get_one::<String>("email").cloned(),
                phone: m.get_one::<String>("phone").cloned(),
            });
        }
        (None, None, None) => {}
        _ => return Err("--name, --dob and --address must be given together".into()),
    }

    match (m.get_one::<String>("school"), parse_num::<f64>(m, "gpa")?) {
        (Some(school), Some(gpa)) => {
            draft.academic = Some(AcademicInfo {
                high_school: school.clone(),
                gpa,
                sat_score: parse_num(m, "sat")?,
                graduation_year: parse_num(m, "grad-year")?,
            });
        }
        (None, None) => {}
        _ => return Err("--school and --gpa must be given together".into()),
    }

    if let Some(essay) = m.get_one::<String>("essay") {
        draft.statement = Some(PersonalStatement {
            essay: essay.clone(),
        });
    }

    Ok(draft)
}
