//! Executor: authorizes and dispatches commands

use std::sync::Arc;

use admissions_engine::Database;
use admissions_security::Principal;
use tracing::{debug, warn};

use crate::bridge::{self, Primitives};
use crate::error::convert_result;
use crate::handlers::{admin, aid, application};
use crate::{Command, Error, Output, Result};

/// Executes [`Command`]s on behalf of a [`Principal`]
///
/// Students act only on their own applicant key; everything that touches
/// other applicants or changes review state requires the admin role.
#[derive(Clone)]
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over a database
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            primitives: Arc::new(Primitives::new(db)),
        }
    }

    /// Underlying database
    pub fn database(&self) -> &Arc<Database> {
        &self.primitives.db
    }

    /// Execute a command for an authenticated caller
    pub fn execute(&self, caller: &Principal, cmd: Command) -> Result<Output> {
        self.execute_as(Some(caller), cmd)
    }

    /// Execute a command; `None` or a blank subject is `Unauthorized`
    pub fn execute_as(&self, caller: Option<&Principal>, cmd: Command) -> Result<Output> {
        let caller = match caller {
            Some(caller) if !caller.subject.trim().is_empty() => caller,
            _ => return Err(Error::Unauthorized),
        };
        debug!(command = cmd.name(), caller = %caller.subject, admin = caller.is_admin(), "execute");

        let result = self.dispatch(caller, cmd);
        if let Err(e) = &result {
            if e.http_status() >= 500 {
                warn!(code = e.code(), error = %e, "command failed");
            }
        }
        result
    }

    fn dispatch(&self, caller: &Principal, cmd: Command) -> Result<Output> {
        let p = &self.primitives;
        match cmd {
            Command::SaveDraft { applicant, draft } => {
                let key = owned_key(caller, &applicant)?;
                application::save_draft(p, &key, draft)
            }
            Command::AttachDocument {
                applicant,
                doc_type,
                filename,
                location,
            } => {
                let key = owned_key(caller, &applicant)?;
                application::attach_document(p, &key, &doc_type, &filename, location.as_deref())
            }
            Command::Submit { applicant, draft } => {
                let key = owned_key(caller, &applicant)?;
                application::submit(p, &key, draft)
            }
            Command::Status { applicant } => {
                let key = owned_key(caller, &applicant)?;
                application::status(p, &key)
            }
            Command::GetApplication { applicant } => {
                let key = owned_key(caller, &applicant)?;
                application::get_application(p, &key)
            }
            Command::GetAid { applicant } => {
                let key = owned_key(caller, &applicant)?;
                aid::get_aid(p, &key)
            }
            Command::ListApplications { status } => {
                require_admin(caller)?;
                admin::list_applications(p, status.as_deref())
            }
            Command::Counts => {
                require_admin(caller)?;
                admin::counts(p)
            }
            Command::Decide {
                applicant,
                decision,
                comments,
            } => {
                require_admin(caller)?;
                let key = bridge::to_key(&applicant)?;
                admin::decide(p, caller, &key, &decision, comments.as_deref())
            }
            Command::AddNote { applicant, content } => {
                require_admin(caller)?;
                let key = bridge::to_key(&applicant)?;
                admin::add_note(p, caller, &key, &content)
            }
            Command::SetAid {
                applicant,
                scholarship,
                grant,
            } => {
                require_admin(caller)?;
                let key = bridge::to_key(&applicant)?;
                aid::set_aid(p, &key, scholarship, grant)
            }
            Command::Roster => {
                require_admin(caller)?;
                aid::roster(p)
            }
            Command::Reconcile => {
                require_admin(caller)?;
                admin::reconcile(p)
            }
        }
    }
}

fn require_admin(caller: &Principal) -> Result<()> {
    convert_result(caller.require_admin())
}

fn owned_key(caller: &Principal, applicant: &str) -> Result<admissions_core::ApplicantKey> {
    let key = bridge::to_key(applicant)?;
    convert_result(caller.require_owner_or_admin(&key))?;
    Ok(key)
}
