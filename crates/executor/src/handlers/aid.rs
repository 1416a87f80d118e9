//! Financial aid handlers

use std::sync::Arc;

use admissions_core::ApplicantKey;

use crate::bridge::Primitives;
use crate::error::convert_result;
use crate::{Output, Result};

/// Handle SetAid command.
pub fn set_aid(
    p: &Arc<Primitives>,
    key: &ApplicantKey,
    scholarship: f64,
    grant: f64,
) -> Result<Output> {
    let aid = convert_result(p.aid.set_aid(key, scholarship, grant))?;
    Ok(Output::Aid(Some(aid)))
}

/// Handle GetAid command.
pub fn get_aid(p: &Arc<Primitives>, key: &ApplicantKey) -> Result<Output> {
    Ok(Output::Aid(convert_result(p.aid.get_aid(key))?))
}

/// Handle Roster command.
pub fn roster(p: &Arc<Primitives>) -> Result<Output> {
    Ok(Output::Roster(convert_result(p.aid.roster())?))
}
