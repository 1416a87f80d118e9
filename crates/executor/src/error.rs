//! Executor error type
//!
//! Flattens the core error into the shape a front end reports: a canonical
//! code, an HTTP-equivalent status and a human-readable reason.

use admissions_core::Error as CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`Executor::execute`](crate::Executor::execute)
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "PascalCase")]
pub enum Error {
    /// Record, index entry or award missing
    #[error("not found: {entity}")]
    NotFound {
        /// What was missing
        entity: String,
    },

    /// Status change refused, or unknown status
    #[error("invalid transition: {reason}")]
    InvalidTransition {
        /// Why the change was refused
        reason: String,
    },

    /// Applicant key failed validation
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },

    /// Payload failed validation
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// No authenticated caller
    #[error("unauthorized")]
    Unauthorized,

    /// Caller lacks the required role or ownership
    #[error("forbidden: {reason}")]
    Forbidden {
        /// Why access was refused
        reason: String,
    },

    /// Database opened read-only
    #[error("database is read-only")]
    ReadOnly,

    /// Blob store failure
    #[error("storage error: {reason}")]
    Storage {
        /// Underlying failure
        reason: String,
    },

    /// Stored bytes could not be decoded
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying failure
        reason: String,
    },

    /// Bug or invariant violation
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NotFound",
            Error::InvalidTransition { .. } => "InvalidTransition",
            Error::InvalidKey { .. } => "InvalidKey",
            Error::InvalidInput { .. } => "InvalidInput",
            Error::Unauthorized => "Unauthorized",
            Error::Forbidden { .. } => "Forbidden",
            Error::ReadOnly => "ReadOnly",
            Error::Storage { .. } => "Storage",
            Error::Serialization { .. } => "Serialization",
            Error::Internal { .. } => "Internal",
        }
    }

    /// HTTP-equivalent status code
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::InvalidTransition { .. }
            | Error::InvalidKey { .. }
            | Error::InvalidInput { .. } => 400,
            Error::Unauthorized => 401,
            Error::Forbidden { .. } | Error::ReadOnly => 403,
            Error::Storage { .. } | Error::Serialization { .. } | Error::Internal { .. } => 500,
        }
    }
}

impl From<CoreError> for Error {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotFound { entity } => Error::NotFound { entity },
            e @ (CoreError::InvalidTransition { .. } | CoreError::UnknownStatus(_)) => {
                Error::InvalidTransition {
                    reason: e.to_string(),
                }
            }
            e @ CoreError::InvalidKey { .. } => Error::InvalidKey {
                reason: e.to_string(),
            },
            CoreError::InvalidInput(reason) => Error::InvalidInput { reason },
            CoreError::Unauthorized => Error::Unauthorized,
            CoreError::Forbidden(reason) => Error::Forbidden { reason },
            CoreError::ReadOnly => Error::ReadOnly,
            e @ CoreError::Storage { .. } => Error::Storage {
                reason: e.to_string(),
            },
            CoreError::Serialization(reason) => Error::Serialization { reason },
            CoreError::Internal(reason) => Error::Internal { reason },
        }
    }
}

/// Convert a core result into an executor result
pub(crate) fn convert_result<T>(r: admissions_core::Result<T>) -> Result<T> {
    r.map_err(Error::from)
}
