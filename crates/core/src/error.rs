//! Error types for the admissions core
//!
//! ## Error Codes (Canonical)
//!
//! | Code | HTTP | Description |
//! |------|------|-------------|
//! | NotFound | 404 | Record, index or aid entry missing |
//! | InvalidTransition | 400 | Disallowed status change |
//! | InvalidKey | 400 | Applicant key fails validation |
//! | InvalidInput | 400 | Payload fails validation |
//! | Unauthorized | 401 | No authenticated principal |
//! | Forbidden | 403 | Principal lacks the required role |
//! | ReadOnly | 403 | Database opened read-only |
//! | Storage | 500 | Blob store read or write failed |
//! | Serialization | 500 | Blob bytes could not be (de)serialized |
//! | Internal | 500 | Bug or invariant violation |

use crate::status::ApplicationStatus;
use thiserror::Error;

/// All errors produced by the admissions core and the layers above it.
#[derive(Debug, Error)]
pub enum Error {
    /// Entity not found (record, index entry, aid)
    #[error("not found: {entity}")]
    NotFound {
        /// Description of the missing entity
        entity: String,
    },

    /// Requested status change is not allowed
    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        /// Status before the attempted change
        from: ApplicationStatus,
        /// Requested status
        to: ApplicationStatus,
        /// Why the change was refused
        reason: String,
    },

    /// Status string that does not name any known status
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// Applicant key failed validation
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Reason the key is invalid
        reason: String,
    },

    /// Input payload failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Caller is not authenticated
    #[error("unauthorized")]
    Unauthorized,

    /// Caller lacks the required role
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Database was opened read-only
    #[error("database is read-only")]
    ReadOnly,

    /// Blob store failure
    #[error("storage error at {path}: {message}")]
    Storage {
        /// Blob path involved in the failure
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Serialization failure
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for admissions operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a not-found error for an entity description
    pub fn not_found(entity: impl Into<String>) -> Self {
        Error::NotFound {
            entity: entity.into(),
        }
    }

    /// Create a storage error for a blob path
    pub fn storage(path: impl Into<String>, message: impl ToString) -> Self {
        Error::Storage {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NotFound",
            Error::InvalidTransition { .. } | Error::UnknownStatus(_) => "InvalidTransition",
            Error::InvalidKey { .. } => "InvalidKey",
            Error::InvalidInput(_) => "InvalidInput",
            Error::Unauthorized => "Unauthorized",
            Error::Forbidden(_) => "Forbidden",
            Error::ReadOnly => "ReadOnly",
            Error::Storage { .. } => "Storage",
            Error::Serialization(_) => "Serialization",
            Error::Internal(_) => "Internal",
        }
    }

    /// HTTP-equivalent status code for surfacing to callers
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::InvalidTransition { .. }
            | Error::UnknownStatus(_)
            | Error::InvalidKey { .. }
            | Error::InvalidInput(_) => 400,
            Error::Unauthorized => 401,
            Error::Forbidden(_) | Error::ReadOnly => 403,
            Error::Storage { .. } | Error::Serialization(_) | Error::Internal(_) => 500,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is an invalid-transition error.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Error::InvalidTransition { .. } | Error::UnknownStatus(_)
        )
    }

    /// Check if retrying the whole operation may succeed.
    ///
    /// Only storage failures qualify; validation errors will fail again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Storage { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
