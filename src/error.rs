//! Unified error type for the admissions facade.
//!
//! Wraps the internal error taxonomy in a stable public enum.

use thiserror::Error;

/// All admissions errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Record, Index entry or award not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Status change refused (including unknown statuses)
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Applicant key failed validation
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No authenticated caller
    #[error("unauthorized")]
    Unauthorized,

    /// Caller lacks the required role
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Database was opened read-only
    #[error("database is read-only")]
    ReadOnly,

    /// Blob store failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for admissions operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Storage failures may succeed on retry; nothing else will.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an invalid-transition error.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Error::InvalidTransition(_))
    }
}

// Convert from internal core errors
impl From<admissions_core::Error> for Error {
    fn from(e: admissions_core::Error) -> Self {
        use admissions_core::Error as CoreError;
        match e {
            CoreError::NotFound { entity } => Error::NotFound(entity),
            CoreError::InvalidTransition { from, to, reason } => {
                Error::InvalidTransition(format!("{} -> {}: {}", from, to, reason))
            }
            CoreError::UnknownStatus(status) => {
                Error::InvalidTransition(format!("unknown status {}", status))
            }
            CoreError::InvalidKey { key, reason } => {
                Error::InvalidKey(format!("{:?}: {}", key, reason))
            }
            CoreError::InvalidInput(msg) => Error::InvalidInput(msg),
            CoreError::Unauthorized => Error::Unauthorized,
            CoreError::Forbidden(msg) => Error::Forbidden(msg),
            CoreError::ReadOnly => Error::ReadOnly,
            CoreError::Storage { path, message } => {
                Error::Storage(format!("{}: {}", path, message))
            }
            CoreError::Serialization(msg) => Error::Serialization(msg),
            CoreError::Internal(msg) => Error::Internal(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
