//! Access control for the admissions store.
//!
//! This crate provides:
//! - [`AccessMode`] and [`OpenOptions`]: how a database is opened
//! - [`Principal`] and [`Role`]: who is calling, as asserted by the identity
//!   provider. Application state never lives on the principal.

use admissions_core::{ApplicantKey, Error, Result};
use serde::{Deserialize, Serialize};

/// Controls whether the database allows writes or is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    #[default]
    ReadWrite,
    ReadOnly,
}

impl AccessMode {
    /// Fail with [`Error::ReadOnly`] unless writes are allowed
    pub fn check_write(&self) -> Result<()> {
        match self {
            AccessMode::ReadWrite => Ok(()),
            AccessMode::ReadOnly => Err(Error::ReadOnly),
        }
    }
}

/// Options for opening a database.
///
/// ```ignore
/// use admissions_security::{OpenOptions, AccessMode};
///
/// let opts = OpenOptions::new().access_mode(AccessMode::ReadOnly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    pub access_mode: AccessMode,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }
}

/// Role flag supplied by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Admin,
}

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable subject id from the identity provider
    pub subject: String,
    pub role: Role,
}

impl Principal {
    pub fn student(subject: impl Into<String>) -> Self {
        Principal {
            subject: subject.into(),
            role: Role::Student,
        }
    }

    pub fn admin(subject: impl Into<String>) -> Self {
        Principal {
            subject: subject.into(),
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require the admin role
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(Error::Forbidden(format!(
                "{} is not an administrator",
                self.subject
            )))
        }
    }

    /// Require the admin role or ownership of `key`
    pub fn require_owner_or_admin(&self, key: &ApplicantKey) -> Result<()> {
        if self.is_admin() || self.subject == key.as_str() {
            Ok(())
        } else {
            Err(Error::Forbidden(format!(
                "{} may not access the application of {}",
                self.subject, key
            )))
        }
    }
}
