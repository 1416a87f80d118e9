//! Identity and time types
//!
//! - [`ApplicantKey`]: stable, validated identifier of a student
//! - [`Timestamp`]: UTC instant used on records, notes and documents

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UTC timestamp used throughout the data model.
pub type Timestamp = DateTime<Utc>;

/// Maximum length of an applicant key in bytes.
///
/// Fits an RFC 5321 e-mail address and a single file name on common
/// filesystems (255 bytes).
pub const MAX_KEY_LEN: usize = 254;

/// Key reserved for the Index blob under `applications/`.
pub const RESERVED_INDEX_KEY: &str = "index";

/// Stable unique identifier for a student
///
/// The same key addresses the record in the Record Store and the summary in
/// the Index. Keys come from the identity provider (user id or e-mail), so
/// they are not guessable sequential ids.
///
/// A key is embedded directly in blob paths, so it must be a single path
/// segment:
/// - non-empty and at most [`MAX_KEY_LEN`] bytes
/// - no `/`, `\` or control characters
/// - no leading `.` (hidden and relative path components)
/// - not the reserved word `index`
///
/// # Examples
///
/// ```
/// use admissions_core::ApplicantKey;
///
/// let key = ApplicantKey::new("ada@example.edu").unwrap();
/// assert_eq!(key.as_str(), "ada@example.edu");
///
/// assert!(ApplicantKey::new("index").is_err());
/// assert!(ApplicantKey::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicantKey(String);

impl ApplicantKey {
    /// Validate and wrap a key
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(ApplicantKey(key))
    }

    fn validate(key: &str) -> Result<()> {
        let reason = if key.is_empty() {
            Some("key must not be empty")
        } else if key.len() > MAX_KEY_LEN {
            Some("key exceeds 254 bytes")
        } else if key.contains('/') || key.contains('\\') {
            Some("key must not contain path separators")
        } else if key.chars().any(char::is_control) {
            Some("key must not contain control characters")
        } else if key.starts_with('.') {
            Some("key must not start with '.'")
        } else if key == RESERVED_INDEX_KEY {
            Some("key is reserved")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidKey {
                key: key.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApplicantKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ApplicantKey::new(s)
    }
}

impl TryFrom<String> for ApplicantKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        ApplicantKey::new(value)
    }
}

impl From<ApplicantKey> for String {
    fn from(key: ApplicantKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ApplicantKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
