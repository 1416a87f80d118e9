//! Configuration
//!
//! Loaded from a TOML file, then overridden by environment variables:
//!
//! ```toml
//! [storage]
//! backend = "filesystem"   # or "memory"
//! path = ".admissions"
//! fsync = true
//!
//! [lifecycle]
//! transition_policy = "permissive"   # or "forward_only"
//! require_documents = false
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `ADMISSIONS_DATA_DIR` | `storage.path` (and selects the filesystem backend) |
//! | `ADMISSIONS_FSYNC` | `storage.fsync` |
//! | `ADMISSIONS_POLICY` | `lifecycle.transition_policy` |
//!
//! Invalid override values are logged and ignored.

use admissions_core::{Error, Result, TransitionPolicy};
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable overriding the data directory
pub const ENV_DATA_DIR: &str = "ADMISSIONS_DATA_DIR";
/// Environment variable overriding fsync
pub const ENV_FSYNC: &str = "ADMISSIONS_FSYNC";
/// Environment variable overriding the transition policy
pub const ENV_POLICY: &str = "ADMISSIONS_POLICY";

/// Where blobs are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// In-memory, lost on drop
    Memory,
    /// One file per blob under `path`
    #[default]
    Filesystem,
}

/// `[storage]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend selection
    pub backend: StorageBackend,
    /// Root directory for the filesystem backend
    pub path: PathBuf,
    /// fsync every blob write
    pub fsync: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: StorageBackend::Filesystem,
            path: PathBuf::from(".admissions"),
            fsync: true,
        }
    }
}

/// `[lifecycle]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Which decisions may leave which statuses
    pub transition_policy: TransitionPolicy,
    /// Refuse submission until every required document is attached
    pub require_documents: bool,
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blob storage
    pub storage: StorageConfig,
    /// Lifecycle policy
    pub lifecycle: LifecycleConfig,
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::InvalidInput(format!("invalid config: {}", e)))
    }

    /// Load from `path` (defaults when the file is absent), then apply
    /// environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(path)
                    .map_err(|e| Error::storage(path.display().to_string(), e))?;
                info!(path = %path.display(), "loaded configuration");
                Self::from_toml_str(&text)?
            }
            Some(path) => {
                info!(path = %path.display(), "config file not found, using defaults");
                Config::default()
            }
            None => Config::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            info!(path = %dir, "{} set", ENV_DATA_DIR);
            self.storage.backend = StorageBackend::Filesystem;
            self.storage.path = PathBuf::from(dir);
        }
        if let Some(fsync) = parse_override::<bool>(&lookup, ENV_FSYNC) {
            self.storage.fsync = fsync;
        }
        if let Some(policy) = parse_override::<TransitionPolicy>(&lookup, ENV_POLICY) {
            self.lifecycle.transition_policy = policy;
        }
    }
}

fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, keeping configured value");
            None
        }
    }
}
