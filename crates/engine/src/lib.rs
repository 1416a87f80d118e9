//! Database engine for the admissions store
//!
//! This crate owns the shared state every primitive works through:
//! - [`Database`]: blob store handle, Index write lock, access mode and
//!   lifecycle policy
//! - [`DatabaseBuilder`]: programmatic configuration
//! - [`Config`]: TOML file plus environment overrides

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod database;

pub use config::{Config, LifecycleConfig, StorageBackend, StorageConfig};
pub use database::{Database, DatabaseBuilder};
