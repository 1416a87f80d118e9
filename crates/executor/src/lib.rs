//! Command execution layer for the admissions store
//!
//! Every operation a caller can request is a [`Command`]; the
//! [`Executor`] checks the caller's [`Principal`] against it, dispatches
//! to a handler, and returns an [`Output`]. The CLI and any future
//! service front end speak only these enums.
//!
//! ```ignore
//! use admissions_executor::{Command, Executor, Output};
//! use admissions_security::Principal;
//!
//! let executor = Executor::new(db);
//! let admin = Principal::admin("registrar");
//! let out = executor.execute(&admin, Command::ListApplications { status: None })?;
//! ```
//!
//! [`Principal`]: admissions_security::Principal

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bridge;
mod command;
mod error;
mod executor;
mod handlers;
mod output;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::{Output, StatusReport};
