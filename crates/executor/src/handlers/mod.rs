//! Command handlers
//!
//! One function per command. Handlers assume the executor already checked
//! the caller's role; ownership checks that depend on the parsed key happen
//! in the executor too.

pub mod admin;
pub mod aid;
pub mod application;
