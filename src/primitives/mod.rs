//! Primitive wrappers for the unified API.
//!
//! Each wrapper takes applicant keys as plain strings, validates them, and
//! returns the facade [`Error`](crate::Error).

mod aid;
mod applications;
mod review;

pub use aid::Aid;
pub use applications::Applications;
pub use review::Review;
