//! Blob storage layer for the admissions store
//!
//! This crate implements the blob/object storage capability that backs both
//! the Record Store and the Index:
//! - [`BlobStore`]: `get` / `put` / `delete` / `list` over slash-separated paths
//! - [`InMemoryBlobStore`]: DashMap-backed store for tests and ephemeral use
//! - [`FsBlobStore`]: one file per blob, atomic replace via rename
//! - [`paths`]: the canonical blob layout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blob;
pub mod fs;
pub mod memory;
pub mod paths;

pub use blob::{Blob, BlobStore, CONTENT_TYPE_JSON};
pub use fs::FsBlobStore;
pub use memory::InMemoryBlobStore;
