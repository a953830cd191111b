//! # DotDB Storage
//!
//! Snapshot storage backends for DotDB.
//!
//! This crate provides the lowest-level storage abstraction for DotDB.
//! Backends are **opaque byte stores** holding a single snapshot - they do
//! not interpret the data they store.
//!
//! ## Design Principles
//!
//! - A backend holds exactly one snapshot, read and replaced whole
//! - No knowledge of JSON or the document model
//! - Fresh locations start out holding the empty document `{}`
//! - Must be `Send + Sync`
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage in a single file
//!
//! ## Example
//!
//! ```rust
//! use dotdb_storage::{InMemoryBackend, SnapshotBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! assert_eq!(backend.read_snapshot().unwrap(), b"{}");
//! backend.write_snapshot(b"{\"k\":1}").unwrap();
//! assert_eq!(backend.read_snapshot().unwrap(), b"{\"k\":1}");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::{SnapshotBackend, EMPTY_SNAPSHOT};
pub use error::{StorageError, StorageResult};
pub use file::{normalize_path, FileBackend, EXTENSION};
pub use memory::InMemoryBackend;
