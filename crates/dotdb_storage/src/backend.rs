//! Snapshot backend trait definition.

use crate::error::StorageResult;
use std::path::Path;

/// Serialized empty document, written to fresh locations.
pub const EMPTY_SNAPSHOT: &[u8] = b"{}";

/// A whole-snapshot storage backend for DotDB.
///
/// Backends are **opaque byte stores** holding exactly one snapshot. They
/// do not interpret the bytes; DotDB owns encoding and decoding.
///
/// # Invariants
///
/// - A freshly created backend holds [`EMPTY_SNAPSHOT`]
/// - `read_snapshot` returns exactly the bytes of the last `write_snapshot`
/// - `write_snapshot` replaces the previous snapshot entirely; a reader
///   never observes a partially written snapshot
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait SnapshotBackend: Send + Sync {
    /// Reads the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    fn read_snapshot(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the current snapshot with `data`.
    ///
    /// After this returns successfully the new snapshot is durable.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous snapshot is left
    /// in place.
    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Where the snapshot lives, or `None` for non-persistent backends.
    fn location(&self) -> Option<&Path>;
}
