//! In-memory snapshot backend for testing.

use crate::backend::{SnapshotBackend, EMPTY_SNAPSHOT};
use crate::error::StorageResult;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// An in-memory snapshot backend.
///
/// This backend keeps the snapshot in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// Clones share the same snapshot, so a test can keep a handle and inspect
/// or overwrite what a store has written.
///
/// # Example
///
/// ```rust
/// use dotdb_storage::{InMemoryBackend, SnapshotBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let observer = backend.clone();
/// backend.write_snapshot(br#"{"a":1}"#).unwrap();
/// assert_eq!(observer.data(), br#"{"a":1}"#);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    data: Arc<RwLock<Vec<u8>>>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::with_data(EMPTY_SNAPSHOT.to_vec())
    }
}

impl InMemoryBackend {
    /// Creates a backend holding an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with pre-existing snapshot bytes.
    ///
    /// Useful for testing corrupt or hand-written snapshots.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Returns a copy of the current snapshot bytes.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Overwrites the snapshot, bypassing any store holding this backend.
    pub fn replace(&self, data: Vec<u8>) {
        *self.data.write() = data;
    }
}

impl SnapshotBackend for InMemoryBackend {
    fn read_snapshot(&self) -> StorageResult<Vec<u8>> {
        Ok(self.data())
    }

    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()> {
        let mut current = self.data.write();
        current.clear();
        current.extend_from_slice(data);
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}
