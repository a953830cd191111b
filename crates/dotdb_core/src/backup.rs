//! Store backup and restore.
//!
//! A backup is a plain copy of the live snapshot file: any DotDB store can
//! open it directly, and `restore` reads it back into a live store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dotdb_core::Store;
//!
//! let store = Store::open("data/bot")?;
//! let saved = store.backup("backups/bot-monday")?; // backups/bot-monday.json
//!
//! store.delete_all()?;
//! store.restore(&saved)?;
//! # Ok::<(), dotdb_core::CoreError>(())
//! ```

use crate::error::{CoreError, CoreResult};
use crate::store::Store;
use dotdb_storage::{normalize_path, FileBackend, SnapshotBackend, StorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

impl Store {
    /// Writes the current snapshot to `dest`. Returns the normalized path
    /// that was written.
    ///
    /// The snapshot bytes are copied as stored. Parent directories of
    /// `dest` are created, and an existing file there is overwritten.
    /// Backing up an empty store succeeds with a warning.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if `dest` is empty or names a directory
    /// - `SamePath` if `dest` is the live store's own file
    /// - `CorruptStore` if the live snapshot does not decode
    pub fn backup(&self, dest: impl AsRef<Path>) -> CoreResult<PathBuf> {
        let dest = normalize_location(dest.as_ref())?;
        self.ensure_distinct(&dest)?;

        let backend = self.lock_backend();
        let bytes = backend.read_snapshot()?;
        let doc = Self::decode(&bytes)?;
        if doc.is_empty() {
            warn!(dest = %dest.display(), "backing up an empty store");
        }

        let mut target = FileBackend::open_with_create_dirs(&dest)?;
        target.write_snapshot(&bytes)?;

        info!(dest = %dest.display(), keys = doc.len(), "backup complete");
        Ok(dest)
    }

    /// Replaces the live document with the one stored at `src`. Returns the
    /// number of top-level keys restored.
    ///
    /// The restored document is written in this store's configured format.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if `src` is empty, names a directory, or does not
    ///   exist
    /// - `SamePath` if `src` is the live store's own file
    /// - `CorruptStore` if `src` does not hold a JSON object; the live
    ///   store is left untouched
    pub fn restore(&self, src: impl AsRef<Path>) -> CoreResult<usize> {
        let src = normalize_location(src.as_ref())?;
        self.ensure_distinct(&src)?;

        let bytes = fs::read(&src).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                CoreError::invalid_path(format!("{} does not exist", src.display()))
            }
            _ => CoreError::Io(e),
        })?;
        let doc = Self::decode(&bytes)?;
        let encoded = self.encode(&doc)?;

        self.lock_backend().write_snapshot(&encoded)?;

        info!(src = %src.display(), keys = doc.len(), "restore complete");
        Ok(doc.len())
    }

    fn ensure_distinct(&self, other: &Path) -> CoreResult<()> {
        match self.path() {
            Some(live) if same_location(live, other) => Err(CoreError::SamePath {
                path: other.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }
}

fn normalize_location(path: &Path) -> CoreResult<PathBuf> {
    normalize_path(path).map_err(|e| match e {
        StorageError::InvalidPath(message) => CoreError::invalid_path(message),
        other => other.into(),
    })
}

/// Compares literally, then by canonical path when both files exist.
fn same_location(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
