//! Error types for storage operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The snapshot file no longer exists.
    #[error("snapshot not found: {}", path.display())]
    NotFound {
        /// Location that was read.
        path: PathBuf,
    },

    /// The given location cannot hold a snapshot.
    #[error("invalid storage path: {0}")]
    InvalidPath(String),
}
