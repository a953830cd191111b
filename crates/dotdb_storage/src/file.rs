//! File-based snapshot backend for persistent storage.

use crate::backend::{SnapshotBackend, EMPTY_SNAPSHOT};
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension appended to store paths that have none.
pub const EXTENSION: &str = "json";

/// Normalizes a store location.
///
/// Backslash separators become `/`, and [`EXTENSION`] is appended when the
/// file name has no extension. Any existing extension is kept, so `bot.v2`
/// stays `bot.v2` rather than becoming `bot.v2.json`.
///
/// # Errors
///
/// Returns [`StorageError::InvalidPath`] for an empty path or one that
/// names a directory rather than a file.
pub fn normalize_path(path: &Path) -> StorageResult<PathBuf> {
    let raw = path.to_string_lossy();
    if raw.trim().is_empty() {
        return Err(StorageError::InvalidPath("path is empty".to_string()));
    }
    if raw.ends_with('/') || raw.ends_with('\\') {
        return Err(StorageError::InvalidPath(format!(
            "'{raw}' names a directory"
        )));
    }

    let mut normalized = PathBuf::from(raw.replace('\\', "/"));
    if normalized.file_name().is_none() {
        return Err(StorageError::InvalidPath(format!("'{raw}' has no file name")));
    }
    if normalized.extension().is_none() {
        normalized.set_extension(EXTENSION);
    }
    Ok(normalized)
}

/// A file-based snapshot backend.
///
/// The whole snapshot lives in one file. Data survives process restarts.
///
/// # Durability
///
/// `write_snapshot` writes to a sibling `.tmp` file, syncs it, then renames
/// it over the live file, so readers see either the old or the new snapshot.
///
/// # Example
///
/// ```no_run
/// use dotdb_storage::{FileBackend, SnapshotBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::open_with_create_dirs(Path::new("data/store")).unwrap();
/// assert_eq!(backend.path(), Path::new("data/store.json"));
/// backend.write_snapshot(br#"{"ready":true}"#).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Opens the snapshot file at `path`, creating it with an empty
    /// document if it does not exist.
    ///
    /// The path is normalized first (see [`normalize_path`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid, the parent directory is
    /// missing, or the file cannot be created.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let path = normalize_path(path)?;

        if !path.exists() {
            write_atomic(&path, EMPTY_SNAPSHOT)?;
            debug!(path = %path.display(), "initialized empty snapshot");
        }

        Ok(Self { path })
    }

    /// Opens or creates the snapshot file, creating parent directories if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be opened.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        let normalized = normalize_path(path)?;
        if let Some(parent) = normalized.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::open(&normalized)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for FileBackend {
    fn read_snapshot(&self) -> StorageResult<Vec<u8>> {
        fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound {
                path: self.path.clone(),
            },
            _ => StorageError::Io(e),
        })
    }

    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()> {
        write_atomic(&self.path, data)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Write-then-rename so a crash never leaves a half-written snapshot.
fn write_atomic(path: &Path, data: &[u8]) -> StorageResult<()> {
    let temp_path = temp_path(path);

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
