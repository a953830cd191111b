//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up test stores
//! and common test scenarios.

use dotdb_core::{Config, Store};
use std::path::PathBuf;
use tempfile::TempDir;

/// A test store with automatic cleanup.
pub struct TestStore {
    /// The store instance.
    pub store: Store,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Creates a new in-memory test store.
    pub fn memory() -> Self {
        Self {
            store: Store::open_in_memory(),
            _temp_dir: None,
        }
    }

    /// Creates a new file-based test store in a temporary directory.
    pub fn file() -> Self {
        Self::file_with_config(Config::default())
    }

    /// Creates a new file-based test store with custom configuration.
    pub fn file_with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Store::open_with_config(temp_dir.path().join("test"), config)
            .expect("Failed to open file store");

        Self {
            store,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the temporary directory if file-based, None if in-memory.
    pub fn dir(&self) -> Option<PathBuf> {
        self._temp_dir.as_ref().map(|d| d.path().to_path_buf())
    }
}

impl std::ops::Deref for TestStore {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test with a temporary in-memory store.
///
/// # Example
///
/// ```rust
/// use dotdb_testkit::with_temp_store;
///
/// with_temp_store(|store| {
///     store.set("greeting", "hello").unwrap();
///     assert!(store.has("greeting").unwrap());
/// });
/// ```
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store) -> R,
{
    let test_store = TestStore::memory();
    f(&test_store.store)
}

/// Runs a test with a temporary file-based store.
///
/// The closure also receives the path of the live snapshot file.
pub fn with_file_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store, &std::path::Path) -> R,
{
    let test_store = TestStore::file();
    let path = test_store
        .path()
        .expect("File store should have a path")
        .to_path_buf();
    f(&test_store.store, &path)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use serde_json::json;

    /// Creates a store holding the player profile used across the docs.
    ///
    /// ```text
    /// player.name       "Will"
    /// player.level      15
    /// player.inventory  ["Sword", "Pick"]
    /// player.balance    500
    /// ```
    pub fn player_store() -> TestStore {
        let test_store = TestStore::memory();
        test_store
            .set_serialized(
                "player",
                &json!({
                    "name": "Will",
                    "level": 15,
                    "inventory": ["Sword", "Pick"],
                    "balance": 500
                }),
            )
            .expect("Failed to seed player");
        test_store
    }

    /// Creates a store with `count` top-level counters `counter_0..`.
    pub fn populated_store(count: usize) -> TestStore {
        let test_store = TestStore::memory();
        for i in 0..count {
            test_store
                .set(&format!("counter_{i}"), i as u64)
                .expect("Failed to set counter");
        }
        test_store
    }
}
