//! Cross-crate integration test helpers.
//!
//! [`ModelHarness`] drives a real store and an in-memory reference
//! document side by side, so any divergence between the store engine and
//! the navigator shows up as a failed assertion.

use crate::fixtures::TestStore;
use crate::generators::StoreOperation;
use dotdb_codec::{Map, Value};
use dotdb_core::{navigator, KeyPath};

/// A test harness that checks a store against a reference model.
pub struct ModelHarness {
    /// The store under test.
    pub store: TestStore,
    /// What the store is expected to hold.
    model: Map,
}

impl ModelHarness {
    /// Creates a harness over an in-memory store.
    pub fn new() -> Self {
        Self::with_store(TestStore::memory())
    }

    /// Creates a harness over a file-based store.
    pub fn file() -> Self {
        Self::with_store(TestStore::file())
    }

    fn with_store(store: TestStore) -> Self {
        Self {
            store,
            model: Map::new(),
        }
    }

    /// Sets a value in both the store and the model.
    pub fn set(&mut self, key: &str, value: Value) {
        self.store
            .set(key, value.clone())
            .expect("Failed to set value");
        navigator::write(&mut self.model, &parse(key), Some(value));
    }

    /// Deletes a key and checks the store agrees on whether it existed.
    pub fn delete(&mut self, key: &str) {
        let removed = self.store.delete(key).expect("Failed to delete key");
        let expected = navigator::write(&mut self.model, &parse(key), None).is_some();
        assert_eq!(removed, expected, "Delete result mismatch for '{key}'");
    }

    /// Reads a key and checks it matches the model.
    pub fn get_and_verify(&self, key: &str) -> Option<Value> {
        let actual = self.store.get(key).expect("Failed to get value");
        let expected = navigator::read(&self.model, &parse(key));
        assert_eq!(actual.as_ref(), expected, "Value mismatch for '{key}'");
        actual
    }

    /// Applies one generated operation.
    pub fn apply(&mut self, op: &StoreOperation) {
        match op {
            StoreOperation::Set { key, value } => self.set(key, value.clone()),
            StoreOperation::Delete { key } => self.delete(key),
            StoreOperation::Get { key } => {
                self.get_and_verify(key);
            }
        }
    }

    /// Verifies the whole stored document equals the model.
    pub fn verify_all(&self) {
        let actual = self.store.snapshot().expect("Failed to read snapshot");
        assert_eq!(actual, self.model, "Document mismatch");
    }

    /// The reference document.
    pub fn model(&self) -> &Map {
        &self.model
    }
}

impl Default for ModelHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(key: &str) -> KeyPath {
    KeyPath::parse(key).expect("Harness keys must be valid")
}
