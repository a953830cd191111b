//! Common types for DotDB core.

use dotdb_codec::Value;
use serde::Serialize;

/// A key and the value stored under it, as returned by enumeration.
///
/// The key is either a top-level key or a full dot path, depending on how
/// the entries were produced. The value is an owned copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Top-level key or dot path.
    pub key: String,
    /// The stored value.
    pub value: Value,
}

impl Entry {
    /// Creates an entry.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
