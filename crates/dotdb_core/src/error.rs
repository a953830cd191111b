//! Error types for DotDB core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in DotDB core operations.
///
/// Every precondition failure is returned before the store is written, so
/// a failed call leaves the stored document unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] dotdb_storage::StorageError),

    /// JSON codec error while encoding.
    #[error("codec error: {0}")]
    Codec(#[from] dotdb_codec::CodecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The key is empty or otherwise unusable as a path.
    #[error("invalid key: {message}")]
    InvalidKey {
        /// Why the key was rejected.
        message: String,
    },

    /// The value cannot be stored or read back as requested.
    #[error("invalid value: {message}")]
    InvalidValue {
        /// Why the value was rejected.
        message: String,
    },

    /// An array operation targeted something that is not an array.
    #[error("value at '{key}' is not an array (found {found})")]
    NotAnArray {
        /// The key that was addressed.
        key: String,
        /// What was found there.
        found: &'static str,
    },

    /// An arithmetic operation targeted something that is not a number.
    #[error("value at '{key}' is not a number (found {found})")]
    NotANumber {
        /// The key that was addressed.
        key: String,
        /// What was found there.
        found: &'static str,
    },

    /// An arithmetic operand, or its result, is not finite.
    #[error("invalid operand: {message}")]
    InvalidOperand {
        /// Description of the operand problem.
        message: String,
    },

    /// Division by zero.
    #[error("cannot divide '{key}' by zero")]
    DivideByZero {
        /// The key that was addressed.
        key: String,
    },

    /// A backup or restore location is unusable.
    #[error("invalid path: {message}")]
    InvalidPath {
        /// Why the path was rejected.
        message: String,
    },

    /// A backup or restore location is the live store itself.
    #[error("path {} is the live store", path.display())]
    SamePath {
        /// The offending location.
        path: PathBuf,
    },

    /// The stored snapshot is not a valid document.
    #[error("corrupt store: {message}")]
    CorruptStore {
        /// Description of the corruption.
        message: String,
    },
}

/// Shown in error messages when nothing is stored at a key.
pub(crate) const NOTHING: &str = "nothing";

impl CoreError {
    /// Creates an invalid key error.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }

    /// Creates a not-an-array error.
    pub fn not_an_array(key: impl Into<String>, found: &'static str) -> Self {
        Self::NotAnArray {
            key: key.into(),
            found,
        }
    }

    /// Creates a not-a-number error.
    pub fn not_a_number(key: impl Into<String>, found: &'static str) -> Self {
        Self::NotANumber {
            key: key.into(),
            found,
        }
    }

    /// Creates an invalid operand error.
    pub fn invalid_operand(message: impl Into<String>) -> Self {
        Self::InvalidOperand {
            message: message.into(),
        }
    }

    /// Creates a divide-by-zero error.
    pub fn divide_by_zero(key: impl Into<String>) -> Self {
        Self::DivideByZero { key: key.into() }
    }

    /// Creates an invalid path error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Creates a corrupt store error.
    pub fn corrupt_store(message: impl Into<String>) -> Self {
        Self::CorruptStore {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        let err = CoreError::not_an_array("inv", "number");
        assert_eq!(err.to_string(), "value at 'inv' is not an array (found number)");

        let err = CoreError::divide_by_zero("n");
        assert_eq!(err.to_string(), "cannot divide 'n' by zero");
    }

    #[test]
    fn storage_errors_convert() {
        let err: CoreError = dotdb_storage::StorageError::InvalidPath("x".into()).into();
        assert!(matches!(err, CoreError::Storage(_)));
    }
}
