//! JSON encoder.

use crate::error::{CodecError, CodecResult};
use crate::map::Map;
use crate::value::Value;
use serde::Serialize;

/// Output layout for encoded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// No whitespace between tokens.
    #[default]
    Compact,
    /// Human-readable, two-space indentation.
    Pretty,
}

impl Format {
    /// Picks [`Format::Pretty`] when `pretty` is true.
    #[must_use]
    pub const fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Format::Pretty
        } else {
            Format::Compact
        }
    }
}

/// Encode a value to UTF-8 JSON bytes.
///
/// Map entries are written in insertion order. Both formats decode to the
/// same value.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn to_json(value: &Value, format: Format) -> CodecResult<Vec<u8>> {
    encode(value, format)
}

/// Encode a document (a top-level object) to UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn encode_document(document: &Map, format: Format) -> CodecResult<Vec<u8>> {
    encode(document, format)
}

fn encode<T: Serialize + ?Sized>(value: &T, format: Format) -> CodecResult<Vec<u8>> {
    let result = match format {
        Format::Compact => serde_json::to_vec(value),
        Format::Pretty => serde_json::to_vec_pretty(value),
    };
    result.map_err(|e| CodecError::encoding_failed(e.to_string()))
}
