//! JSON decoder.

use crate::error::{CodecError, CodecResult};
use crate::map::Map;
use crate::value::Value;

/// Decode UTF-8 JSON bytes into a value.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON.
pub fn from_json(bytes: &[u8]) -> CodecResult<Value> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::decoding_failed(e.to_string()))
}

/// Decode a document, which must be a JSON object at the top level.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON or the top-level value
/// is not an object.
pub fn decode_document(bytes: &[u8]) -> CodecResult<Map> {
    match from_json(bytes)? {
        Value::Map(map) => Ok(map),
        other => Err(CodecError::invalid_structure(format!(
            "document root must be an object, found {}",
            other.type_name()
        ))),
    }
}
