//! # DotDB Codec
//!
//! Document value type and JSON encoding for DotDB.
//!
//! This crate provides:
//! - [`Value`], the tagged tree every stored document is made of
//! - [`Map`], an insertion-ordered string-keyed mapping
//! - JSON encoding in compact or pretty [`Format`]
//!
//! ## Encoding Rules
//!
//! - Map entries keep insertion order
//! - Integral numbers are written without a fractional part
//! - Non-finite numbers are written as `null`
//! - A stored document is always an object at the top level
//!
//! ## Usage
//!
//! ```
//! use dotdb_codec::{decode_document, to_json, Format, Map, Value};
//!
//! let mut doc = Map::new();
//! doc.insert("level", Value::from(15));
//!
//! let bytes = to_json(&Value::Map(doc.clone()), Format::Compact).unwrap();
//! assert_eq!(bytes, br#"{"level":15}"#);
//!
//! let decoded = decode_document(&bytes).unwrap();
//! assert_eq!(decoded, doc);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod map;
mod value;

pub use decoder::{decode_document, from_json};
pub use encoder::{encode_document, to_json, Format};
pub use error::{CodecError, CodecResult};
pub use map::Map;
pub use value::Value;
