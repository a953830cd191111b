//! # DotDB Core
//!
//! Core store engine for DotDB.
//!
//! This crate provides:
//! - [`KeyPath`] parsing of dot-separated keys (`player.stats.level`)
//! - Tree navigation over the stored document ([`navigator`])
//! - Flattening of nested documents into leaf entries ([`flatten`])
//! - The [`Store`] handle with typed get/set, array and arithmetic
//!   operations, plus backup and restore
//!
//! ## Example
//!
//! ```rust
//! use dotdb_core::{Store, Value};
//!
//! let store = Store::open_in_memory();
//! store.set("player.level", 15).unwrap();
//! store.set("player.inventory", vec!["Sword"]).unwrap();
//! store.push("player.inventory", ["Pick"]).unwrap();
//!
//! let leaves = store.all(true).unwrap();
//! assert_eq!(leaves.len(), 2);
//! assert_eq!(store.get("player.level").unwrap(), Some(Value::from(15)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backup;
mod config;
mod error;
pub mod flatten;
mod key;
pub mod navigator;
mod store;
mod types;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use key::KeyPath;
pub use store::{Arithmetic, Store};
pub use types::Entry;

pub use dotdb_codec::{Map, Value};

/// Crate version, as built.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
