//! # DotDB Testkit
//!
//! Test utilities for DotDB.
//!
//! This crate provides:
//! - Test fixtures and store helpers
//! - Property-based test generators using proptest
//! - A model-checking harness that runs a store against a reference
//!   document
//!
//! ## Usage
//!
//! ```rust
//! use dotdb_testkit::prelude::*;
//!
//! with_temp_store(|store| {
//!     store.set("player.level", 15).unwrap();
//!     assert_eq!(store.add("player.level", 1.0).unwrap(), 16.0);
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
