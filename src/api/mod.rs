//! CAP Engine WASM API
//!
//! This module provides the JavaScript-facing API for the CAP engine.
//! It includes shared utilities for serialization, validation, and error
//! handling, as well as the engine operations themselves.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `core`: Engine operations (extend, detect, cycle detection, registry inspection)
//! - `export`: JSON string import/export for persistence

pub mod helpers;
pub mod export;
pub mod core;

// Re-export all public functions to keep the API surface flat
pub use self::core::*;
pub use export::{parse_sequence_json, sequence_to_json};
