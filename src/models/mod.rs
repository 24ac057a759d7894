//! Models module for the CAP engine
//!
//! This module contains the data models used in the beat-based
//! two-track sequence system.

pub mod core;
pub mod elements;
pub mod motion;
pub mod positions;

// Re-export commonly used types
pub use self::core::*;
pub use elements::*;
pub use motion::*;
pub use positions::{Position, Ring};
