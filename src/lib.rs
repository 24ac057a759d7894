//! CAP Engine WASM Module
//!
//! This is the main WASM module for the two-track sequence CAP engine.
//! It provides generation of circular alternating patterns, CAP type
//! detection, and orientation cycle detection.

pub mod models;
pub mod grid;
pub mod letters;
pub mod continuity;
pub mod errors;
pub mod caps;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::elements::*;
pub use models::motion::*;
pub use models::positions::{Position, Ring};
pub use caps::{CapEngine, CapTransform, CapType, CycleCount};
pub use continuity::{OrientationContinuity, StandardContinuity};
pub use errors::CapError;
pub use letters::{LetterComplements, StandardLetters};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("CAP engine WASM module initialized");
}
