//! WASM API for the CAP engine
//!
//! This module provides the JavaScript-facing API for extending a
//! lead-in into a completed CAP, classifying existing sequences, and
//! inspecting the transform registry.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, engine_error, parse_cap_type, parse_position, serialize};
use crate::caps::{CapEngine, CapType};
use crate::errors::CapError;
use crate::models::Sequence;
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Generation
// ============================================================================

/// Extend a lead-in sequence into a completed CAP
///
/// # Parameters
/// - `sequence_js`: JavaScript sequence object (start-position beat plus beats)
/// - `cap_type`: registered type token, e.g. "strict_rotated"
///
/// # Returns
/// The completed sequence as a JavaScript object; the input is not modified
#[wasm_bindgen(js_name = extendSequence)]
pub fn extend_sequence(sequence_js: JsValue, cap_type: &str) -> Result<JsValue, JsValue> {
    wasm_info!("extendSequence called: cap_type={}", cap_type);

    let lead_in: Sequence = deserialize(sequence_js, "extendSequence: invalid sequence")?;
    let cap_type = parse_cap_type(cap_type)?;
    wasm_log!("  Lead-in has {} beats", lead_in.len());

    let extended = CapEngine::standard()
        .extend(&lead_in, cap_type)
        .map_err(engine_error)?;

    wasm_info!(
        "extendSequence completed: {} beats total",
        extended.len()
    );
    serialize(&extended, "extendSequence: serialize result")
}

// ============================================================================
// Classification
// ============================================================================

/// Detect which registered transform generated a sequence
///
/// # Returns
/// The type token as a string, or null when the sequence is not a CAP
#[wasm_bindgen(js_name = detectCapType)]
pub fn detect_cap_type(sequence_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("detectCapType called");

    let sequence: Sequence = deserialize(sequence_js, "detectCapType: invalid sequence")?;
    wasm_log!("  Sequence has {} beats", sequence.len());

    let detected = CapEngine::standard().detect(&sequence).map_err(|error| {
        if let CapError::AmbiguousTransform { first, second } = &error {
            wasm_warn!("detectCapType: sequence matches both {} and {}", first, second);
        }
        engine_error(error)
    })?;

    match detected {
        Some(cap_type) => {
            wasm_info!("detectCapType completed: {}", cap_type);
            Ok(JsValue::from_str(cap_type.token()))
        }
        None => {
            wasm_info!("detectCapType completed: not a CAP");
            Ok(JsValue::NULL)
        }
    }
}

/// Count how many traversals a sequence needs before its orientations
/// return to their starting values (1, 2, or 4)
#[wasm_bindgen(js_name = detectOrientationCycle)]
pub fn detect_orientation_cycle(sequence_js: JsValue) -> Result<u32, JsValue> {
    let sequence: Sequence =
        deserialize(sequence_js, "detectOrientationCycle: invalid sequence")?;
    let cycle = CapEngine::standard().detect_cycle(&sequence);
    wasm_info!("detectOrientationCycle completed: {} traversals", cycle.traversals());
    Ok(cycle.traversals())
}

// ============================================================================
// Registry Inspection
// ============================================================================

/// End position a lead-in starting at `start_position` must reach for
/// the given type to apply
#[wasm_bindgen(js_name = expectedEndPosition)]
pub fn expected_end_position(cap_type: &str, start_position: &str) -> Result<String, JsValue> {
    let cap_type = parse_cap_type(cap_type)?;
    let start = parse_position(start_position)?;
    let expected = cap_type
        .transform()
        .map_position(start)
        .map_err(engine_error)?;
    Ok(expected.token().to_string())
}

/// List all registered CAP type tokens in registry order
#[wasm_bindgen(js_name = listCapTypes)]
pub fn list_cap_types() -> Result<JsValue, JsValue> {
    let tokens: Vec<&str> = CapType::ALL.iter().map(|cap_type| cap_type.token()).collect();
    serialize(&tokens, "listCapTypes: serialize result")
}

/// Concatenated letters of a sequence's non-blank beats
#[wasm_bindgen(js_name = sequenceWord)]
pub fn sequence_word(sequence_js: JsValue) -> Result<String, JsValue> {
    let sequence: Sequence = deserialize(sequence_js, "sequenceWord: invalid sequence")?;
    Ok(sequence.word())
}
