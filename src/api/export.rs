//! Export operations for the WASM API
//!
//! This module provides functions to move sequences across the JSON
//! boundary: hosts persist sequences as JSON strings and hand them back
//! as live objects.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::Sequence;
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// JSON Export
// ============================================================================

/// Export a sequence to a pretty-printed JSON string
///
/// # Returns
/// JSON string suitable for persistence or inspection
#[wasm_bindgen(js_name = sequenceToJson)]
pub fn sequence_to_json(sequence_js: JsValue) -> Result<String, JsValue> {
    wasm_info!("sequenceToJson called");

    let sequence: Sequence = serde_wasm_bindgen::from_value(sequence_js).map_err(|e| {
        wasm_error!("sequenceToJson deserialization error: {}", e);
        JsValue::from_str(&format!("sequenceToJson deserialization error: {}", e))
    })?;

    let json = serde_json::to_string_pretty(&sequence).map_err(|e| {
        wasm_error!("JSON export error: {}", e);
        JsValue::from_str(&format!("JSON export error: {}", e))
    })?;

    wasm_info!("  JSON generated: {} bytes", json.len());
    Ok(json)
}

// ============================================================================
// JSON Import
// ============================================================================

/// Parse a persisted JSON string back into a live sequence object
#[wasm_bindgen(js_name = parseSequenceJson)]
pub fn parse_sequence_json(json: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseSequenceJson called: {} bytes", json.len());

    let sequence: Sequence = serde_json::from_str(json).map_err(|e| {
        wasm_error!("JSON parse error: {}", e);
        JsValue::from_str(&format!("JSON parse error: {}", e))
    })?;

    wasm_log!("  Parsed sequence with {} beats", sequence.len());
    serialize(&sequence, "parseSequenceJson: serialize result")
}
