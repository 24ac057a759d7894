//! Index folding: which lead-in beat a generated beat derives from
//!
//! The generated half mirrors the lead-in one-to-one, so a completed
//! sequence is exactly twice the lead-in length and beat `half + k`
//! derives from beat `k`.

use crate::errors::CapError;

/// Length of the completed sequence for a lead-in of the given length
pub fn final_length(sequence_length: u32) -> u32 {
    sequence_length * 2
}

/// First half boundary: the last beat number that belongs to the lead-in
pub fn half_length(sequence_length: u32) -> u32 {
    final_length(sequence_length) / 2
}

/// Lead-in beat number a generated beat derives from
///
/// Valid targets are `half + 1 ..= final`; anything else folds outside
/// the lead-in and errors.
pub fn source_beat(target: u32, sequence_length: u32) -> Result<u32, CapError> {
    let half = half_length(sequence_length);
    let source = target as i64 - half as i64;
    if source < 1 || source > sequence_length as i64 {
        return Err(CapError::IndexMapping {
            target,
            source_beat: source,
            length: sequence_length,
        });
    }
    Ok(source as u32)
}
