//! Error types for CAP transformation and detection

use thiserror::Error;

use crate::caps::CapType;
use crate::models::Position;

/// Errors produced while extending, detecting, or mapping sequences
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapError {
    /// The lead-in's end position does not close the transform's relation
    #[error(
        "cannot apply {cap_type}: end position must be {expected} ({relation} of {start}), found {found}"
    )]
    InvalidPositionPair {
        cap_type: CapType,
        start: Position,
        expected: Position,
        found: Position,
        relation: &'static str,
    },

    /// A beat the transform needs is missing a required field
    #[error("beat {beat} is missing {missing}")]
    IncompleteBeatData { beat: u32, missing: &'static str },

    /// Index folding produced a source outside the lead-in
    ///
    /// The field is `source_beat`, not `source`: thiserror treats a
    /// field named `source` as the error's cause.
    #[error("beat {target} folds to source beat {source_beat}, outside the lead-in 1..={length}")]
    IndexMapping {
        target: u32,
        source_beat: i64,
        length: u32,
    },

    /// A grid lookup had no entry for its input
    #[error("no grid entry for {lookup}")]
    UnmappedValue { lookup: String },

    /// The letter provider has no complement for a letter
    #[error("letter '{letter}' has no {lookup} complement")]
    UnknownLetterComplement { letter: String, lookup: &'static str },

    /// A sequence reproduces under more than one registered transform
    #[error("sequence matches multiple transforms: {first} and {second}")]
    AmbiguousTransform { first: CapType, second: CapType },
}
