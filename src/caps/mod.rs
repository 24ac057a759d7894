//! CAP transformation and generation engine
//!
//! A CAP (circular alternating pattern) is a sequence whose second half
//! derives from its first half under one of thirteen registered
//! transforms. This module owns the registry, the index folding, the
//! per-beat application, and the three engine operations: extend,
//! detect, and orientation-cycle detection.

mod apply;
mod detect;
mod extend;

pub mod cycle;
pub mod folding;
pub mod registry;

pub use cycle::CycleCount;
pub use registry::{CapTransform, CapType, REGISTRY};

use crate::continuity::{OrientationContinuity, StandardContinuity};
use crate::letters::{LetterComplements, StandardLetters};

/// The transformation engine
///
/// Pure functions over sequences plus two pluggable collaborators: the
/// letter complement provider and the orientation continuity rules. The
/// engine holds no mutable state, so one instance can serve any number
/// of calls.
pub struct CapEngine<L = StandardLetters, C = StandardContinuity> {
    letters: L,
    continuity: C,
}

impl CapEngine {
    /// Engine wired with the standard letter table and continuity rules
    pub fn standard() -> Self {
        CapEngine {
            letters: StandardLetters,
            continuity: StandardContinuity,
        }
    }
}

impl Default for CapEngine {
    fn default() -> Self {
        CapEngine::standard()
    }
}

impl<L: LetterComplements, C: OrientationContinuity> CapEngine<L, C> {
    /// Engine with custom collaborators
    pub fn new(letters: L, continuity: C) -> Self {
        CapEngine {
            letters,
            continuity,
        }
    }
}
