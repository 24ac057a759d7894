//! Orientation cycle detection
//!
//! Repeating a sequence can land the props in a different orientation
//! than they started, in which case the pattern only closes after
//! several traversals. The detector re-propagates a running orientation
//! pair through the continuity rules and counts traversals until the
//! pair returns to its starting value.

use wasm_bindgen::prelude::*;

use crate::caps::CapEngine;
use crate::continuity::OrientationContinuity;
use crate::letters::LetterComplements;
use crate::models::{Orientation, Sequence};

/// How many traversals a sequence needs before orientations close
///
/// Family-preserving propagation can only produce periods 1, 2, or 4,
/// so the count saturates at four.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CycleCount {
    Single = 1,
    Double = 2,
    Quadruple = 4,
}

impl CycleCount {
    /// Numeric traversal count
    pub fn traversals(&self) -> u32 {
        *self as u32
    }
}

impl<L: LetterComplements, C: OrientationContinuity> CapEngine<L, C> {
    /// Count how many traversals the sequence needs to close its
    /// orientations
    ///
    /// Sequences with no motions anywhere close trivially in one pass.
    pub fn detect_cycle(&self, sequence: &Sequence) -> CycleCount {
        let start = match starting_orientations(sequence) {
            Some(pair) => pair,
            None => return CycleCount::Single,
        };

        let mut running = start;
        for traversal in 1..=4u32 {
            running = self.traverse(sequence, running);
            if running == start {
                return match traversal {
                    1 => CycleCount::Single,
                    2 => CycleCount::Double,
                    _ => CycleCount::Quadruple,
                };
            }
        }
        CycleCount::Quadruple
    }

    /// Propagate an orientation pair through one pass of the sequence
    fn traverse(
        &self,
        sequence: &Sequence,
        start: (Orientation, Orientation),
    ) -> (Orientation, Orientation) {
        let (mut blue, mut red) = start;
        for beat in &sequence.beats {
            if let Some(motions) = &beat.motions {
                let mut blue_probe = motions.blue.clone();
                blue_probe.start_orientation = blue;
                blue = self.continuity.motion_end_orientation(&blue_probe);

                let mut red_probe = motions.red.clone();
                red_probe.start_orientation = red;
                red = self.continuity.motion_end_orientation(&red_probe);
            }
        }
        (blue, red)
    }
}

/// Start orientations of the first beat that carries motions
fn starting_orientations(sequence: &Sequence) -> Option<(Orientation, Orientation)> {
    sequence.beats.iter().find_map(|beat| {
        beat.motions
            .as_ref()
            .map(|motions| (motions.blue.start_orientation, motions.red.start_orientation))
    })
}
