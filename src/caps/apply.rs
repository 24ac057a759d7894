//! Per-beat application of a composite transform
//!
//! Shared by generation (building the second half) and detection
//! (re-deriving it for comparison), so the two can never disagree about
//! what a transform does to a beat.

use crate::caps::registry::CapTransform;
use crate::continuity::OrientationContinuity;
use crate::errors::CapError;
use crate::letters::LetterComplements;
use crate::models::{Beat, MotionPair, MotionRecord};

/// Derive the beat a transform generates from `source`, chained onto
/// `previous` (the beat immediately before the target slot)
pub(crate) fn derive_beat<L: LetterComplements, C: OrientationContinuity>(
    transform: &CapTransform,
    letters: &L,
    continuity: &C,
    source: &Beat,
    previous: &Beat,
    target_index: u32,
) -> Result<Beat, CapError> {
    let source_motions = source
        .motions
        .as_ref()
        .ok_or(CapError::IncompleteBeatData {
            beat: source.index,
            missing: "motion records",
        })?;
    let source_letter = source
        .letter
        .as_deref()
        .ok_or(CapError::IncompleteBeatData {
            beat: source.index,
            missing: "a letter",
        })?;
    let previous_motions = previous
        .motions
        .as_ref()
        .ok_or(CapError::IncompleteBeatData {
            beat: previous.index,
            missing: "motion records",
        })?;

    // Track assignment first: after a swap the blue hand performs the
    // source's red motion and vice versa.
    let assigned = if transform.swaps_tracks {
        source_motions.swapped()
    } else {
        source_motions.clone()
    };

    let motions = MotionPair::new(
        derive_motion(transform, &assigned.blue, &previous_motions.blue),
        derive_motion(transform, &assigned.red, &previous_motions.red),
    );

    let letter = transform.derived_letter(letters, source_letter)?;

    let mut beat = Beat {
        index: target_index,
        letter: Some(letter),
        start_position: previous.end_position,
        end_position: transform.map_position(source.end_position)?,
        motions: Some(motions),
    };
    continuity.update_start_orientations(&mut beat, previous);
    continuity.update_end_orientations(&mut beat);
    Ok(beat)
}

/// One track's derived record: locations chain from the previous beat,
/// the end location goes through the composed location map, and the
/// motion fields take their per-primitive complements
fn derive_motion(
    transform: &CapTransform,
    source: &MotionRecord,
    previous: &MotionRecord,
) -> MotionRecord {
    let mut motion = source.clone();
    motion.start_location = previous.end_location;
    motion.end_location = transform.map_location(source.end_location);
    if transform.inverts_motion {
        motion.motion_type = motion.motion_type.inverted();
    }
    if transform.flips_rotation {
        motion.rotation_direction = motion.rotation_direction.inverted();
    }
    motion
}
