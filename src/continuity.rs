//! Orientation continuity rules
//!
//! A motion's end orientation is a function of its type, turn count,
//! rotation direction, and start orientation. The engine consumes the
//! rules through a trait so hosts can substitute their own propagation
//! model; the standard rules live here.

use crate::grid::handpath_direction;
use crate::models::{Beat, MotionRecord, MotionType, Orientation, RotationDirection, Track};

/// Orientation propagation as the engine consumes it
///
/// Only `motion_end_orientation` is primitive; the beat-level updates
/// are shared plumbing with default implementations.
pub trait OrientationContinuity {
    /// End orientation of a single motion, given its start orientation
    fn motion_end_orientation(&self, motion: &MotionRecord) -> Orientation;

    /// Carry the previous beat's end orientations into this beat's starts
    fn update_start_orientations(&self, beat: &mut Beat, previous: &Beat) {
        if let (Some(motions), Some(previous_motions)) =
            (beat.motions.as_mut(), previous.motions.as_ref())
        {
            for track in Track::BOTH {
                motions.get_mut(track).start_orientation =
                    previous_motions.get(track).end_orientation;
            }
        }
    }

    /// Recompute each track's end orientation from its own motion
    fn update_end_orientations(&self, beat: &mut Beat) {
        if let Some(motions) = beat.motions.as_mut() {
            for track in Track::BOTH {
                let motion = motions.get_mut(track);
                motion.end_orientation = self.motion_end_orientation(motion);
            }
        }
    }
}

/// The standard continuity rules
///
/// Whole turns stay inside the start orientation's family and flip by
/// turn parity. Half turns cross between the radial and rotational
/// families; which side they land on depends on the rotation sense and
/// the motion character. Floats cross the same way, keyed by the hand
/// path instead of a rotation direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardContinuity;

impl OrientationContinuity for StandardContinuity {
    fn motion_end_orientation(&self, motion: &MotionRecord) -> Orientation {
        match motion.turns.halves() {
            Some(halves) if halves % 2 == 0 => {
                whole_turn_orientation(motion.motion_type, halves / 2, motion.start_orientation)
            }
            Some(_) => crossed_orientation(
                motion.start_orientation,
                matches!(motion.rotation_direction, RotationDirection::Clockwise),
                is_pro_like(motion.motion_type),
            ),
            None => float_end_orientation(motion),
        }
    }
}

fn is_pro_like(motion_type: MotionType) -> bool {
    matches!(
        motion_type,
        MotionType::Pro | MotionType::Static | MotionType::Float
    )
}

/// Whole-turn rule: pro-like motions flip on odd turn counts, anti-like
/// motions flip on even ones (a zero-turn anti still reverses the prop)
fn whole_turn_orientation(motion_type: MotionType, wholes: u8, start: Orientation) -> Orientation {
    let flips = if is_pro_like(motion_type) {
        wholes % 2 == 1
    } else {
        wholes % 2 == 0
    };
    if flips {
        start.switched()
    } else {
        start
    }
}

/// Half-turn family crossing: radial starts land rotational and back
fn crossed_orientation(start: Orientation, clockwise: bool, pro_like: bool) -> Orientation {
    let same_sense = clockwise == pro_like;
    match start {
        Orientation::In => {
            if same_sense {
                Orientation::Clock
            } else {
                Orientation::Counter
            }
        }
        Orientation::Out => {
            if same_sense {
                Orientation::Counter
            } else {
                Orientation::Clock
            }
        }
        Orientation::Clock => {
            if same_sense {
                Orientation::Out
            } else {
                Orientation::In
            }
        }
        Orientation::Counter => {
            if same_sense {
                Orientation::In
            } else {
                Orientation::Out
            }
        }
    }
}

/// Floats carry no turn count; the hand path supplies the sense instead.
/// A float across the grid (or in place) has no arc and keeps its
/// orientation.
fn float_end_orientation(motion: &MotionRecord) -> Orientation {
    match handpath_direction(motion.start_location, motion.end_location) {
        RotationDirection::None => motion.start_orientation,
        direction => crossed_orientation(
            motion.start_orientation,
            matches!(direction, RotationDirection::Clockwise),
            false,
        ),
    }
}
