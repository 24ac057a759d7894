//! Motion records: what each track does during a single beat

use serde::{Deserialize, Serialize};

use crate::models::elements::{
    Location, MotionType, Orientation, RotationDirection, Track, Turns,
};

/// Full description of one track's motion across a beat
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MotionRecord {
    /// Motion character (pro, anti, float, dash, static)
    pub motion_type: MotionType,

    /// Prop rotation direction during the motion
    pub rotation_direction: RotationDirection,

    /// Where the track starts the beat
    pub start_location: Location,

    /// Where the track ends the beat
    pub end_location: Location,

    /// Turn count, or the float marker
    pub turns: Turns,

    /// Prop orientation at the start of the beat
    pub start_orientation: Orientation,

    /// Prop orientation at the end of the beat
    pub end_orientation: Orientation,
}

impl MotionRecord {
    /// Create a motion record with default IN orientations
    ///
    /// Orientations are normally filled in afterwards by the continuity
    /// rules, so the constructor only takes the authored fields.
    pub fn new(
        motion_type: MotionType,
        rotation_direction: RotationDirection,
        start_location: Location,
        end_location: Location,
        turns: Turns,
    ) -> Self {
        MotionRecord {
            motion_type,
            rotation_direction,
            start_location,
            end_location,
            turns,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
        }
    }

    /// Same record with both orientations set explicitly
    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }

    /// Check if the hand stays in place for the whole beat
    pub fn is_stationary(&self) -> bool {
        self.start_location == self.end_location
    }
}

/// Both tracks' motions for one beat, in (blue, red) order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MotionPair {
    pub blue: MotionRecord,
    pub red: MotionRecord,
}

impl MotionPair {
    pub fn new(blue: MotionRecord, red: MotionRecord) -> Self {
        MotionPair { blue, red }
    }

    /// Motion record for the given track
    pub fn get(&self, track: Track) -> &MotionRecord {
        match track {
            Track::Blue => &self.blue,
            Track::Red => &self.red,
        }
    }

    /// Mutable motion record for the given track
    pub fn get_mut(&mut self, track: Track) -> &mut MotionRecord {
        match track {
            Track::Blue => &mut self.blue,
            Track::Red => &mut self.red,
        }
    }

    /// The same pair with the two tracks' records exchanged
    pub fn swapped(&self) -> MotionPair {
        MotionPair {
            blue: self.red.clone(),
            red: self.blue.clone(),
        }
    }
}
