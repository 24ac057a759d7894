//! Core sequence structures
//!
//! This module defines the beat-based sequence model: a start-position
//! anchor followed by numbered beats, each carrying a letter
//! classification, a position span, and both tracks' motion records.

use serde::{Deserialize, Serialize};

use crate::models::motion::{MotionPair, MotionRecord};
use crate::models::positions::Position;
use crate::models::Track;

/// One numbered beat of a sequence
///
/// Beats are 1-indexed; beat 0 is the separate start-position anchor.
/// A beat with no letter and no motions is a blank placeholder.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Beat {
    /// 1-based beat number within the sequence
    pub index: u32,

    /// Letter classification of the combined motion, if assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,

    /// Grid position when the beat starts
    pub start_position: Position,

    /// Grid position when the beat ends
    pub end_position: Position,

    /// Both tracks' motion records, if assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motions: Option<MotionPair>,
}

impl Beat {
    /// Create a fully populated beat
    pub fn new(
        index: u32,
        letter: impl Into<String>,
        start_position: Position,
        end_position: Position,
        motions: MotionPair,
    ) -> Self {
        Beat {
            index,
            letter: Some(letter.into()),
            start_position,
            end_position,
            motions: Some(motions),
        }
    }

    /// Create a blank placeholder beat holding a position
    pub fn blank(index: u32, position: Position) -> Self {
        Beat {
            index,
            letter: None,
            start_position: position,
            end_position: position,
            motions: None,
        }
    }

    /// Check if this beat is a blank placeholder
    pub fn is_blank(&self) -> bool {
        self.letter.is_none() && self.motions.is_none()
    }

    /// Check if this beat carries both a letter and motion records
    pub fn is_complete(&self) -> bool {
        self.letter.is_some() && self.motions.is_some()
    }

    /// Motion record for one track, if motions are assigned
    pub fn motion(&self, track: Track) -> Option<&MotionRecord> {
        self.motions.as_ref().map(|pair| pair.get(track))
    }
}

/// The beat-0 anchor holding a sequence's opening position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StartPositionBeat {
    /// Position both tracks occupy before the first beat
    pub position: Position,
}

impl StartPositionBeat {
    pub fn new(position: Position) -> Self {
        StartPositionBeat { position }
    }
}

/// A complete sequence: the start-position anchor plus its beats
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sequence {
    /// Beat 0: where both tracks stand before the first beat
    pub start_position_beat: StartPositionBeat,

    /// Beats 1..N in order
    pub beats: Vec<Beat>,
}

impl Sequence {
    pub fn new(start_position_beat: StartPositionBeat, beats: Vec<Beat>) -> Self {
        Sequence {
            start_position_beat,
            beats,
        }
    }

    /// Build a sequence whose anchor is the first beat's start position
    pub fn from_beats(beats: Vec<Beat>) -> Self {
        let position = beats
            .first()
            .map(|beat| beat.start_position)
            .unwrap_or(Position::Alpha1);
        Sequence {
            start_position_beat: StartPositionBeat::new(position),
            beats,
        }
    }

    /// Number of beats (the anchor is not counted)
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Start position of the first beat
    pub fn start_position(&self) -> Option<Position> {
        self.beats.first().map(|beat| beat.start_position)
    }

    /// End position of the last beat
    pub fn end_position(&self) -> Option<Position> {
        self.beats.last().map(|beat| beat.end_position)
    }

    /// Concatenated letters of all non-blank beats
    pub fn word(&self) -> String {
        self.beats
            .iter()
            .filter_map(|beat| beat.letter.as_deref())
            .collect()
    }

    /// Check that positions and per-track locations chain across beats
    ///
    /// Each beat's start position must equal the previous beat's end
    /// position, and each track's start location must equal its previous
    /// end location. Blank beats are skipped.
    pub fn validate_continuity(&self) -> Result<(), String> {
        let mut previous: Option<&Beat> = None;
        for beat in self.beats.iter().filter(|beat| !beat.is_blank()) {
            if let Some(prior) = previous {
                if beat.start_position != prior.end_position {
                    return Err(format!(
                        "beat {} starts at {} but beat {} ended at {}",
                        beat.index, beat.start_position, prior.index, prior.end_position
                    ));
                }
                if let (Some(motions), Some(prior_motions)) = (&beat.motions, &prior.motions) {
                    for track in Track::BOTH {
                        let start = motions.get(track).start_location;
                        let end = prior_motions.get(track).end_location;
                        if start != end {
                            return Err(format!(
                                "beat {} {} track starts at {} but beat {} ended at {}",
                                beat.index, track, start, prior.index, end
                            ));
                        }
                    }
                }
            }
            previous = Some(beat);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::elements::{Location, MotionType, RotationDirection, Turns};

    fn pair(
        blue: (Location, Location),
        red: (Location, Location),
    ) -> MotionPair {
        MotionPair::new(
            MotionRecord::new(
                MotionType::Pro,
                RotationDirection::Clockwise,
                blue.0,
                blue.1,
                Turns::zero(),
            ),
            MotionRecord::new(
                MotionType::Anti,
                RotationDirection::CounterClockwise,
                red.0,
                red.1,
                Turns::zero(),
            ),
        )
    }

    #[test]
    fn test_word_skips_blank_beats() {
        let beats = vec![
            Beat::new(
                1,
                "A",
                Position::Alpha1,
                Position::Alpha2,
                pair(
                    (Location::South, Location::Southwest),
                    (Location::North, Location::Northeast),
                ),
            ),
            Beat::blank(2, Position::Alpha2),
            Beat::new(
                3,
                "B",
                Position::Alpha2,
                Position::Alpha3,
                pair(
                    (Location::Southwest, Location::West),
                    (Location::Northeast, Location::East),
                ),
            ),
        ];
        let sequence = Sequence::from_beats(beats);
        assert_eq!(sequence.word(), "AB");
        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn test_continuity_checks_positions_and_locations() {
        let good = Sequence::from_beats(vec![
            Beat::new(
                1,
                "A",
                Position::Alpha1,
                Position::Alpha2,
                pair(
                    (Location::South, Location::Southwest),
                    (Location::North, Location::Northeast),
                ),
            ),
            Beat::new(
                2,
                "B",
                Position::Alpha2,
                Position::Alpha3,
                pair(
                    (Location::Southwest, Location::West),
                    (Location::Northeast, Location::East),
                ),
            ),
        ]);
        assert!(good.validate_continuity().is_ok());

        let broken = Sequence::from_beats(vec![
            Beat::new(
                1,
                "A",
                Position::Alpha1,
                Position::Alpha2,
                pair(
                    (Location::South, Location::Southwest),
                    (Location::North, Location::Northeast),
                ),
            ),
            Beat::new(
                2,
                "B",
                Position::Alpha5,
                Position::Alpha6,
                pair(
                    (Location::North, Location::Northeast),
                    (Location::South, Location::Southwest),
                ),
            ),
        ]);
        let message = broken.validate_continuity().unwrap_err();
        assert!(message.contains("beat 2"));
    }

    #[test]
    fn test_start_and_end_positions() {
        let sequence = Sequence::from_beats(vec![Beat::new(
            1,
            "C",
            Position::Beta5,
            Position::Beta7,
            pair(
                (Location::South, Location::West),
                (Location::South, Location::West),
            ),
        )]);
        assert_eq!(sequence.start_position(), Some(Position::Beta5));
        assert_eq!(sequence.end_position(), Some(Position::Beta7));
        assert_eq!(sequence.start_position_beat.position, Position::Beta5);

        let empty = Sequence::from_beats(vec![]);
        assert_eq!(empty.start_position(), None);
        assert!(empty.is_empty());
    }
}
