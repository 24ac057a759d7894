//! The composite transform registry
//!
//! Thirteen named CAP types, each a fixed composition of the four
//! primitives (mirror, rotate, swap, invert). A type is selected by
//! enum tag and looked up in a const table; the table is the entire
//! dispatch surface, so adding a type means adding a row, not a code
//! path.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::errors::CapError;
use crate::grid::{
    mirror_location, mirror_position, rotate_location, rotate_position, swap_position,
    ReflectionAxis,
};
use crate::letters::LetterComplements;
use crate::models::{Location, Position, Sequence};

/// All registered CAP types
///
/// Four strict singles, the six pairs, the two registered triples, and
/// the full quad. The other two triples are not part of the notation
/// and have no rows.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CapType {
    StrictMirrored = 0,
    StrictRotated = 1,
    StrictSwapped = 2,
    StrictInverted = 3,
    MirroredRotated = 4,
    MirroredSwapped = 5,
    MirroredInverted = 6,
    RotatedSwapped = 7,
    RotatedInverted = 8,
    SwappedInverted = 9,
    MirroredRotatedInverted = 10,
    RotatedSwappedInverted = 11,
    MirroredRotatedSwappedInverted = 12,
}

impl CapType {
    /// All 13 types in registry order
    pub const ALL: [CapType; 13] = [
        CapType::StrictMirrored,
        CapType::StrictRotated,
        CapType::StrictSwapped,
        CapType::StrictInverted,
        CapType::MirroredRotated,
        CapType::MirroredSwapped,
        CapType::MirroredInverted,
        CapType::RotatedSwapped,
        CapType::RotatedInverted,
        CapType::SwappedInverted,
        CapType::MirroredRotatedInverted,
        CapType::RotatedSwappedInverted,
        CapType::MirroredRotatedSwappedInverted,
    ];

    /// The registry row for this type
    pub fn transform(&self) -> &'static CapTransform {
        &REGISTRY[*self as usize]
    }

    /// Get the lowercase token ("strict_mirrored", ...)
    pub fn token(&self) -> &'static str {
        match self {
            CapType::StrictMirrored => "strict_mirrored",
            CapType::StrictRotated => "strict_rotated",
            CapType::StrictSwapped => "strict_swapped",
            CapType::StrictInverted => "strict_inverted",
            CapType::MirroredRotated => "mirrored_rotated",
            CapType::MirroredSwapped => "mirrored_swapped",
            CapType::MirroredInverted => "mirrored_inverted",
            CapType::RotatedSwapped => "rotated_swapped",
            CapType::RotatedInverted => "rotated_inverted",
            CapType::SwappedInverted => "swapped_inverted",
            CapType::MirroredRotatedInverted => "mirrored_rotated_inverted",
            CapType::RotatedSwappedInverted => "rotated_swapped_inverted",
            CapType::MirroredRotatedSwappedInverted => "mirrored_rotated_swapped_inverted",
        }
    }

    /// Get a human-readable name for this type
    pub fn name(&self) -> &'static str {
        match self {
            CapType::StrictMirrored => "Strict Mirrored",
            CapType::StrictRotated => "Strict Rotated",
            CapType::StrictSwapped => "Strict Swapped",
            CapType::StrictInverted => "Strict Inverted",
            CapType::MirroredRotated => "Mirrored Rotated",
            CapType::MirroredSwapped => "Mirrored Swapped",
            CapType::MirroredInverted => "Mirrored Inverted",
            CapType::RotatedSwapped => "Rotated Swapped",
            CapType::RotatedInverted => "Rotated Inverted",
            CapType::SwappedInverted => "Swapped Inverted",
            CapType::MirroredRotatedInverted => "Mirrored Rotated Inverted",
            CapType::RotatedSwappedInverted => "Rotated Swapped Inverted",
            CapType::MirroredRotatedSwappedInverted => "Mirrored Rotated Swapped Inverted",
        }
    }

    /// Parse a type token
    pub fn parse(token: &str) -> Option<CapType> {
        CapType::ALL
            .into_iter()
            .find(|cap_type| cap_type.token() == token)
    }
}

impl std::fmt::Display for CapType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One registry row: which primitive each beat field receives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapTransform {
    pub cap_type: CapType,

    /// Location pairs reflect across the vertical grid axis
    pub mirrors: bool,

    /// Location pairs rotate a half turn
    pub rotates: bool,

    /// The two tracks exchange motion records
    pub swaps_tracks: bool,

    /// PRO and ANTI exchange on every record
    pub inverts_motion: bool,

    /// Each record's rotation direction reverses
    ///
    /// Authored column: reversal is present exactly when one of mirror
    /// and invert is in the composition, because each reverses the
    /// prop's spin on its own and the two cancel when combined.
    pub flips_rotation: bool,

    /// Readable description of the position relation the lead-in must
    /// close, used in precondition errors
    pub relation: &'static str,
}

/// The authored registry, indexed by `CapType` discriminant
pub const REGISTRY: [CapTransform; 13] = [
    CapTransform {
        cap_type: CapType::StrictMirrored,
        mirrors: true,
        rotates: false,
        swaps_tracks: false,
        inverts_motion: false,
        flips_rotation: true,
        relation: "vertical mirror partner",
    },
    CapTransform {
        cap_type: CapType::StrictRotated,
        mirrors: false,
        rotates: true,
        swaps_tracks: false,
        inverts_motion: false,
        flips_rotation: false,
        relation: "half-turn rotation partner",
    },
    CapTransform {
        cap_type: CapType::StrictSwapped,
        mirrors: false,
        rotates: false,
        swaps_tracks: true,
        inverts_motion: false,
        flips_rotation: false,
        relation: "track-swap partner",
    },
    CapTransform {
        cap_type: CapType::StrictInverted,
        mirrors: false,
        rotates: false,
        swaps_tracks: false,
        inverts_motion: true,
        flips_rotation: true,
        relation: "unchanged start position",
    },
    CapTransform {
        cap_type: CapType::MirroredRotated,
        mirrors: true,
        rotates: true,
        swaps_tracks: false,
        inverts_motion: false,
        flips_rotation: true,
        relation: "mirror of the half-turn partner",
    },
    CapTransform {
        cap_type: CapType::MirroredSwapped,
        mirrors: true,
        rotates: false,
        swaps_tracks: true,
        inverts_motion: false,
        flips_rotation: true,
        relation: "mirror of the track-swap partner",
    },
    CapTransform {
        cap_type: CapType::MirroredInverted,
        mirrors: true,
        rotates: false,
        swaps_tracks: false,
        inverts_motion: true,
        flips_rotation: false,
        relation: "vertical mirror partner",
    },
    CapTransform {
        cap_type: CapType::RotatedSwapped,
        mirrors: false,
        rotates: true,
        swaps_tracks: true,
        inverts_motion: false,
        flips_rotation: false,
        relation: "half-turn rotation of the track-swap partner",
    },
    CapTransform {
        cap_type: CapType::RotatedInverted,
        mirrors: false,
        rotates: true,
        swaps_tracks: false,
        inverts_motion: true,
        flips_rotation: true,
        relation: "half-turn rotation partner",
    },
    CapTransform {
        cap_type: CapType::SwappedInverted,
        mirrors: false,
        rotates: false,
        swaps_tracks: true,
        inverts_motion: true,
        flips_rotation: true,
        relation: "track-swap partner",
    },
    CapTransform {
        cap_type: CapType::MirroredRotatedInverted,
        mirrors: true,
        rotates: true,
        swaps_tracks: false,
        inverts_motion: true,
        flips_rotation: false,
        relation: "mirror of the half-turn partner",
    },
    CapTransform {
        cap_type: CapType::RotatedSwappedInverted,
        mirrors: false,
        rotates: true,
        swaps_tracks: true,
        inverts_motion: true,
        flips_rotation: true,
        relation: "half-turn rotation of the track-swap partner",
    },
    CapTransform {
        cap_type: CapType::MirroredRotatedSwappedInverted,
        mirrors: true,
        rotates: true,
        swaps_tracks: true,
        inverts_motion: true,
        flips_rotation: false,
        relation: "mirror of the rotated track-swap partner",
    },
];

impl CapTransform {
    /// Composed position map for this type's primitives
    ///
    /// Applied as swap, then rotate, then mirror; the three partner maps
    /// commute, so the order is a convention, not a constraint. Motion
    /// inversion never moves a position.
    pub fn map_position(&self, position: Position) -> Result<Position, CapError> {
        let mut mapped = position;
        if self.swaps_tracks {
            mapped = swap_position(mapped)?;
        }
        if self.rotates {
            mapped = rotate_position(mapped, 2)?;
        }
        if self.mirrors {
            mapped = mirror_position(mapped, ReflectionAxis::Vertical)?;
        }
        Ok(mapped)
    }

    /// Composed per-track location map (swap reassigns whole records, so
    /// it contributes nothing here)
    pub fn map_location(&self, location: Location) -> Location {
        let mut mapped = location;
        if self.rotates {
            mapped = rotate_location(mapped, 2);
        }
        if self.mirrors {
            mapped = mirror_location(mapped, ReflectionAxis::Vertical);
        }
        mapped
    }

    /// Letter the derived beat carries, composed from the provider's
    /// complement lookups (mirror is the identity on letters)
    pub fn derived_letter<L: LetterComplements>(
        &self,
        letters: &L,
        letter: &str,
    ) -> Result<String, CapError> {
        let mut current = letter.to_string();
        if self.rotates {
            current = letters
                .rotated(&current)
                .ok_or_else(|| CapError::UnknownLetterComplement {
                    letter: current.clone(),
                    lookup: "rotated",
                })?;
        }
        if self.swaps_tracks {
            current = letters
                .swapped(&current)
                .ok_or_else(|| CapError::UnknownLetterComplement {
                    letter: current.clone(),
                    lookup: "swapped",
                })?;
        }
        if self.inverts_motion {
            current = letters
                .inverted(&current)
                .ok_or_else(|| CapError::UnknownLetterComplement {
                    letter: current.clone(),
                    lookup: "inverted",
                })?;
        }
        Ok(current)
    }

    /// Check that an end position closes this type's relation to a start
    pub fn check_positions(&self, start: Position, end: Position) -> Result<(), CapError> {
        let expected = self.map_position(start)?;
        if end != expected {
            return Err(CapError::InvalidPositionPair {
                cap_type: self.cap_type,
                start,
                expected,
                found: end,
                relation: self.relation,
            });
        }
        Ok(())
    }

    /// Check the lead-in's own start/end span closes the relation
    pub fn check_precondition(&self, lead_in: &Sequence) -> Result<(), CapError> {
        let start = lead_in
            .start_position()
            .ok_or(CapError::IncompleteBeatData {
                beat: 0,
                missing: "any beats",
            })?;
        let end = lead_in.end_position().ok_or(CapError::IncompleteBeatData {
            beat: 0,
            missing: "any beats",
        })?;
        self.check_positions(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::StandardLetters;

    #[test]
    fn test_registry_rows_match_their_discriminants() {
        assert_eq!(REGISTRY.len(), CapType::ALL.len());
        for cap_type in CapType::ALL {
            assert_eq!(cap_type.transform().cap_type, cap_type);
        }
    }

    #[test]
    fn test_token_parse_round_trip() {
        for cap_type in CapType::ALL {
            assert_eq!(CapType::parse(cap_type.token()), Some(cap_type));
        }
        assert_eq!(CapType::parse("strict_bogus"), None);
    }

    #[test]
    fn test_rotation_flip_tracks_mirror_invert_parity() {
        for row in REGISTRY {
            assert_eq!(
                row.flips_rotation,
                row.mirrors != row.inverts_motion,
                "row {}",
                row.cap_type
            );
        }
    }

    #[test]
    fn test_position_maps_are_involutions_for_every_type() {
        for cap_type in CapType::ALL {
            let transform = cap_type.transform();
            for position in Position::ALL {
                let mapped = transform.map_position(position).unwrap();
                assert_eq!(
                    transform.map_position(mapped).unwrap(),
                    position,
                    "{} at {}",
                    cap_type,
                    position
                );
            }
        }
    }

    #[test]
    fn test_known_position_maps() {
        assert_eq!(
            CapType::StrictMirrored
                .transform()
                .map_position(Position::Alpha3)
                .unwrap(),
            Position::Alpha7
        );
        assert_eq!(
            CapType::StrictInverted
                .transform()
                .map_position(Position::Gamma11)
                .unwrap(),
            Position::Gamma11
        );
        assert_eq!(
            CapType::MirroredRotatedSwappedInverted
                .transform()
                .map_position(Position::Alpha3)
                .unwrap(),
            Position::Alpha7
        );
    }

    #[test]
    fn test_precondition_reports_expected_and_found() {
        let transform = CapType::StrictMirrored.transform();
        assert!(transform
            .check_positions(Position::Alpha3, Position::Alpha7)
            .is_ok());

        let error = transform
            .check_positions(Position::Alpha3, Position::Alpha5)
            .unwrap_err();
        match error {
            CapError::InvalidPositionPair {
                expected, found, ..
            } => {
                assert_eq!(expected, Position::Alpha7);
                assert_eq!(found, Position::Alpha5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_derived_letters_compose() {
        let letters = StandardLetters;
        assert_eq!(
            CapType::StrictInverted
                .transform()
                .derived_letter(&letters, "A")
                .unwrap(),
            "B"
        );
        assert_eq!(
            CapType::StrictMirrored
                .transform()
                .derived_letter(&letters, "A")
                .unwrap(),
            "A"
        );
        // swap sends S to T, inversion sends T back to S
        assert_eq!(
            CapType::SwappedInverted
                .transform()
                .derived_letter(&letters, "S")
                .unwrap(),
            "S"
        );
        let error = CapType::StrictInverted
            .transform()
            .derived_letter(&letters, "Z9")
            .unwrap_err();
        assert!(matches!(error, CapError::UnknownLetterComplement { .. }));
    }
}
