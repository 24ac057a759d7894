//! CAP type detection: classify a completed sequence
//!
//! A sequence is a CAP of type T when its first half closes T's
//! position relation and T's per-beat derivation reproduces the stored
//! second half field for field. Every registered type is checked;
//! exactly one match names the type, none means the sequence is not a
//! CAP, and more than one is reported as ambiguous.

use crate::caps::{apply, folding, CapEngine, CapType};
use crate::continuity::OrientationContinuity;
use crate::errors::CapError;
use crate::letters::LetterComplements;
use crate::models::Sequence;

impl<L: LetterComplements, C: OrientationContinuity> CapEngine<L, C> {
    /// Detect which registered transform generated a sequence, if any
    ///
    /// Odd-length and too-short sequences are not CAPs rather than
    /// errors, as are sequences with blank beats or letters outside the
    /// provider's alphabet.
    pub fn detect(&self, sequence: &Sequence) -> Result<Option<CapType>, CapError> {
        let length = sequence.beats.len() as u32;
        if length < 2 || length % 2 != 0 {
            return Ok(None);
        }
        let sequence_length = length / 2;

        let mut matched: Option<CapType> = None;
        for cap_type in CapType::ALL {
            if self.reproduces(sequence, cap_type, sequence_length)? {
                if let Some(first) = matched {
                    return Err(CapError::AmbiguousTransform {
                        first,
                        second: cap_type,
                    });
                }
                matched = Some(cap_type);
            }
        }
        if let Some(cap_type) = matched {
            log::debug!("detected {} over {} beats", cap_type, length);
        }
        Ok(matched)
    }

    /// Check whether one transform reproduces the stored second half
    ///
    /// An unmet position relation disqualifies the candidate, as do blank
    /// beats and letters outside the provider's alphabet; grid and
    /// folding errors are invariant violations and abort detection.
    fn reproduces(
        &self,
        sequence: &Sequence,
        cap_type: CapType,
        sequence_length: u32,
    ) -> Result<bool, CapError> {
        let transform = cap_type.transform();

        // The embedded lead-in must close the relation at the fold point.
        let half = folding::half_length(sequence_length);
        let start = sequence.beats[0].start_position;
        let fold_end = sequence.beats[(half as usize) - 1].end_position;
        match transform.check_positions(start, fold_end) {
            Ok(()) => {}
            Err(CapError::InvalidPositionPair { .. }) => return Ok(false),
            Err(error) => return Err(error),
        }

        let final_length = folding::final_length(sequence_length);
        for target in (half + 1)..=final_length {
            let source_index = folding::source_beat(target, sequence_length)?;
            let source = &sequence.beats[(source_index as usize) - 1];
            let previous = &sequence.beats[(target as usize) - 2];
            let derived = match apply::derive_beat(
                transform,
                &self.letters,
                &self.continuity,
                source,
                previous,
                target,
            ) {
                Ok(beat) => beat,
                Err(
                    CapError::IncompleteBeatData { .. }
                    | CapError::UnknownLetterComplement { .. },
                ) => return Ok(false),
                Err(error) => return Err(error),
            };
            if derived != sequence.beats[(target as usize) - 1] {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::location_pair;
    use crate::models::{
        Beat, MotionPair, MotionRecord, MotionType, Position, RotationDirection, Turns,
    };

    /// Both tracks hold the beta5 pair with no rotation
    fn held_beat(index: u32, letter: &str) -> Beat {
        let (blue_location, red_location) = location_pair(Position::Beta5);
        Beat::new(
            index,
            letter,
            Position::Beta5,
            Position::Beta5,
            MotionPair::new(
                MotionRecord::new(
                    MotionType::Static,
                    RotationDirection::None,
                    blue_location,
                    blue_location,
                    Turns::zero(),
                ),
                MotionRecord::new(
                    MotionType::Static,
                    RotationDirection::None,
                    red_location,
                    red_location,
                    Turns::zero(),
                ),
            ),
        )
    }

    #[test]
    fn test_candidate_problems_classify_as_non_matches() {
        let engine = CapEngine::standard();
        let lead_in = Sequence::from_beats(vec![held_beat(1, "S")]);
        let extended = engine
            .extend(&lead_in, CapType::StrictSwapped)
            .expect("extension should succeed");
        assert_eq!(
            engine.reproduces(&extended, CapType::StrictSwapped, 1),
            Ok(true)
        );

        // An unmet position relation drops the candidate.
        assert_eq!(
            engine.reproduces(&extended, CapType::StrictRotated, 1),
            Ok(false)
        );

        // A letter outside the alphabet drops candidates that need a
        // complement lookup.
        let mut unlettered = extended.clone();
        unlettered.beats[0].letter = Some("Z9".to_string());
        assert_eq!(
            engine.reproduces(&unlettered, CapType::StrictInverted, 1),
            Ok(false)
        );

        // A blank beat drops every candidate that folds onto it.
        let mut blank = extended;
        blank.beats[0] = Beat::blank(1, Position::Beta5);
        assert_eq!(
            engine.reproduces(&blank, CapType::StrictSwapped, 1),
            Ok(false)
        );
    }
}
