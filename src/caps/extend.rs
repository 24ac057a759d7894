//! Sequence extension: generate the second half of a CAP

use crate::caps::{apply, folding, CapEngine, CapType};
use crate::continuity::OrientationContinuity;
use crate::errors::CapError;
use crate::letters::LetterComplements;
use crate::models::Sequence;

impl<L: LetterComplements, C: OrientationContinuity> CapEngine<L, C> {
    /// Extend a lead-in into a completed CAP of the given type
    ///
    /// The lead-in must be fully populated and must close the type's
    /// position relation. The input is never modified; on success the
    /// returned sequence carries the lead-in's beats followed by the
    /// generated half, with the start-position anchor untouched.
    pub fn extend(&self, lead_in: &Sequence, cap_type: CapType) -> Result<Sequence, CapError> {
        let transform = cap_type.transform();
        validate_lead_in(lead_in)?;
        transform.check_precondition(lead_in)?;

        let sequence_length = lead_in.beats.len() as u32;
        let final_length = folding::final_length(sequence_length);
        let half = folding::half_length(sequence_length);
        log::debug!(
            "extending {} lead-in beats to {} as {}",
            sequence_length,
            final_length,
            cap_type
        );

        let mut beats = lead_in.beats.clone();
        for target in (half + 1)..=final_length {
            let source_index = folding::source_beat(target, sequence_length)?;
            let source = beats[(source_index - 1) as usize].clone();
            let previous = &beats[(target as usize) - 2];
            let beat = apply::derive_beat(
                transform,
                &self.letters,
                &self.continuity,
                &source,
                previous,
                target,
            )?;
            beats.push(beat);
        }

        Ok(Sequence::new(lead_in.start_position_beat.clone(), beats))
    }
}

/// Every lead-in beat must carry a letter and motion records
fn validate_lead_in(lead_in: &Sequence) -> Result<(), CapError> {
    if lead_in.is_empty() {
        return Err(CapError::IncompleteBeatData {
            beat: 0,
            missing: "any beats",
        });
    }
    for beat in &lead_in.beats {
        if beat.letter.is_none() {
            return Err(CapError::IncompleteBeatData {
                beat: beat.index,
                missing: "a letter",
            });
        }
        if beat.motions.is_none() {
            return Err(CapError::IncompleteBeatData {
                beat: beat.index,
                missing: "motion records",
            });
        }
    }
    Ok(())
}
