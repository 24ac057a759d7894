//! Letter complement lookups
//!
//! Letters classify a beat's combined motion. The engine never inspects
//! a letter's meaning; when a transform changes a beat it asks a
//! complement provider which letter the derived beat carries. Hosts with
//! extended alphabets can supply their own provider.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Complement lookups the engine needs from a letter alphabet
///
/// Each method returns None when the letter is outside the provider's
/// alphabet, which makes the affected transform inapplicable rather
/// than silently wrong.
pub trait LetterComplements {
    /// Letter for the same beat with both motion types inverted
    fn inverted(&self, letter: &str) -> Option<String>;

    /// Letter for the beat after a rigid half-turn of the whole grid
    fn rotated(&self, letter: &str) -> Option<String>;

    /// Letter for the beat with the two tracks' roles exchanged
    fn swapped(&self, letter: &str) -> Option<String>;
}

struct ComplementRow {
    inverted: &'static str,
    swapped: &'static str,
}

/// Complement table for the standard A-V alphabet
///
/// The table stores inversion and swap partners; rotation is the
/// identity on this alphabet because letters classify relative geometry,
/// which a rigid half-turn preserves.
static COMPLEMENTS: Lazy<HashMap<&'static str, ComplementRow>> = Lazy::new(|| {
    let rows = [
        // letter, inverted partner, swapped partner
        ("A", "B", "A"),
        ("B", "A", "B"),
        ("C", "C", "C"),
        ("D", "E", "D"),
        ("E", "D", "E"),
        ("F", "F", "F"),
        ("G", "H", "G"),
        ("H", "G", "H"),
        ("I", "I", "I"),
        ("J", "K", "J"),
        ("K", "J", "K"),
        ("L", "L", "L"),
        ("M", "N", "M"),
        ("N", "M", "N"),
        ("O", "O", "O"),
        ("P", "Q", "P"),
        ("Q", "P", "Q"),
        ("R", "R", "R"),
        ("S", "T", "T"),
        ("T", "S", "S"),
        ("U", "V", "V"),
        ("V", "U", "U"),
    ];
    let mut map = HashMap::new();
    for (letter, inverted, swapped) in rows {
        map.insert(letter, ComplementRow { inverted, swapped });
    }
    map
});

/// The standard alphabet's complement provider
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardLetters;

impl LetterComplements for StandardLetters {
    fn inverted(&self, letter: &str) -> Option<String> {
        COMPLEMENTS
            .get(letter)
            .map(|row| row.inverted.to_string())
    }

    fn rotated(&self, letter: &str) -> Option<String> {
        COMPLEMENTS.get(letter).map(|_| letter.to_string())
    }

    fn swapped(&self, letter: &str) -> Option<String> {
        COMPLEMENTS.get(letter).map(|row| row.swapped.to_string())
    }
}
