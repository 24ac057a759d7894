//! Grid positions for the two-track system
//!
//! A position names where both tracks sit as a single token: a ring
//! (alpha, beta, gamma) plus a 1-based index around the compass. Alpha
//! positions hold the tracks opposite each other, beta positions hold
//! them together, and gamma positions hold them a quarter turn apart.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Ring family of a position
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    /// Tracks opposite each other (8 positions)
    Alpha = 0,

    /// Tracks at the same location (8 positions)
    Beta = 1,

    /// Tracks a quarter turn apart (16 positions)
    Gamma = 2,
}

impl Ring {
    /// Get the lowercase ring token
    pub fn token(&self) -> &'static str {
        match self {
            Ring::Alpha => "alpha",
            Ring::Beta => "beta",
            Ring::Gamma => "gamma",
        }
    }

    /// Number of positions in this ring
    pub fn position_count(&self) -> u8 {
        match self {
            Ring::Alpha | Ring::Beta => 8,
            Ring::Gamma => 16,
        }
    }
}

/// All 32 named grid positions
///
/// Discriminants run alpha1-8, beta1-8, gamma1-16 so that `ALL` indexing
/// and the ring arithmetic below stay in sync.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Alpha1 = 0,
    Alpha2 = 1,
    Alpha3 = 2,
    Alpha4 = 3,
    Alpha5 = 4,
    Alpha6 = 5,
    Alpha7 = 6,
    Alpha8 = 7,
    Beta1 = 8,
    Beta2 = 9,
    Beta3 = 10,
    Beta4 = 11,
    Beta5 = 12,
    Beta6 = 13,
    Beta7 = 14,
    Beta8 = 15,
    Gamma1 = 16,
    Gamma2 = 17,
    Gamma3 = 18,
    Gamma4 = 19,
    Gamma5 = 20,
    Gamma6 = 21,
    Gamma7 = 22,
    Gamma8 = 23,
    Gamma9 = 24,
    Gamma10 = 25,
    Gamma11 = 26,
    Gamma12 = 27,
    Gamma13 = 28,
    Gamma14 = 29,
    Gamma15 = 30,
    Gamma16 = 31,
}

impl Position {
    /// All 32 positions in discriminant order
    pub const ALL: [Position; 32] = [
        Position::Alpha1,
        Position::Alpha2,
        Position::Alpha3,
        Position::Alpha4,
        Position::Alpha5,
        Position::Alpha6,
        Position::Alpha7,
        Position::Alpha8,
        Position::Beta1,
        Position::Beta2,
        Position::Beta3,
        Position::Beta4,
        Position::Beta5,
        Position::Beta6,
        Position::Beta7,
        Position::Beta8,
        Position::Gamma1,
        Position::Gamma2,
        Position::Gamma3,
        Position::Gamma4,
        Position::Gamma5,
        Position::Gamma6,
        Position::Gamma7,
        Position::Gamma8,
        Position::Gamma9,
        Position::Gamma10,
        Position::Gamma11,
        Position::Gamma12,
        Position::Gamma13,
        Position::Gamma14,
        Position::Gamma15,
        Position::Gamma16,
    ];

    /// Ring family this position belongs to
    pub fn ring(&self) -> Ring {
        match self {
            Position::Alpha1
            | Position::Alpha2
            | Position::Alpha3
            | Position::Alpha4
            | Position::Alpha5
            | Position::Alpha6
            | Position::Alpha7
            | Position::Alpha8 => Ring::Alpha,

            Position::Beta1
            | Position::Beta2
            | Position::Beta3
            | Position::Beta4
            | Position::Beta5
            | Position::Beta6
            | Position::Beta7
            | Position::Beta8 => Ring::Beta,

            _ => Ring::Gamma,
        }
    }

    /// 1-based index within the ring
    pub fn index(&self) -> u8 {
        match self.ring() {
            Ring::Alpha => *self as u8 + 1,
            Ring::Beta => *self as u8 - 7,
            Ring::Gamma => *self as u8 - 15,
        }
    }

    /// Position for a ring and 1-based index, if the index is in range
    pub fn from_ring_index(ring: Ring, index: u8) -> Option<Position> {
        let slot = match ring {
            Ring::Alpha if (1..=8).contains(&index) => index - 1,
            Ring::Beta if (1..=8).contains(&index) => index + 7,
            Ring::Gamma if (1..=16).contains(&index) => index + 15,
            _ => return None,
        };
        Some(Position::ALL[slot as usize])
    }

    /// Get the lowercase position token ("alpha1", "gamma12", ...)
    pub fn token(&self) -> &'static str {
        match self {
            Position::Alpha1 => "alpha1",
            Position::Alpha2 => "alpha2",
            Position::Alpha3 => "alpha3",
            Position::Alpha4 => "alpha4",
            Position::Alpha5 => "alpha5",
            Position::Alpha6 => "alpha6",
            Position::Alpha7 => "alpha7",
            Position::Alpha8 => "alpha8",
            Position::Beta1 => "beta1",
            Position::Beta2 => "beta2",
            Position::Beta3 => "beta3",
            Position::Beta4 => "beta4",
            Position::Beta5 => "beta5",
            Position::Beta6 => "beta6",
            Position::Beta7 => "beta7",
            Position::Beta8 => "beta8",
            Position::Gamma1 => "gamma1",
            Position::Gamma2 => "gamma2",
            Position::Gamma3 => "gamma3",
            Position::Gamma4 => "gamma4",
            Position::Gamma5 => "gamma5",
            Position::Gamma6 => "gamma6",
            Position::Gamma7 => "gamma7",
            Position::Gamma8 => "gamma8",
            Position::Gamma9 => "gamma9",
            Position::Gamma10 => "gamma10",
            Position::Gamma11 => "gamma11",
            Position::Gamma12 => "gamma12",
            Position::Gamma13 => "gamma13",
            Position::Gamma14 => "gamma14",
            Position::Gamma15 => "gamma15",
            Position::Gamma16 => "gamma16",
        }
    }

    /// Parse a position token like "alpha3" or "gamma12"
    pub fn parse(token: &str) -> Option<Position> {
        let (ring, digits) = if let Some(rest) = token.strip_prefix("alpha") {
            (Ring::Alpha, rest)
        } else if let Some(rest) = token.strip_prefix("beta") {
            (Ring::Beta, rest)
        } else if let Some(rest) = token.strip_prefix("gamma") {
            (Ring::Gamma, rest)
        } else {
            return None;
        };
        let index: u8 = digits.parse().ok()?;
        Position::from_ring_index(ring, index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
