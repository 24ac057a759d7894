//! Element types and enumerations for motion notation
//!
//! This module defines the core enums used throughout the two-track
//! sequence system: compass locations, prop orientations, motion types,
//! rotation directions, and turn counts.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Compass location of one tracked element on the grid
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// North (12 o'clock)
    #[serde(rename = "n")]
    North = 0,

    /// Northeast
    #[serde(rename = "ne")]
    Northeast = 1,

    /// East (3 o'clock)
    #[serde(rename = "e")]
    East = 2,

    /// Southeast
    #[serde(rename = "se")]
    Southeast = 3,

    /// South (6 o'clock)
    #[serde(rename = "s")]
    South = 4,

    /// Southwest
    #[serde(rename = "sw")]
    Southwest = 5,

    /// West (9 o'clock)
    #[serde(rename = "w")]
    West = 6,

    /// Northwest
    #[serde(rename = "nw")]
    Northwest = 7,
}

impl Location {
    /// All eight compass locations in clockwise order from North
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::Northeast,
        Location::East,
        Location::Southeast,
        Location::South,
        Location::Southwest,
        Location::West,
        Location::Northwest,
    ];

    /// Index on the eight-point compass, clockwise from North = 0
    pub fn compass_index(&self) -> u8 {
        *self as u8
    }

    /// Location at the given compass index (wraps modulo 8)
    pub fn from_compass_index(index: u8) -> Location {
        Location::ALL[(index % 8) as usize]
    }

    /// Check if this is one of the four cardinal points
    pub fn is_cardinal(&self) -> bool {
        matches!(
            self,
            Location::North | Location::East | Location::South | Location::West
        )
    }

    /// Check if this is one of the four diagonal points
    pub fn is_diagonal(&self) -> bool {
        !self.is_cardinal()
    }

    /// Get the lowercase compass abbreviation ("n", "ne", ...)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Location::North => "n",
            Location::Northeast => "ne",
            Location::East => "e",
            Location::Southeast => "se",
            Location::South => "s",
            Location::Southwest => "sw",
            Location::West => "w",
            Location::Northwest => "nw",
        }
    }

    /// Get a human-readable name for this location
    pub fn name(&self) -> &'static str {
        match self {
            Location::North => "North",
            Location::Northeast => "Northeast",
            Location::East => "East",
            Location::Southeast => "Southeast",
            Location::South => "South",
            Location::Southwest => "Southwest",
            Location::West => "West",
            Location::Northwest => "Northwest",
        }
    }

    /// Parse a compass abbreviation
    pub fn parse(token: &str) -> Option<Location> {
        match token {
            "n" => Some(Location::North),
            "ne" => Some(Location::Northeast),
            "e" => Some(Location::East),
            "se" => Some(Location::Southeast),
            "s" => Some(Location::South),
            "sw" => Some(Location::Southwest),
            "w" => Some(Location::West),
            "nw" => Some(Location::Northwest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Orientation of a prop relative to the grid center
///
/// IN/OUT are the radial family (pointing toward or away from center);
/// CLOCK/COUNTER are the rotational family (pointing along the circle).
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Pointing toward the grid center
    #[serde(rename = "in")]
    In = 0,

    /// Pointing away from the grid center
    #[serde(rename = "out")]
    Out = 1,

    /// Pointing clockwise along the circle
    #[serde(rename = "clock")]
    Clock = 2,

    /// Pointing counter-clockwise along the circle
    #[serde(rename = "counter")]
    Counter = 3,
}

impl Orientation {
    /// Check if this orientation is in the radial family (IN/OUT)
    pub fn is_radial(&self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Check if this orientation is in the rotational family (CLOCK/COUNTER)
    pub fn is_rotational(&self) -> bool {
        !self.is_radial()
    }

    /// The opposite orientation within the same family
    pub fn switched(&self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }

    /// Get the lowercase token for this orientation
    pub fn token(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        }
    }
}

/// Motion type of one track during a beat
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionType {
    /// Prop rotates the same direction the hand travels
    #[serde(rename = "pro")]
    Pro = 0,

    /// Prop rotates against the direction the hand travels
    #[serde(rename = "anti")]
    Anti = 1,

    /// Hand travels with no prop rotation of its own
    #[serde(rename = "float")]
    Float = 2,

    /// Hand crosses the grid in a straight line
    #[serde(rename = "dash")]
    Dash = 3,

    /// Hand stays in place
    #[serde(rename = "static")]
    Static = 4,
}

impl MotionType {
    /// The inverted motion type: PRO and ANTI exchange, all else is fixed
    pub fn inverted(&self) -> MotionType {
        match self {
            MotionType::Pro => MotionType::Anti,
            MotionType::Anti => MotionType::Pro,
            other => *other,
        }
    }

    /// Check if the hand travels along the circle during this motion
    pub fn is_shift(&self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    /// Get the lowercase token for this motion type
    pub fn token(&self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        }
    }
}

/// Rotation direction of a prop during a beat
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// Clockwise prop rotation
    #[serde(rename = "cw")]
    Clockwise = 0,

    /// Counter-clockwise prop rotation
    #[serde(rename = "ccw")]
    CounterClockwise = 1,

    /// No prop rotation (dash and static motions)
    #[serde(rename = "no_rot")]
    None = 2,
}

impl RotationDirection {
    /// The inverted direction: CW and CCW exchange, NONE is fixed
    pub fn inverted(&self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
            RotationDirection::None => RotationDirection::None,
        }
    }

    /// Get the lowercase token for this direction
    pub fn token(&self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::None => "no_rot",
        }
    }
}

/// One of the two tracked elements of a beat
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    /// The blue track
    #[serde(rename = "blue")]
    Blue = 0,

    /// The red track
    #[serde(rename = "red")]
    Red = 1,
}

impl Track {
    /// Both tracks in canonical order
    pub const BOTH: [Track; 2] = [Track::Blue, Track::Red];

    /// The other track
    pub fn other(&self) -> Track {
        match self {
            Track::Blue => Track::Red,
            Track::Red => Track::Blue,
        }
    }

    /// Get the lowercase name for this track
    pub fn name(&self) -> &'static str {
        match self {
            Track::Blue => "blue",
            Track::Red => "red",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Turn count for one motion
///
/// Turn amounts are counted in half-turn steps so that 0.5-resolution
/// values stay exact; FLOAT motions carry no count at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turns {
    /// Concrete turn amount in half-turn steps (2 = one full turn)
    Halves(u8),

    /// Float marker: orientation follows the hand path, not a turn count
    Float,
}

impl Turns {
    /// Zero turns
    pub fn zero() -> Turns {
        Turns::Halves(0)
    }

    /// A whole number of turns
    pub fn whole(turns: u8) -> Turns {
        Turns::Halves(turns * 2)
    }

    /// Check if this is the float marker
    pub fn is_float(&self) -> bool {
        matches!(self, Turns::Float)
    }

    /// Check if this is a whole number of turns
    pub fn is_whole(&self) -> bool {
        matches!(self, Turns::Halves(h) if h % 2 == 0)
    }

    /// Half-turn count, if this is not the float marker
    pub fn halves(&self) -> Option<u8> {
        match self {
            Turns::Halves(h) => Some(*h),
            Turns::Float => None,
        }
    }

    /// Numeric turn amount, if this is not the float marker
    pub fn as_f32(&self) -> Option<f32> {
        self.halves().map(|h| h as f32 / 2.0)
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::Halves(0)
    }
}

impl std::fmt::Display for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Turns::Halves(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            Turns::Halves(h) => write!(f, "{}", *h as f32 / 2.0),
            Turns::Float => write!(f, "fl"),
        }
    }
}

// Custom serialization: whole turns as integers, half turns as 0.5-step
// floats, and the float marker as the string "fl"
impl Serialize for Turns {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Turns::Halves(h) if h % 2 == 0 => serializer.serialize_u64((h / 2) as u64),
            Turns::Halves(h) => serializer.serialize_f64(*h as f64 / 2.0),
            Turns::Float => serializer.serialize_str("fl"),
        }
    }
}

// Custom deserialization - accepts a number (0 to 3 in 0.5 steps) or "fl"
impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TurnsVisitor;

        impl<'de> serde::de::Visitor<'de> for TurnsVisitor {
            type Value = Turns;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a turn count (0-3 in 0.5 steps) or \"fl\"")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                if value > 3 {
                    return Err(E::custom(format!("invalid turns value: {}", value)));
                }
                Ok(Turns::Halves((value * 2) as u8))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                if value < 0 {
                    return Err(E::custom(format!("invalid turns value: {}", value)));
                }
                self.visit_u64(value as u64)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                let halves = value * 2.0;
                if !(0.0..=6.0).contains(&halves) || halves.fract() != 0.0 {
                    return Err(E::custom(format!("invalid turns value: {}", value)));
                }
                Ok(Turns::Halves(halves as u8))
            }

            fn visit_str<E>(self, value: &str) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "fl" => Ok(Turns::Float),
                    other => Err(E::custom(format!("invalid turns value: '{}'", other))),
                }
            }
        }

        deserializer.deserialize_any(TurnsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_type_inversion_is_involution() {
        assert_eq!(MotionType::Pro.inverted(), MotionType::Anti);
        assert_eq!(MotionType::Anti.inverted(), MotionType::Pro);
        assert_eq!(MotionType::Float.inverted(), MotionType::Float);
        assert_eq!(MotionType::Dash.inverted(), MotionType::Dash);
        assert_eq!(MotionType::Static.inverted(), MotionType::Static);

        for motion_type in [
            MotionType::Pro,
            MotionType::Anti,
            MotionType::Float,
            MotionType::Dash,
            MotionType::Static,
        ] {
            assert_eq!(motion_type.inverted().inverted(), motion_type);
        }
    }

    #[test]
    fn test_rotation_direction_inversion_is_involution() {
        assert_eq!(
            RotationDirection::Clockwise.inverted(),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            RotationDirection::CounterClockwise.inverted(),
            RotationDirection::Clockwise
        );
        assert_eq!(RotationDirection::None.inverted(), RotationDirection::None);
    }

    #[test]
    fn test_orientation_switch_stays_in_family() {
        assert_eq!(Orientation::In.switched(), Orientation::Out);
        assert_eq!(Orientation::Clock.switched(), Orientation::Counter);
        assert!(Orientation::In.switched().is_radial());
        assert!(Orientation::Counter.switched().is_rotational());
    }

    #[test]
    fn test_location_compass_round_trip() {
        for location in Location::ALL {
            assert_eq!(
                Location::from_compass_index(location.compass_index()),
                location
            );
            assert_eq!(Location::parse(location.abbreviation()), Some(location));
        }
        assert_eq!(Location::from_compass_index(9), Location::Northeast);
        assert_eq!(Location::parse("x"), None);
    }

    #[test]
    fn test_turns_wire_format() {
        assert_eq!(serde_json::to_string(&Turns::whole(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Turns::Halves(3)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Turns::Float).unwrap(), "\"fl\"");

        assert_eq!(serde_json::from_str::<Turns>("2").unwrap(), Turns::whole(2));
        assert_eq!(
            serde_json::from_str::<Turns>("0.5").unwrap(),
            Turns::Halves(1)
        );
        assert_eq!(
            serde_json::from_str::<Turns>("\"fl\"").unwrap(),
            Turns::Float
        );
        assert!(serde_json::from_str::<Turns>("4").is_err());
        assert!(serde_json::from_str::<Turns>("0.3").is_err());
        assert!(serde_json::from_str::<Turns>("\"x\"").is_err());
    }

    #[test]
    fn test_turns_display() {
        assert_eq!(Turns::whole(2).to_string(), "2");
        assert_eq!(Turns::Halves(5).to_string(), "2.5");
        assert_eq!(Turns::Float.to_string(), "fl");
    }
}
