//! Location geometry: mirror, rotation, and hand-path lookups
//!
//! Locations sit on an eight-point compass, so rotation is modular
//! arithmetic on the compass index and reflection is a fixed table per
//! axis. Every map here is total over the eight locations.

use wasm_bindgen::prelude::*;

use crate::models::{Location, RotationDirection};

/// Reflection axis for mirror lookups
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectionAxis {
    /// Reflect left-right (east and west exchange)
    Vertical = 0,

    /// Reflect top-bottom (north and south exchange)
    Horizontal = 1,
}

/// Mirror a location across the given axis
pub fn mirror_location(location: Location, axis: ReflectionAxis) -> Location {
    match axis {
        ReflectionAxis::Vertical => match location {
            Location::North => Location::North,
            Location::Northeast => Location::Northwest,
            Location::East => Location::West,
            Location::Southeast => Location::Southwest,
            Location::South => Location::South,
            Location::Southwest => Location::Southeast,
            Location::West => Location::East,
            Location::Northwest => Location::Northeast,
        },
        ReflectionAxis::Horizontal => match location {
            Location::North => Location::South,
            Location::Northeast => Location::Southeast,
            Location::East => Location::East,
            Location::Southeast => Location::Northeast,
            Location::South => Location::North,
            Location::Southwest => Location::Northwest,
            Location::West => Location::West,
            Location::Northwest => Location::Southwest,
        },
    }
}

/// Rotate a location clockwise by the given number of quarter turns
pub fn rotate_location(location: Location, quarter_turns: u8) -> Location {
    Location::from_compass_index(location.compass_index() + 2 * (quarter_turns % 4))
}

/// Direction the hand arcs when moving between two locations in one beat
///
/// Identical or diametrically opposite locations have no arc, so no
/// direction.
pub fn handpath_direction(start: Location, end: Location) -> RotationDirection {
    let steps = (end.compass_index() + 8 - start.compass_index()) % 8;
    match steps {
        0 | 4 => RotationDirection::None,
        1..=3 => RotationDirection::Clockwise,
        _ => RotationDirection::CounterClockwise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_involution_on_both_axes() {
        for axis in [ReflectionAxis::Vertical, ReflectionAxis::Horizontal] {
            for location in Location::ALL {
                assert_eq!(
                    mirror_location(mirror_location(location, axis), axis),
                    location
                );
            }
        }
    }

    #[test]
    fn test_vertical_mirror_fixes_the_axis_points() {
        assert_eq!(
            mirror_location(Location::North, ReflectionAxis::Vertical),
            Location::North
        );
        assert_eq!(
            mirror_location(Location::South, ReflectionAxis::Vertical),
            Location::South
        );
        assert_eq!(
            mirror_location(Location::East, ReflectionAxis::Vertical),
            Location::West
        );
        assert_eq!(
            mirror_location(Location::Northeast, ReflectionAxis::Vertical),
            Location::Northwest
        );
    }

    #[test]
    fn test_rotation_wraps_the_compass() {
        assert_eq!(rotate_location(Location::North, 1), Location::East);
        assert_eq!(rotate_location(Location::North, 2), Location::South);
        assert_eq!(rotate_location(Location::Northwest, 2), Location::Southeast);
        for location in Location::ALL {
            assert_eq!(rotate_location(location, 4), location);
            assert_eq!(
                rotate_location(rotate_location(location, 2), 2),
                location
            );
        }
    }

    #[test]
    fn test_handpath_direction_sides() {
        assert_eq!(
            handpath_direction(Location::North, Location::East),
            RotationDirection::Clockwise
        );
        assert_eq!(
            handpath_direction(Location::North, Location::West),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            handpath_direction(Location::North, Location::South),
            RotationDirection::None
        );
        assert_eq!(
            handpath_direction(Location::Southwest, Location::Southwest),
            RotationDirection::None
        );
        assert_eq!(
            handpath_direction(Location::West, Location::North),
            RotationDirection::Clockwise
        );
    }
}
