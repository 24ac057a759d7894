//! Position topology: pair table and derived partner lookups
//!
//! Each of the 32 positions names one ordered (blue, red) location pair.
//! The mirror, rotation, and swap partner of a position are derived by
//! mapping its pair and resolving the result back through the inverse
//! table, so the three partner maps can never drift from the topology.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::errors::CapError;
use crate::grid::locations::{mirror_location, rotate_location, ReflectionAxis};
use crate::models::{Location, Position};

/// The (blue, red) location pair a position names
pub fn location_pair(position: Position) -> (Location, Location) {
    use Location::*;
    match position {
        // Alpha ring: tracks opposite each other
        Position::Alpha1 => (South, North),
        Position::Alpha2 => (Southwest, Northeast),
        Position::Alpha3 => (West, East),
        Position::Alpha4 => (Northwest, Southeast),
        Position::Alpha5 => (North, South),
        Position::Alpha6 => (Northeast, Southwest),
        Position::Alpha7 => (East, West),
        Position::Alpha8 => (Southeast, Northwest),

        // Beta ring: tracks together
        Position::Beta1 => (North, North),
        Position::Beta2 => (Northeast, Northeast),
        Position::Beta3 => (East, East),
        Position::Beta4 => (Southeast, Southeast),
        Position::Beta5 => (South, South),
        Position::Beta6 => (Southwest, Southwest),
        Position::Beta7 => (West, West),
        Position::Beta8 => (Northwest, Northwest),

        // Gamma ring, first chirality: blue a quarter turn behind red
        Position::Gamma1 => (West, North),
        Position::Gamma2 => (Northwest, Northeast),
        Position::Gamma3 => (North, East),
        Position::Gamma4 => (Northeast, Southeast),
        Position::Gamma5 => (East, South),
        Position::Gamma6 => (Southeast, Southwest),
        Position::Gamma7 => (South, West),
        Position::Gamma8 => (Southwest, Northwest),

        // Gamma ring, second chirality: blue a quarter turn ahead of red
        Position::Gamma9 => (East, North),
        Position::Gamma10 => (Southeast, Northeast),
        Position::Gamma11 => (South, East),
        Position::Gamma12 => (Southwest, Southeast),
        Position::Gamma13 => (West, South),
        Position::Gamma14 => (Northwest, Southwest),
        Position::Gamma15 => (North, West),
        Position::Gamma16 => (Northeast, Northwest),
    }
}

lazy_static! {
    /// Inverse of `location_pair`, built once from the forward table
    static ref POSITION_BY_PAIR: HashMap<(Location, Location), Position> = {
        let mut map = HashMap::new();
        for &position in Position::ALL.iter() {
            map.insert(location_pair(position), position);
        }
        map
    };
}

/// Resolve a (blue, red) pair back to its named position
///
/// Only 32 of the 64 ordered pairs are named; the rest (adjacent-offset
/// pairs) are off-grid and return None.
pub fn position_for_pair(blue: Location, red: Location) -> Option<Position> {
    POSITION_BY_PAIR.get(&(blue, red)).copied()
}

/// Mirror partner of a position across the given axis
pub fn mirror_position(position: Position, axis: ReflectionAxis) -> Result<Position, CapError> {
    let (blue, red) = location_pair(position);
    resolve_pair(mirror_location(blue, axis), mirror_location(red, axis))
}

/// Rotation partner of a position after the given clockwise quarter turns
pub fn rotate_position(position: Position, quarter_turns: u8) -> Result<Position, CapError> {
    let (blue, red) = location_pair(position);
    resolve_pair(
        rotate_location(blue, quarter_turns),
        rotate_location(red, quarter_turns),
    )
}

/// Partner of a position with the two tracks' locations exchanged
pub fn swap_position(position: Position) -> Result<Position, CapError> {
    let (blue, red) = location_pair(position);
    resolve_pair(red, blue)
}

fn resolve_pair(blue: Location, red: Location) -> Result<Position, CapError> {
    position_for_pair(blue, red).ok_or_else(|| CapError::UnmappedValue {
        lookup: format!("location pair (blue {}, red {})", blue, red),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table_is_a_bijection() {
        assert_eq!(POSITION_BY_PAIR.len(), 32);
        for position in Position::ALL {
            let (blue, red) = location_pair(position);
            assert_eq!(position_for_pair(blue, red), Some(position));
        }
    }

    #[test]
    fn test_partner_maps_are_total_involutions() {
        for position in Position::ALL {
            let mirrored = mirror_position(position, ReflectionAxis::Vertical).unwrap();
            assert_eq!(
                mirror_position(mirrored, ReflectionAxis::Vertical).unwrap(),
                position
            );

            let rotated = rotate_position(position, 2).unwrap();
            assert_eq!(rotate_position(rotated, 2).unwrap(), position);

            let swapped = swap_position(position).unwrap();
            assert_eq!(swap_position(swapped).unwrap(), position);
        }
    }

    #[test]
    fn test_known_partners() {
        assert_eq!(
            mirror_position(Position::Alpha3, ReflectionAxis::Vertical).unwrap(),
            Position::Alpha7
        );
        assert_eq!(
            mirror_position(Position::Beta1, ReflectionAxis::Vertical).unwrap(),
            Position::Beta1
        );
        assert_eq!(
            mirror_position(Position::Gamma1, ReflectionAxis::Vertical).unwrap(),
            Position::Gamma9
        );
        assert_eq!(rotate_position(Position::Gamma5, 2).unwrap(), Position::Gamma1);
        assert_eq!(rotate_position(Position::Alpha1, 2).unwrap(), Position::Alpha5);
        assert_eq!(swap_position(Position::Alpha1).unwrap(), Position::Alpha5);
        assert_eq!(swap_position(Position::Beta4).unwrap(), Position::Beta4);
        assert_eq!(swap_position(Position::Gamma1).unwrap(), Position::Gamma15);
    }

    #[test]
    fn test_partner_maps_commute_pairwise() {
        for position in Position::ALL {
            let mirror_then_rotate =
                rotate_position(mirror_position(position, ReflectionAxis::Vertical).unwrap(), 2)
                    .unwrap();
            let rotate_then_mirror =
                mirror_position(rotate_position(position, 2).unwrap(), ReflectionAxis::Vertical)
                    .unwrap();
            assert_eq!(mirror_then_rotate, rotate_then_mirror);

            let swap_then_rotate = rotate_position(swap_position(position).unwrap(), 2).unwrap();
            let rotate_then_swap = swap_position(rotate_position(position, 2).unwrap()).unwrap();
            assert_eq!(swap_then_rotate, rotate_then_swap);

            let swap_then_mirror =
                mirror_position(swap_position(position).unwrap(), ReflectionAxis::Vertical)
                    .unwrap();
            let mirror_then_swap =
                swap_position(mirror_position(position, ReflectionAxis::Vertical).unwrap())
                    .unwrap();
            assert_eq!(swap_then_mirror, mirror_then_swap);
        }
    }
}
