//! Grid module: location and position geometry
//!
//! Pure lookup tables and modular arithmetic over the eight-point
//! compass and the 32 named positions. Everything here is stateless.

pub mod locations;
pub mod positions;

pub use locations::{handpath_direction, mirror_location, rotate_location, ReflectionAxis};
pub use positions::{
    location_pair, mirror_position, position_for_pair, rotate_position, swap_position,
};
