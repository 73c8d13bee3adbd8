//! Location Module - camera-relative positions
//!
//! - location_data.rs: Location, PolarLocation, Offset and Coordinates
//! - location_operations.rs: conversions between the representations

pub mod location_data;
pub mod location_operations;

pub use location_data::{Coordinates, Location, Offset, PolarLocation};

pub use location_operations::{
    convert_to_location,
    convert_to_polar_location,
    location_from_vector,
    location_to_vector,
};
