//! Projection Module - pinhole camera model
//!
//! - projection_data.rs: DepthParameters describing the camera rig
//! - projection_operations.rs: location <-> pixel offset conversions
//!

pub mod projection_data;
pub mod projection_operations;

pub use projection_data::DepthParameters;

pub use projection_operations::{
    // Construction
    create_depth_parameters,
    validate_depth_parameters,

    // Projection
    determine_location_of_pixel_offset,
    determine_pixel_offset_of_location,
};
