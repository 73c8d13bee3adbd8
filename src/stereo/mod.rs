//! Stereo collaborators - what the obstacle sampler needs from image space
//!
//! The sampler is written against the traits in stereo_interfaces.rs so any
//! depth estimator or pixel container can be plugged in. `BlockMatcher` is the
//! default estimator.

pub mod block_matcher;
pub mod stereo_data;
pub mod stereo_interfaces;
pub mod stereo_operations;

pub use block_matcher::BlockMatcher;
pub use stereo_data::{DepthError, DepthEstimate, Radii, SearchParameters};
pub use stereo_interfaces::{DepthEstimator, StereoImage};

pub use stereo_operations::{
    centre_offset_of,
    image_centre,
    to_absolute_coordinates,
};
