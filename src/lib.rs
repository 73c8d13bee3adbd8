// Stereo Occupancy - locating obstacles around a stereo camera rig
//
// Data-oriented layout, same as every module below:
// - *_data.rs holds plain data structures
// - *_operations.rs holds the functions that transform them
//
// Frame pipeline:
// far-plane probe -> projection -> pixel -> depth estimator -> back-projection -> occupancy map

// Constants module
pub mod constants;

// Core modules
pub mod error;

// Geometry
pub mod location;
pub mod occupancy;
pub mod projection;

// Perception
pub mod obstacles;
pub mod stereo;

// Utilities
pub mod config;
pub mod thread_pool;

pub use config::{load_config, parse_config, validate_config, PerceptionConfig};
pub use error::{ErrorContext, OptionExt, PerceptionError, PerceptionResult};
pub use location::{
    convert_to_location, convert_to_polar_location, Coordinates, Location, Offset, PolarLocation,
};
pub use obstacles::{
    far_plane_probes, locate_obstacle_at_coordinates, locate_obstacles, process_frame,
    ColumnOutcome, SamplingReport,
};
pub use occupancy::{create_occupancy_map, CellState, MapExtents, OccupancyMap};
pub use projection::{
    determine_location_of_pixel_offset, determine_pixel_offset_of_location, DepthParameters,
};
pub use stereo::{
    BlockMatcher, DepthError, DepthEstimate, DepthEstimator, Radii, SearchParameters, StereoImage,
};
pub use thread_pool::SamplingPoolConfig;

#[cfg(feature = "parallel")]
pub use obstacles::locate_obstacles_parallel;
#[cfg(feature = "parallel")]
pub use thread_pool::create_sampling_pool;
