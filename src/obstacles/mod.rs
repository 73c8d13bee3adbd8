//! Obstacles Module - filling an occupancy map from a stereo pair
//!
//! - obstacles_data.rs: per-column outcomes and the per-frame report
//! - obstacles_operations.rs: far-plane sampling, sequential and parallel

pub mod obstacles_data;
pub mod obstacles_operations;

pub use obstacles_data::{ColumnOutcome, SamplingReport};

pub use obstacles_operations::{
    far_plane_probes,
    locate_obstacle_at_coordinates,
    locate_obstacles,
    process_frame,
    sample_column,
};

#[cfg(feature = "parallel")]
pub use obstacles_operations::locate_obstacles_parallel;
