//! Occupancy Module - fixed-extent 3D grid of binary cells
//!
//! - occupancy_data.rs: CellState, MapExtents and the OccupancyMap storage
//! - occupancy_operations.rs: construction and bounds-checked addressing

pub mod occupancy_data;
pub mod occupancy_operations;

pub use occupancy_data::{CellState, MapExtents, OccupancyMap};

pub use occupancy_operations::{
    // Construction
    create_occupancy_map,
    map_dimensions,
    validate_map_extents,

    // Addressing
    cell,
    cell_index,
    cell_mut,
    cell_origin,
    is_within_extents,
    set_cell,
    set_cell_by_index,

    // Whole-map
    clear_occupancy_map,
    occupied_count,
    occupied_locations,
};
