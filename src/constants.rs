//! Default values shared by configuration and tests.
//!
//! Lengths are in millimetres throughout; the camera values describe the rig
//! used for the reference stereo pairs.

/// Camera model defaults
pub mod camera {
    /// Distance from the lens to the sensor plane
    pub const FOCAL_LENGTH: f64 = 24.0;

    /// Physical size of one sensor pixel
    pub const PIXEL_SCALE: f64 = 0.00694;

    /// Baseline between the left and right cameras
    pub const CAMERA_DISPLACEMENT: f64 = 100.0;
}

/// Occupancy map defaults
pub mod map {
    /// Edge length of one cubic cell
    pub const CELL_SIZE: i64 = 100;

    pub const X_MAX: i64 = 4800;
    pub const Y_MAX: i64 = 500;
    pub const Z_MAX: i64 = 10000;

    /// Upper bound on cells in a single map (1 byte per cell)
    pub const MAX_CELLS: usize = 256 * 1024 * 1024;
}

/// Patch search defaults
pub mod search {
    /// Half-size of the patch compared between images
    pub const NEIGHBOURHOOD_RADII: (u32, u32) = (15, 15);

    /// Where the search window is centred, relative to the probed pixel
    pub const SEARCH_OFFSET: (i64, i64) = (-250, 0);

    /// Half-size of the search window
    pub const SEARCH_RADII: (u32, u32) = (250, 100);

    /// Matches costing more than this are treated as no match
    pub const MAX_COST: u64 = 1_000_000;
}
