//! Obstacle sampling data - NO METHODS

use crate::location::{Location, Offset};
use crate::stereo::DepthError;

/// Result of probing one grid column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnOutcome {
    /// An obstacle was found inside the map at cell `index`
    Occupied { location: Location, index: usize },

    /// An obstacle was found but lies outside the map extents
    OutOfRange { location: Location },

    /// The depth estimator had no answer for the probed pixel
    NoDetection { error: DepthError },

    /// The probe projects outside the left image
    OffImage { offset: Offset },
}

/// Counters for one sampling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingReport {
    pub columns_sampled: usize,

    /// Occupied writes, including repeated writes to the same cell
    pub cells_marked: usize,

    pub out_of_range: usize,
    pub no_detection: usize,
    pub off_image: usize,
}
