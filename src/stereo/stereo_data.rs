//! Stereo search data - NO METHODS

use crate::constants::search;
use crate::location::Offset;
use serde::{Deserialize, Serialize};

/// Half-sizes of a rectangular pixel region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Radii {
    pub x: u32,
    pub y: u32,
}

/// How a depth estimator searches the second image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    /// Patch compared around each pixel
    pub neighbourhood_radii: Radii,

    /// Centre of the search window relative to the probed pixel
    pub search_offset: Offset,

    /// Extent of the search window
    pub search_radii: Radii,

    /// Best matches costing more than this count as no match
    pub max_cost: u64,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            neighbourhood_radii: Radii {
                x: search::NEIGHBOURHOOD_RADII.0,
                y: search::NEIGHBOURHOOD_RADII.1,
            },
            search_offset: Offset {
                x: search::SEARCH_OFFSET.0,
                y: search::SEARCH_OFFSET.1,
            },
            search_radii: Radii {
                x: search::SEARCH_RADII.0,
                y: search::SEARCH_RADII.1,
            },
            max_cost: search::MAX_COST,
        }
    }
}

/// What a depth estimator reports for one probed pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthEstimate {
    /// Distance from the camera along the pixel's ray
    pub depth: f64,

    /// Offset from the image centre of the pixel the depth belongs to
    pub centre_offset: Offset,
}

/// Why no depth could be produced for a pixel
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DepthError {
    #[error("No match within cost {max_cost} (best {best_cost})")]
    NoMatch { best_cost: u64, max_cost: u64 },

    #[error("Patch at ({x}, {y}) does not fit inside the image")]
    OffImage { x: i64, y: i64 },

    #[error("Zero disparity, obstacle at infinite depth")]
    ZeroDisparity,

    #[error("Estimated depth {depth} is not a positive finite distance")]
    InvalidDepth { depth: f64 },
}
