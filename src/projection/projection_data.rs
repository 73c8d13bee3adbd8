//! Camera model data - NO METHODS
//!
//! All transformations happen in projection_operations.rs

use crate::constants::camera;
use serde::{Deserialize, Serialize};

/// Parameters of the stereo camera rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthParameters {
    /// Distance from the lens to the camera plane
    pub focal_length: f64,

    /// Length of one pixel on the camera plane
    pub pixel_scale: f64,

    /// Baseline between the two cameras, only read by depth estimators
    pub camera_displacement: f64,
}

impl Default for DepthParameters {
    fn default() -> Self {
        Self {
            focal_length: camera::FOCAL_LENGTH,
            pixel_scale: camera::PIXEL_SCALE,
            camera_displacement: camera::CAMERA_DISPLACEMENT,
        }
    }
}
