//! Configuration data - NO METHODS
//!
//! Every section falls back to its defaults, so a config file only needs the
//! values it changes:
//!
//! ```toml
//! [map]
//! x_max = 2000
//! y_max = 50
//! z_max = 5000
//! cell_size = 25
//!
//! [depth]
//! camera_displacement = 120.0
//! ```

use crate::occupancy::MapExtents;
use crate::projection::DepthParameters;
use crate::stereo::SearchParameters;
use crate::thread_pool::SamplingPoolConfig;
use serde::{Deserialize, Serialize};

/// Complete configuration for processing stereo frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptionConfig {
    pub map: MapExtents,
    pub depth: DepthParameters,
    pub search: SearchParameters,
    pub sampling: SamplingPoolConfig,
}
