//! Thread Pool Data - NO METHODS

use serde::{Deserialize, Serialize};

/// How `process_frame` schedules obstacle sampling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPoolConfig {
    /// Sample columns on worker threads instead of the calling thread
    pub parallel: bool,

    /// Worker count, 0 for one per logical CPU
    pub worker_threads: usize,

    /// Prefix for worker thread names
    pub thread_name: String,
}

impl Default for SamplingPoolConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            worker_threads: 0,
            thread_name: "obstacle-sampler".to_string(),
        }
    }
}
