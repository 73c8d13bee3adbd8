//! Thread Pool Operations
#![cfg(feature = "parallel")]

use super::thread_pool_data::SamplingPoolConfig;
use crate::error::{PerceptionError, PerceptionResult};

/// Number of workers a config asks for
pub fn resolve_worker_threads(config: &SamplingPoolConfig) -> usize {
    if config.worker_threads == 0 {
        num_cpus::get()
    } else {
        config.worker_threads
    }
}

/// Build a dedicated rayon pool for `locate_obstacles_parallel`.
/// `process_frame` builds one per frame; direct callers of the sampler run it
/// inside the pool with `pool.install(..)`.
pub fn create_sampling_pool(config: &SamplingPoolConfig) -> PerceptionResult<rayon::ThreadPool> {
    let threads = resolve_worker_threads(config);
    let name = config.thread_name.clone();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |index| format!("{}-{}", name, index))
        .build()
        .map_err(|e| PerceptionError::ThreadPool {
            error: e.to_string(),
        })?;

    log::info!("[create_sampling_pool] Started {} sampling workers", threads);
    Ok(pool)
}
