//! Thread Pool Module - workers for the parallel obstacle sampler
//!
//! - thread_pool_data.rs: SamplingPoolConfig
//! - thread_pool_operations.rs: pool construction (requires the `parallel` feature)

pub mod thread_pool_data;
pub mod thread_pool_operations;

pub use thread_pool_data::SamplingPoolConfig;

#[cfg(feature = "parallel")]
pub use thread_pool_operations::{create_sampling_pool, resolve_worker_threads};
