//! Configuration Module - TOML file describing the rig, map and search
//!
//! - config_data.rs: PerceptionConfig
//! - config_operations.rs: loading and validation

pub mod config_data;
pub mod config_operations;

pub use config_data::PerceptionConfig;

pub use config_operations::{load_config, parse_config, validate_config};
