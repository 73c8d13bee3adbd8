//! Error handling for stereo obstacle perception
//!
//! Geometry and configuration problems are reported through one error type so
//! that nothing reaches the occupancy map as NaN or as a silently clamped index.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the perception crate
#[derive(Debug)]
pub enum PerceptionError {
    // Geometry Errors
    DegenerateInput {
        operation: String,
        reason: String,
    },
    LocationOutOfBounds {
        location: (i64, i64, i64),
        extents: (i64, i64, i64),
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    ConfigLoad {
        path: String,
        error: String,
    },
    ParseError {
        value: String,
        expected_type: String,
    },

    // Threading Errors
    ThreadPool {
        error: String,
    },

    // Generic fallback for unexpected errors
    Internal {
        message: String,
    },
}

impl fmt::Display for PerceptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptionError::DegenerateInput { operation, reason } => {
                write!(f, "Degenerate input to {}: {}", operation, reason)
            }
            PerceptionError::LocationOutOfBounds { location, extents } => write!(
                f,
                "Location [{}, {}, {}] outside map extents X in [-{x}, {x}), Y in [-{y}, {y}), Z in [0, {z})",
                location.0,
                location.1,
                location.2,
                x = extents.0,
                y = extents.1,
                z = extents.2
            ),

            PerceptionError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            PerceptionError::ConfigLoad { path, error } => {
                write!(f, "Failed to load config {}: {}", path, error)
            }
            PerceptionError::ParseError {
                value,
                expected_type,
            } => write!(
                f,
                "Parse error: '{}' is not a valid {}",
                value, expected_type
            ),

            PerceptionError::ThreadPool { error } => {
                write!(f, "Thread pool error: {}", error)
            }

            PerceptionError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for PerceptionError {}

/// Type alias for Results in the perception crate
pub type PerceptionResult<T> = Result<T, PerceptionError>;

impl From<std::io::Error> for PerceptionError {
    fn from(error: std::io::Error) -> Self {
        PerceptionError::ConfigLoad {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for PerceptionError {
    fn from(error: toml::de::Error) -> Self {
        PerceptionError::ParseError {
            value: error.message().to_string(),
            expected_type: "perception config".to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_perception<F>(self, f: F) -> PerceptionResult<T>
    where
        F: FnOnce() -> PerceptionError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_perception<F>(self, f: F) -> PerceptionResult<T>
    where
        F: FnOnce() -> PerceptionError,
    {
        self.ok_or_else(f)
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> PerceptionResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> PerceptionResult<T> {
        self.map_err(|e| PerceptionError::Internal {
            message: format!("{}: {}", msg, e),
        })
    }
}
