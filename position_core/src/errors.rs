//! # Error Types
//!
//! Structured error types for position_core. The interactive model never
//! fails: modes come from a closed enumeration and sliders clamp their own
//! range. Errors only arise where text crosses into the model (command-line
//! arguments, typed offsets, config files).
//!
//! ## Example
//!
//! ```rust
//! use position_core::errors::{VisualizerError, VisualizerResult};
//! use position_core::PositionMode;
//!
//! fn pick(input: &str) -> VisualizerResult<PositionMode> {
//!     PositionMode::from_str_flexible(input)
//! }
//!
//! assert!(pick("absolute").is_ok());
//! assert_eq!(pick("floating").unwrap_err().error_code(), "UNKNOWN_MODE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for position_core operations
pub type VisualizerResult<T> = Result<T, VisualizerError>;

/// Structured error type for text-facing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum VisualizerError {
    /// Text did not name one of the five position modes
    #[error(
        "Unknown position mode: '{input}' (expected static, relative, absolute, fixed or sticky)"
    )]
    UnknownMode { input: String },

    /// Offset text is not an integer
    #[error("Invalid offset for '{field}': {input} - {reason}")]
    InvalidOffset {
        field: String,
        input: String,
        reason: String,
    },

    /// Offset is an integer but outside the slider range
    #[error("Offset {value} is out of range [{min}, {max}]")]
    OffsetOutOfRange { value: i64, min: i32, max: i32 },

    /// Command-line argument not understood
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Config file exists but could not be used
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// Terminal or file I/O failure at a binary boundary
    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },
}

impl VisualizerError {
    /// Create an UnknownMode error
    pub fn unknown_mode(input: impl Into<String>) -> Self {
        VisualizerError::UnknownMode {
            input: input.into(),
        }
    }

    /// Create an InvalidOffset error
    pub fn invalid_offset(
        field: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VisualizerError::InvalidOffset {
            field: field.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        VisualizerError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        VisualizerError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the operation that produced it
    pub fn io(operation: impl Into<String>, err: &std::io::Error) -> Self {
        VisualizerError::Io {
            operation: operation.into(),
            reason: err.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            VisualizerError::UnknownMode { .. } => "UNKNOWN_MODE",
            VisualizerError::InvalidOffset { .. } => "INVALID_OFFSET",
            VisualizerError::OffsetOutOfRange { .. } => "OFFSET_OUT_OF_RANGE",
            VisualizerError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            VisualizerError::ConfigError { .. } => "CONFIG_ERROR",
            VisualizerError::Io { .. } => "IO_ERROR",
        }
    }
}
