//! Error types for knight_log
//!
//! This module defines all error types used throughout the logging pipeline.
//! Every error is surfaced synchronously at the call site of the log
//! invocation that triggered it; nothing is delivered in the background.

use thiserror::Error;

/// Main error type for knight_log operations
#[derive(Error, Debug)]
pub enum KnightLogError {
    /// A template placeholder has no corresponding positional argument
    #[error("Missing parameter for key: {key}")]
    MissingParameter { key: String },

    /// A level value outside the known enumeration
    #[error("Unknown LoggingLevel {0}")]
    UnknownLevel(String),

    /// The color formatter has no color registered for a level
    #[error("No color defined for level {0}")]
    UnsupportedLayout(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// I/O errors (file sink writes, console writes)
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for knight_log operations
pub type Result<T> = std::result::Result<T, KnightLogError>;

impl KnightLogError {
    /// Create a new missing parameter error
    pub fn missing_parameter<S: Into<String>>(key: S) -> Self {
        Self::MissingParameter { key: key.into() }
    }

    /// Create a new unknown level error
    pub fn unknown_level<S: Into<String>>(level: S) -> Self {
        Self::UnknownLevel(level.into())
    }

    /// Create a new unsupported layout error
    pub fn unsupported_layout<S: Into<String>>(level: S) -> Self {
        Self::UnsupportedLayout(level.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Check if a caller may reasonably retry the failed log call
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "template",
            Self::UnknownLevel(_) => "level",
            Self::UnsupportedLayout(_) => "layout",
            Self::ConfigError(_) | Self::ConfigFileMissing(_) => "config",
            Self::IoError { .. } => "io",
            Self::SerializationError { .. } => "serialization",
            Self::TomlError { .. } => "toml",
        }
    }
}
