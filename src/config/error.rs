//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Socket file must be a bare file name, got '{0}'")]
    InvalidSocketFile(String),

    #[error("Backchannel timeout must be between 1 and {max} ms, got {actual}")]
    InvalidTimeout { actual: u64, max: u64 },

    #[error("Unknown lifecycle event type: {0}")]
    UnknownEventType(String),

    #[error("Lifecycle event {0} is published by the registration flow and cannot be forwarded")]
    ReservedEventType(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Invalid forwarding header name: {0}")]
    InvalidHeaderName(String),
}
