//! Core error types for pomox-core.
//!
//! Everything that can abort an operation funnels into [`CoreError`].
//! Side-effect failures inside hooks are logged instead of propagated, so
//! most of these only surface from the timer controller and the CLI.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type for pomox-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors (durations, arguments)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Focusmate session lookup errors
    #[error(transparent)]
    Focusmate(#[from] FocusmateError),

    /// Integration-related errors
    #[error("Integration error for '{service}': {message}")]
    Integration {
        service: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A timer is already running
    #[error("Pomodoro already active (ends at {end_time})")]
    AlreadyActive { end_time: DateTime<Utc> },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn integration(service: &str, message: impl Into<String>) -> Self {
        CoreError::Integration {
            service: service.to_string(),
            message: message.into(),
            source: None,
        }
    }

    pub fn integration_with_source(
        service: &str,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CoreError::Integration {
            service: service.to_string(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the schema
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Home directory could not be resolved
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn duration(message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: "duration".to_string(),
            message: message.into(),
        }
    }
}

/// Focusmate session lookup errors.
#[derive(Error, Debug)]
pub enum FocusmateError {
    #[error(
        "Focusmate API key not configured. Add your API key to ~/.pomox/config.json \
         under integrations.focusmate.apiKey"
    )]
    MissingApiKey,

    #[error("Invalid Focusmate API key")]
    InvalidApiKey,

    #[error("Focusmate API error: {status}")]
    Api { status: u16 },

    #[error("No active Focusmate session found")]
    NoActiveSession,

    #[error("Focusmate request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed Focusmate response: {0}")]
    Decode(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
