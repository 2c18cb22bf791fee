//! Application-wide error type using thiserror.

use thiserror::Error;

/// Result type alias for Skye operations.
pub type Result<T> = std::result::Result<T, SkyeError>;

/// Main error type shared by the workspace crates.
#[derive(Error, Debug)]
pub enum SkyeError {
    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation error for user input or configuration values.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },
}

impl SkyeError {
    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error tied to a field.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Short, stable name of the error variant.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "Config",
            Self::Validation { .. } => "Validation",
        }
    }
}
