//! Shared error types for the application

use super::Field;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A required measurement was blank, not a number, or not strictly positive.
///
/// The display text is the message shown to the person entering the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[error("Please enter a value greater than 0 for {field}.")]
pub struct InvalidFieldError {
    pub field: Field,
}

impl InvalidFieldError {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

/// Main error type for smhm-id operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// TOML parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
