//! Core error types for studyhelper-core.
//!
//! Every fallible operation in the library returns [`CoreError`]. The
//! variants follow the failure taxonomy the stores and codecs share:
//! validation, parse, schema, I/O and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyhelper-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected input; nothing was mutated.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A task record has no usable discriminator.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// In-memory data could not be encoded for saving.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text was empty or whitespace only
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// A card operation was requested with no active deck
    #[error("No deck selected")]
    NoDeckSelected,
}

impl ValidationError {
    /// Fails with [`ValidationError::EmptyField`] when `value` is blank.
    pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::EmptyField { field })
        } else {
            Ok(())
        }
    }
}

/// Malformed persisted text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document as a whole is not valid JSON of the expected shape
    #[error("malformed document: {0}")]
    Document(#[source] serde_json::Error),

    /// A single record has the wrong shape
    #[error("malformed record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Task records whose variant cannot be determined.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("record {index} has no \"type\" discriminator")]
    MissingDiscriminator { index: usize },

    #[error("record {index} has unknown task type '{value}'")]
    UnknownDiscriminator { index: usize, value: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl CoreError {
    /// True for failures caused by bad persisted content rather than the
    /// filesystem or the caller.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, CoreError::Parse(_) | CoreError::Schema(_))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_whitespace() {
        assert_eq!(
            ValidationError::require_text("title", "  \t"),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert!(ValidationError::require_text("title", " x ").is_ok());
    }

    #[test]
    fn display_mentions_field() {
        let err: CoreError = ValidationError::EmptyField { field: "deck name" }.into();
        assert_eq!(err.to_string(), "Validation error: deck name cannot be empty");
    }

    #[test]
    fn schema_errors_are_corrupt_data() {
        let err: CoreError = SchemaError::MissingDiscriminator { index: 0 }.into();
        assert!(err.is_corrupt_data());
        let io: CoreError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(!io.is_corrupt_data());
    }

    #[test]
    fn encode_failures_are_not_parse_errors() {
        let mut keyed = std::collections::BTreeMap::new();
        keyed.insert((1, 2), "pair keys cannot be JSON object keys");
        let source = serde_json::to_string(&keyed).unwrap_err();

        let err = CoreError::Encode(source);
        assert!(err.to_string().starts_with("Encode error: "));
        assert!(!err.to_string().contains("Parse error"));
        assert!(!err.is_corrupt_data());
    }
}
