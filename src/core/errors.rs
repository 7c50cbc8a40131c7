//! Error types for the skald-rs library.
//!
//! Structured error types that preserve context and enable proper error
//! propagation throughout the analysis pipeline.

use std::io;

use thiserror::Error;

/// Main result type for skald operations.
pub type Result<T> = std::result::Result<T, SkaldError>;

/// Comprehensive error type for all skald operations.
#[derive(Error, Debug)]
pub enum SkaldError {
    /// I/O related errors (file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Corpus alignment errors
    #[error("Alignment error: {message}")]
    Alignment {
        /// Error description
        message: String,
        /// Input path that could not be aligned
        path: Option<String>,
    },

    /// Similarity metric computation errors
    #[error("Metric error: {message}")]
    Metric {
        /// Error description
        message: String,
        /// Context of the failed comparison
        context: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl SkaldError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new alignment error
    pub fn alignment(message: impl Into<String>) -> Self {
        Self::Alignment {
            message: message.into(),
            path: None,
        }
    }

    /// Create a new alignment error naming the offending input
    pub fn alignment_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Alignment {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new metric computation error
    pub fn metric(message: impl Into<String>) -> Self {
        Self::Metric {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new metric computation error with comparison context
    pub fn metric_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Metric {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Implement From traits for common error types
impl From<io::Error> for SkaldError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for SkaldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for SkaldError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_message() {
        let err = SkaldError::config("unknown metric name");
        assert_eq!(err.to_string(), "Configuration error: unknown metric name");

        let err = SkaldError::alignment_with_path("line count mismatch", "web.txt");
        assert!(err.to_string().contains("line count mismatch"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: SkaldError = io_err.into();
        assert!(matches!(err, SkaldError::Io { .. }));
    }
}
