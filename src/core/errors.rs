//! Error types for the table extraction pipeline.
//!
//! This module defines the errors that can occur while turning a scanned
//! image into a table: malformed input at the pipeline boundary,
//! configuration problems, and failures reported by the cell recognizer.
//! Utility constructors attach context when building these errors.

use thiserror::Error;

/// Enum representing the errors that can occur during table extraction.
///
/// Only malformed input at the boundary is a hard failure; everything that
/// goes wrong midstream (missing grid lines, unreadable cells) degrades to
/// empty values instead of surfacing one of these variants.
#[derive(Error, Debug)]
pub enum GridScanError {
    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error reported by a cell recognizer.
    ///
    /// The pipeline converts this into an empty cell; it reaches callers
    /// only when they invoke a recognizer directly.
    #[error("recognition failed: {context}")]
    Recognition {
        /// Additional context about the failed recognition.
        context: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Utility constructors for building errors with context.
impl GridScanError {
    /// Creates a GridScanError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    ///
    /// # Returns
    ///
    /// A GridScanError instance.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a GridScanError for configuration errors.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    ///
    /// # Returns
    ///
    /// A GridScanError instance.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates a GridScanError for a failed recognition without an
    /// underlying source error.
    pub fn recognition(context: impl Into<String>) -> Self {
        Self::Recognition {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a GridScanError for a failed recognition, keeping the
    /// underlying error as the source.
    ///
    /// # Arguments
    ///
    /// * `context` - Additional context about the failed recognition.
    /// * `error` - The underlying error that caused this error.
    pub fn recognition_with_source(
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Recognition {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a GridScanError for validation errors.
    ///
    /// # Arguments
    ///
    /// * `component` - The component where the error occurred.
    /// * `field` - The field where the error occurred.
    /// * `expected` - The expected value.
    /// * `actual` - The actual value.
    ///
    /// # Returns
    ///
    /// A GridScanError instance.
    pub fn validation_error(component: &str, field: &str, expected: &str, actual: &str) -> Self {
        Self::InvalidInput {
            message: format!(
                "Validation failed in {}: field '{}' expected {}, but got '{}'",
                component, field, expected, actual
            ),
        }
    }
}
