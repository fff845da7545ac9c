//! Error types for the TypeScriptEx core.
//!
//! Covers configuration loading, catalog construction and session I/O.
//! Lesson failures are deliberately absent: they are isolated by the
//! runner and reported as [`crate::RunOutcome`] values instead.

use std::path::PathBuf;

/// A specialized `Result` type for core operations.
pub type Result<T> = std::result::Result<T, TsexError>;

/// Errors that can occur while setting up or driving the lesson menu.
///
/// Variants that the user can fix carry an actionable suggestion.
#[derive(Debug, thiserror::Error)]
pub enum TsexError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid JSON syntax in the configuration file.
    #[error("Invalid JSON in config file '{path}': {message}\n\nSuggestion: Validate your tsex.json with a JSON linter")]
    ConfigParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {message}\n\nSuggestion: {suggestion}")]
    ConfigValidationError {
        /// Description of the validation failure.
        message: String,
        /// Actionable suggestion for the user.
        suggestion: String,
    },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// Two catalog entries share the same lesson id.
    #[error("Duplicate lesson id {id} in catalog")]
    DuplicateLessonId {
        /// The id that appeared more than once.
        id: u32,
    },

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// Reading from the interactive session failed.
    #[error("Failed to read from the session: {0}")]
    SessionRead(#[source] std::io::Error),
}

impl TsexError {
    /// Creates a new `ConfigParseError` with the given path and message.
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new `ConfigValidationError` with the given message and suggestion.
    #[must_use]
    pub fn config_validation(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::ConfigValidationError {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Creates a new `DuplicateLessonId` error.
    #[must_use]
    pub const fn duplicate_lesson_id(id: u32) -> Self {
        Self::DuplicateLessonId { id }
    }
}
