/*!
 * Error types for the respack application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error enumerating a source directory
    #[error("Failed to read source directory {path:?}: {message}")]
    DirectoryAccess {
        /// Directory that could not be enumerated
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Error parsing a source file as JSON
    #[error("Failed to parse JSON in {path:?}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parser error
        source: serde_json::Error,
    },

    /// Error from a file operation
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Build a parse error for the given file
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Build a directory access error for the given directory
    pub fn directory_access(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            message: message.into(),
        }
    }
}
