//! Error types for the manifest patcher

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for patcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while patching a manifest
#[derive(Error, Debug)]
pub enum Error {
    /// Source file does not exist or is not readable
    #[error("File '{}' not found", .path.display())]
    NotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// Source content is not valid JSON
    #[error("Invalid JSON format in '{}': {msg}", .path.display())]
    Format {
        /// Path of the offending file
        path: PathBuf,
        /// Parser message describing the defect
        msg: String,
    },

    /// Destination could not be written
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        /// Path of the destination file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Unexpected(String),
}
