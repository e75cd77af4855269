//! Error types for mesh I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing mesh files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A face references a vertex index outside the vertex array.
    #[error("face references vertex {index} but mesh has {vertex_count} vertices")]
    FaceOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
