//! Error types for benchmark preparation

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the benchprep transformations
#[derive(Debug, Error)]
pub enum BenchError {
    /// Fewer inputs than the operation needs
    #[error("at least {required} input files are required, got {found}")]
    NotEnoughInputs {
        /// Minimum number of inputs
        required: usize,
        /// Number of inputs supplied
        found: usize,
    },

    /// Copy count is not an integer
    #[error("copy count must be an integer, got '{0}'")]
    InvalidCopyCount(String),

    /// JSON top-level value is not an object
    #[error("unsupported JSON content type: {0}")]
    UnsupportedContent(&'static str),

    /// External program could not be started
    #[error("failed to run '{}': {source}", .program.display())]
    ToolSpawn {
        /// Program that was invoked
        program: PathBuf,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Writing a progress report failed
    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for benchprep operations
pub type Result<T> = std::result::Result<T, BenchError>;
