//! Error type for file-level matrix operations
//!
//! Wraps the core [`MatrixError`] taxonomy with the context only the I/O
//! layer knows about: which file, which line, which OS error.

use smtx_core::MatrixError;
use thiserror::Error;

/// Errors raised while loading, combining or saving matrices
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened, read or written
    #[error("Unable to access {origin}: {source}")]
    FileUnavailable {
        /// Path or stream name
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A line of a matrix file could not be decoded
    #[error("{origin}:{line}: {source}")]
    Malformed {
        /// Path or stream name
        origin: String,
        /// 1-based line number
        line: usize,
        #[source]
        source: MatrixError,
    },

    /// Shape, choice or arithmetic errors from the core
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl Error {
    /// The core error kind this error corresponds to
    pub fn kind(&self) -> MatrixError {
        match self {
            Error::FileUnavailable { .. } => MatrixError::FileUnavailable,
            Error::Malformed { .. } => MatrixError::MalformedFile,
            Error::Matrix(kind) => *kind,
        }
    }
}

/// Result type for file-level operations
pub type Result<T> = std::result::Result<T, Error>;
