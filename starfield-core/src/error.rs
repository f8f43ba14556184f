//! Error types for starfield

use thiserror::Error;

/// Main error type for starfield operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot compute a bounding volume over an empty point set")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for starfield operations
pub type Result<T> = std::result::Result<T, Error>;
