//! I/O error types
//!
//! The pipeline itself never touches a file; this crate converts at the
//! boundary, so decode and encode failures from the codec library are
//! mapped into one error type here.

use thiserror::Error;

/// Error type for image file operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core library (invalid dimensions, ...)
    #[error("core error: {0}")]
    Core(#[from] offcell_core::Error),

    /// The codec failed to decode the file
    #[error("decode error: {0}")]
    Decode(String),

    /// The codec failed to encode the output
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
