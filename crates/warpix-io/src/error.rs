//! I/O error types
//!
//! Provides a unified error type for raster and palette file
//! operations. Format-specific library errors are mapped into
//! `IoError` variants so callers only handle one error type.

use thiserror::Error;

/// Error type for warpix I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] warpix_core::Error),

    /// The input is not a format this crate reads
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Legacy palette data of the wrong size
    #[error("legacy palette data must be {expected} bytes, got {actual}")]
    BadPaletteLength { expected: usize, actual: usize },
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
