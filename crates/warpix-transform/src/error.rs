//! Error types for warpix-transform

use thiserror::Error;

/// Errors that can occur during warp resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] warpix_core::Error),

    /// Alias factor of zero; at least one sample per pixel is required
    #[error("alias factor must be at least 1, got {0}")]
    InvalidAlias(u32),

    /// Scale factor that produces no image
    #[error("scale factor must be positive, got {0}")]
    InvalidScaleFactor(f64),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
