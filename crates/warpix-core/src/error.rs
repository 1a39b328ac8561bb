//! Error types for warpix-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Only true precondition violations are errors; expected geometric
//! outcomes (parallel lines, points outside a shape) are `Option`s on
//! the operations themselves.

use thiserror::Error;

/// Warpix core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Quadrilateral constructed with a vertex count other than 4
    #[error("a quadrilateral requires exactly 4 vertices, got {count}")]
    InvalidShape { count: usize },

    /// Palette constructed with no colors
    #[error("a palette requires at least the transparent sentinel color")]
    EmptyPalette,

    /// Raster constructed from rows of unequal length
    #[error("raster row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinate outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Palette sheet requested with no palettes
    #[error("a palette sheet requires at least one palette")]
    EmptyGrid,
}

/// Result type alias for warpix core operations
pub type Result<T> = std::result::Result<T, Error>;
