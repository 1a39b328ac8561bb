//! Warpix - Quadrilateral image warping and palette toolkit
//!
//! Warpix maps one quadrilateral's interior onto another and resamples
//! pixel data across that mapping, producing a warped copy of a source
//! image against an arbitrary four-point target shape.
//!
//! # Overview
//!
//! - Geometry kernel: [`Coord`], [`Vector`], [`Line`], [`Quad`] with
//!   point containment and the quad-to-quad point transform
//! - [`Color`] and [`Palette`] for full and legacy (5/6/5-bit)
//!   precision pixel values, nearest-color search, and palette swaps
//! - [`Raster`] pixel grids with composition and palette sheets
//! - [`transform`] for the supersampling warp resampler and scaling
//! - [`io`] for PNG rasters and legacy palette files
//!
//! # Example
//!
//! ```
//! use warpix::{Color, Raster};
//! use warpix::transform::{warp_points, WarpOptions};
//!
//! let src = Raster::from_rows(vec![
//!     vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
//!     vec![Color::rgb(0, 0, 255), Color::rgb(255, 255, 255)],
//! ])
//! .unwrap();
//!
//! // Warp the 2x2 image onto a skewed four-point shape
//! let out = warp_points(
//!     &src,
//!     [(2.0, 0.0), (8.0, 2.0), (7.0, 7.0), (0.0, 6.0)],
//!     &WarpOptions::default(),
//! )
//! .unwrap();
//! assert!(out.width() > 0 && out.height() > 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use warpix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use warpix_io as io;
pub use warpix_transform as transform;
