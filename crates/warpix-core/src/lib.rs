//! Warpix Core - Geometry and pixel data structures
//!
//! This crate provides the fundamental data structures used throughout
//! the warpix image warping library:
//!
//! - [`Coord`] / [`Vector`] / [`Line`] - the geometry kernel
//! - [`Quad`] - simple quadrilaterals and the quad-to-quad point
//!   transform
//! - [`Color`] - RGBA values in full or legacy (5/6/5-bit) precision
//! - [`Palette`] - ordered color sets with a transparent sentinel
//! - [`Raster`] - the row-major pixel grid, with composition and
//!   palette application
//!
//! The resampler that drives these types lives in `warpix-transform`;
//! file formats live in `warpix-io`.

pub mod color;
pub mod error;
pub mod geom;
pub mod palette;
pub mod raster;

pub use color::Color;
pub use error::{Error, Result};
pub use geom::{Coord, Line, Quad, Vector};
pub use palette::Palette;
pub use raster::Raster;
