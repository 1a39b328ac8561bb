//! Scaling built on the quad warp
//!
//! Axis-aligned special cases of [`warp`](crate::warp::warp): the
//! target is the source rectangle stretched to the requested size.

use crate::error::{TransformError, TransformResult};
use crate::warp::{WarpOptions, warp};
use warpix_core::{Quad, Raster};

/// Scale `src` by a uniform factor.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] unless `factor` is
/// finite and positive, and [`TransformError::InvalidAlias`] when
/// `alias` is 0.
pub fn scale(src: &Raster, factor: f64, alias: u32) -> TransformResult<Raster> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }
    let target = Quad::axis_aligned(
        0.0,
        0.0,
        src.width() as f64 * factor,
        src.height() as f64 * factor,
    );
    warp(src, &target, &scale_options(alias))
}

/// Resample `src` to exactly `width x height` pixels.
///
/// # Errors
///
/// Returns [`TransformError::InvalidAlias`] when `alias` is 0.
pub fn scale_to_size(src: &Raster, width: u32, height: u32, alias: u32) -> TransformResult<Raster> {
    let target = Quad::axis_aligned(0.0, 0.0, width as f64, height as f64);
    warp(src, &target, &scale_options(alias))
}

fn scale_options(alias: u32) -> WarpOptions {
    WarpOptions {
        alias,
        ..WarpOptions::default()
    }
}
