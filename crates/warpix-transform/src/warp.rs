//! Quadrilateral warp resampling
//!
//! The resampler maps a source raster onto an arbitrary target
//! quadrilateral. For every destination pixel it casts an `alias x
//! alias` grid of sub-pixel sample points back through the
//! quad-to-quad transform into source space, averages the colors it
//! finds there, and counts every missed sample (outside the target
//! shape or outside the source raster) as one fully transparent filler
//! unit in the mean. Cost is `O(width * height * alias^2)`, which
//! dominates everything else in the library.
//!
//! The warp inherits the geometry kernel's ray/edge interpolation, so
//! it is deliberately not perspective-correct; see
//! [`Quad::transform`].

use crate::error::{TransformError, TransformResult};
use crate::metrics::{Metrics, NoopMetrics};
use std::time::Instant;
use warpix_core::{Color, Coord, Quad, Raster, Vector};

/// Configuration for [`warp`].
#[derive(Debug, Clone)]
pub struct WarpOptions {
    /// Crop window. When set, the output covers the viewport's
    /// bounding box instead of the target quad's, re-based so output
    /// pixel (0, 0) sits at the viewport minimum. Viewport coordinates
    /// are interpreted in the warp's working space, so after re-basing
    /// when `strip` is on.
    pub viewport: Option<Quad>,
    /// Supersampling factor; `alias * alias` sample points are taken
    /// per destination pixel. Must be at least 1.
    pub alias: u32,
    /// Translate the target quad so its minimum x/y sit at the origin
    /// before warping, avoiding a blank border above and left of the
    /// shape.
    pub strip: bool,
}

impl Default for WarpOptions {
    fn default() -> Self {
        Self {
            viewport: None,
            alias: 4,
            strip: true,
        }
    }
}

/// Warp `src` onto the quadrilateral `target`.
///
/// Equivalent to [`warp_with_metrics`] with timings discarded.
pub fn warp(src: &Raster, target: &Quad, options: &WarpOptions) -> TransformResult<Raster> {
    warp_with_metrics(src, target, options, &NoopMetrics)
}

/// Warp `src` onto the quadrilateral described by four `(x, y)` corner
/// points in TL, TR, BR, BL order.
pub fn warp_points(
    src: &Raster,
    points: [(f64, f64); 4],
    options: &WarpOptions,
) -> TransformResult<Raster> {
    let corners = points.map(|(x, y)| Coord::new(x, y));
    warp(src, &Quad::from_corners(corners), options)
}

/// Warp `src` onto `target`, reporting the elapsed time to `metrics`
/// under the label `"warp"`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidAlias`] when `options.alias` is 0.
pub fn warp_with_metrics(
    src: &Raster,
    target: &Quad,
    options: &WarpOptions,
    metrics: &dyn Metrics,
) -> TransformResult<Raster> {
    if options.alias == 0 {
        return Err(TransformError::InvalidAlias(options.alias));
    }
    let started = Instant::now();

    // The warp works on its own copy of the shape; callers keep theirs
    // untouched.
    let mut target = target.clone();
    if options.strip {
        let offset = Vector::new(target.min_x(), target.min_y());
        target.translate(offset, -1.0);
    }

    let src_bounds = src.bounding_quad();
    let src_w = src.width() as f64;
    let src_h = src.height() as f64;

    let (origin_x, origin_y, out_w, out_h) = match &options.viewport {
        Some(view) => {
            let min_x = view.min_x();
            let min_y = view.min_y();
            (
                min_x,
                min_y,
                (view.max_x() - min_x).max(0.0).trunc() as u32,
                (view.max_y() - min_y).max(0.0).trunc() as u32,
            )
        }
        None => (
            0.0,
            0.0,
            target.max_x().max(0.0).trunc() as u32,
            target.max_y().max(0.0).trunc() as u32,
        ),
    };
    let view_bounds = options
        .viewport
        .as_ref()
        .map(|v| (v.min_x(), v.max_x(), v.min_y(), v.max_y()));

    let step = 1.0 / options.alias as f64;
    let mut out = Raster::new(out_w, out_h);
    // One sample buffer for the whole loop; cleared per pixel.
    let mut samples: Vec<Color> = Vec::with_capacity((options.alias * options.alias) as usize);
    let mut last = Color::transparent();

    for y in 0..out_h {
        for x in 0..out_w {
            let base_x = origin_x + x as f64;
            let base_y = origin_y + y as f64;

            if let Some((vx0, vx1, vy0, vy1)) = view_bounds
                && !(vx0 <= base_x && base_x <= vx1 && vy0 <= base_y && base_y <= vy1)
            {
                out.set(x, y, Color::transparent())?;
                last = Color::transparent();
                continue;
            }

            samples.clear();
            let mut fillers = 0usize;

            for sub_y in 0..options.alias {
                for sub_x in 0..options.alias {
                    let sample = Coord::new(
                        base_x + sub_x as f64 * step,
                        base_y + sub_y as f64 * step,
                    );
                    match target.transform(sample, &src_bounds) {
                        Some(p) if p.x >= 0.0 && p.x < src_w && p.y >= 0.0 && p.y < src_h => {
                            match src.get(p.x as u32, p.y as u32) {
                                Some(&color) => samples.push(color),
                                None => fillers += 1,
                            }
                        }
                        _ => fillers += 1,
                    }
                }
            }

            // With alias >= 1 every pixel yields samples or fillers;
            // the fallback to the scan-order predecessor guards the
            // degenerate empty case all the same.
            let color = if samples.is_empty() && fillers == 0 {
                last
            } else {
                Color::average_weighted(&samples, fillers)
            };
            out.set(x, y, color)?;
            last = color;
        }
    }

    metrics.record_duration("warp", started.elapsed().as_secs_f64());
    Ok(out)
}
