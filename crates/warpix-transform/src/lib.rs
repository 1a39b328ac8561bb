//! warpix-transform - Quadrilateral warp resampling
//!
//! This crate provides the resampling operations built on the
//! warpix-core geometry kernel:
//!
//! - Warping a raster onto an arbitrary simple quadrilateral, with
//!   supersampling, an optional crop viewport, and origin re-basing
//! - Uniform and to-size scaling as axis-aligned special cases
//! - An injectable [`Metrics`] collaborator for operation timings
//!
//! The warp is a ray/edge-interpolation mapping, not a projective
//! transform; straight lines through the shape stay straight but
//! spacing is not perspective-accurate.

mod error;
pub mod metrics;
pub mod scale;
pub mod warp;

pub use error::{TransformError, TransformResult};
pub use metrics::{LogMetrics, Metrics, NoopMetrics};
pub use scale::{scale, scale_to_size};
pub use warp::{WarpOptions, warp, warp_points, warp_with_metrics};
