//! warpix-test - Regression test harness for warpix
//!
//! Provides the [`RegParams`] comparison framework used by the
//! `tests/*_reg.rs` suites across the workspace, plus deterministic
//! fixture builders so tests never depend on files on disk.
//!
//! # Usage
//!
//! ```ignore
//! use warpix_test::{RegParams, checkerboard};
//!
//! let mut rp = RegParams::new("warp");
//! rp.compare_values(4.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment variables
//!
//! - `REGTEST_MODE`: set to "display" to report mismatches without
//!   failing

mod params;

pub use params::{RegParams, RegTestMode};

use warpix_core::{Color, Palette, Raster};

/// Initialize the `log` facade for a test binary. Safe to call more
/// than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A raster filled with one color.
pub fn solid(width: u32, height: u32, color: Color) -> Raster {
    let rows = vec![vec![color; width as usize]; height as usize];
    Raster::from_rows(rows).expect("rows are rectangular")
}

/// A two-color checkerboard raster, `a` in the top-left corner.
pub fn checkerboard(width: u32, height: u32, a: Color, b: Color) -> Raster {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if (x + y) % 2 == 0 { a } else { b })
                .collect()
        })
        .collect();
    Raster::from_rows(rows).expect("rows are rectangular")
}

/// A raster ramping red left to right and green top to bottom, handy
/// for spotting flipped or scaled output.
pub fn gradient(width: u32, height: u32) -> Raster {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let r = (x * 255 / width.max(1)) as u8;
                    let g = (y * 255 / height.max(1)) as u8;
                    Color::rgb(r, g, 128)
                })
                .collect()
        })
        .collect();
    Raster::from_rows(rows).expect("rows are rectangular")
}

/// A four-entry palette: the transparent sentinel plus pure red,
/// green, and blue.
pub fn rgb_palette() -> Palette {
    Palette::new(vec![
        Color::transparent(),
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255),
    ])
    .expect("non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        let r = solid(3, 2, Color::rgb(5, 5, 5));
        assert_eq!((r.width(), r.height()), (3, 2));
        assert!(r.pixels().iter().all(|c| *c == Color::rgb(5, 5, 5)));
    }

    #[test]
    fn test_checkerboard_alternates() {
        let r = checkerboard(2, 2, Color::rgb(1, 0, 0), Color::rgb(2, 0, 0));
        assert_eq!(r.get(0, 0), Some(&Color::rgb(1, 0, 0)));
        assert_eq!(r.get(1, 0), Some(&Color::rgb(2, 0, 0)));
        assert_eq!(r.get(0, 1), Some(&Color::rgb(2, 0, 0)));
        assert_eq!(r.get(1, 1), Some(&Color::rgb(1, 0, 0)));
    }

    #[test]
    fn test_gradient_ramps() {
        let r = gradient(4, 4);
        assert!(r.get(3, 0).unwrap().r > r.get(0, 0).unwrap().r);
        assert!(r.get(0, 3).unwrap().g > r.get(0, 0).unwrap().g);
    }

    #[test]
    fn test_reg_params_verdict() {
        let mut rp = RegParams::new("selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(!rp.cleanup());
    }
}
