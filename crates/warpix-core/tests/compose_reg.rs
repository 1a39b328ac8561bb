//! Composition regression test
//!
//! Verifies that concatenated rasters reproduce both inputs exactly
//! and pad the shorter dimension with fully transparent pixels, and
//! that palette sheets lay out near-square.

use warpix_core::{Color, Raster};
use warpix_test::{RegParams, gradient, rgb_palette, solid};

#[test]
fn compose_reg() {
    let mut rp = RegParams::new("compose");

    // --- beside() with unequal heights ---
    let a = gradient(3, 4);
    let b = solid(2, 2, Color::rgb(9, 9, 9));
    let out = a.beside(&b);
    rp.compare_values(5.0, out.width() as f64, 0.0);
    rp.compare_values(4.0, out.height() as f64, 0.0);

    let mut left_ok = true;
    for y in 0..a.height() {
        for x in 0..a.width() {
            left_ok &= out.get(x, y) == a.get(x, y);
        }
    }
    rp.check(left_ok, "left columns reproduce A");

    let mut right_ok = true;
    for y in 0..b.height() {
        for x in 0..b.width() {
            right_ok &= out.get(a.width() + x, y) == b.get(x, y);
        }
    }
    rp.check(right_ok, "right columns reproduce B");

    let mut padding_ok = true;
    for y in b.height()..out.height() {
        for x in 0..b.width() {
            padding_ok &= out.get(a.width() + x, y) == Some(&Color::transparent());
        }
    }
    rp.check(padding_ok, "padding is fully transparent");

    // --- stacked() mirrors the same contract vertically ---
    let out = a.stacked(&b);
    rp.compare_values(3.0, out.width() as f64, 0.0);
    rp.compare_values(6.0, out.height() as f64, 0.0);
    rp.check(
        out.get(2, 5) == Some(&Color::transparent()),
        "stacked padding transparent",
    );
    rp.check(out.get(1, 4) == b.get(1, 0), "stacked reproduces B");

    // --- palette sheet layout ---
    let src = gradient(4, 4);
    let palettes = vec![rgb_palette(); 7];
    // 7 palettes: 3 columns, 3 rows (last row holds one cell)
    let sheet = src.palette_sheet(&palettes).unwrap();
    rp.compare_values(12.0, sheet.width() as f64, 0.0);
    rp.compare_values(12.0, sheet.height() as f64, 0.0);

    assert!(rp.cleanup(), "compose regression test failed");
}
