//! Geometry regression test
//!
//! Exercises the quad-to-quad point transform properties: corner
//! identity, self-transform round-trips, containment of vertices and
//! edge points, and the parallel-line intersection contract.

use rand::RngExt;
use warpix_core::{Coord, Line, Quad, Vector};
use warpix_test::RegParams;

fn skewed() -> Quad {
    Quad::from_corners([
        Coord::new(1.0, 2.0),
        Coord::new(7.0, 1.0),
        Coord::new(8.0, 6.0),
        Coord::new(2.0, 7.0),
    ])
}

#[test]
fn geom_reg() {
    let mut rp = RegParams::new("geom");

    // --- Corner identity: Q.transform(V, Q) == V exactly ---
    let quad = skewed();
    for v in quad.vertices() {
        let mapped = quad.transform(v, &quad);
        rp.check(mapped == Some(v), "vertex self-maps exactly");
    }

    // --- Vertices and edge points are contained ---
    for v in quad.vertices() {
        rp.check(quad.contains(v), "vertex contained");
    }
    rp.check(quad.contains(Coord::new(7.5, 3.5)), "edge point contained");

    // --- Self-transform round-trip on random rectangles ---
    let mut rng = rand::rng();
    for _ in 0..50 {
        let x = rng.random_range(-20.0..20.0);
        let y = rng.random_range(-20.0..20.0);
        let w = rng.random_range(1.0..30.0);
        let h = rng.random_range(1.0..30.0);
        let rect = Quad::axis_aligned(x, y, w, h);

        let px = x + rng.random_range(0.05..0.95) * w;
        let py = y + rng.random_range(0.05..0.95) * h;
        let p = Coord::new(px, py);

        match rect.transform(p, &rect) {
            Some(q) => {
                rp.compare_values(p.x, q.x, 1e-6);
                rp.compare_values(p.y, q.y, 1e-6);
            }
            None => {
                rp.check(false, "interior point must transform");
            }
        }
    }

    // --- Corner correspondence across two shapes ---
    let target = Quad::axis_aligned(0.0, 0.0, 100.0, 50.0);
    let sv = quad.vertices();
    let tv = target.vertices();
    for i in 0..4 {
        rp.check(
            quad.transform(sv[i], &target) == Some(tv[i]),
            "corner maps to same-index corner",
        );
    }

    // --- Parallel intersections yield no result ---
    let line = Line::new(Coord::new(1.0, 1.0), Vector::new(2.0, 3.0));
    rp.check(line.intersection(&line).is_none(), "self intersection");
    let flipped = Line::new(Coord::new(4.0, 0.0), Vector::new(-2.0, -3.0));
    rp.check(
        line.intersection(&flipped).is_none(),
        "sign-flipped parallel intersection",
    );

    // --- Extrema are stable over translation round-trips ---
    let mut moved = skewed();
    let offset = Vector::new(moved.min_x(), moved.min_y());
    moved.translate(offset, -1.0);
    rp.compare_values(0.0, moved.min_x(), 0.0);
    rp.compare_values(0.0, moved.min_y(), 0.0);
    moved.translate(offset, 1.0);
    rp.check(moved == skewed(), "translation restores vertices exactly");

    assert!(rp.cleanup(), "geom regression test failed");
}
