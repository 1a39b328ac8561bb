//! Infinite lines anchored at a point
//!
//! A [`Line`] is a point plus a direction vector, not a pair of
//! endpoints. Segment semantics (edge bounds) are imposed externally by
//! callers that compare parametric distances against the direction's
//! length, which is how [`Quad`](super::Quad) treats its edges.

use super::{Coord, Vector};

/// An infinite line through `point` in direction `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Coord,
    dir: Vector,
}

impl Line {
    /// Create a line from an anchor point and a direction.
    pub fn new(point: Coord, dir: Vector) -> Self {
        Self { point, dir }
    }

    /// Create the line through two points, anchored at `a`.
    pub fn through(a: Coord, b: Coord) -> Self {
        Self::new(a, a.vector_to(b))
    }

    /// The anchor point.
    pub fn point(&self) -> Coord {
        self.point
    }

    /// The direction vector.
    pub fn dir(&self) -> Vector {
        self.dir
    }

    /// Slope of the line, or `None` for a vertical line
    /// (direction with a zero x component).
    pub fn slope(&self) -> Option<f64> {
        if self.dir.x == 0.0 {
            return None;
        }
        Some(self.dir.y / self.dir.x)
    }

    /// Translate the anchor point by `vector * factor` in place.
    ///
    /// This mutates the line; the direction is unchanged.
    pub fn translate(&mut self, vector: Vector, factor: f64) {
        self.point = self.point.translated(vector, factor);
    }

    /// Where this line meets `other`, or `None` if they are parallel.
    ///
    /// Parallel directions (sign-tolerant) never intersect here, even
    /// when the lines are coincident; the one degenerate exception is
    /// two non-parallel lines anchored at the same point, which yields
    /// that shared point directly. When neither line is vertical and
    /// the slopes still compare equal, the lines are treated as
    /// parallel as well, which catches near-degenerate directions the
    /// unit-vector comparison misses.
    pub fn intersection(&self, other: &Line) -> Option<Coord> {
        if self.dir.is_parallel_to(other.dir) {
            return None;
        }
        if self.point == other.point {
            return Some(self.point);
        }

        let x = if self.dir.x == 0.0 {
            self.point.x
        } else if other.dir.x == 0.0 {
            other.point.x
        } else {
            let m1 = self.dir.y / self.dir.x;
            let m2 = other.dir.y / other.dir.x;
            if m1 == m2 {
                return None;
            }
            (other.point.y - self.point.y + m1 * self.point.x - m2 * other.point.x) / (m1 - m2)
        };

        // Evaluate y on whichever line is not vertical; both cannot be,
        // or the parallel check above would have fired.
        let y = if self.dir.x == 0.0 {
            let m = other.dir.y / other.dir.x;
            m * (x - other.point.x) + other.point.y
        } else {
            let m = self.dir.y / self.dir.x;
            m * (x - self.point.x) + self.point.y
        };

        Some(Coord::new(x, y))
    }

    /// Whether `p` lies on this line, by exact comparison.
    pub fn contains(&self, p: Coord) -> bool {
        if self.dir.x == 0.0 {
            return self.point.x == p.x;
        }
        if self.point == p {
            return true;
        }
        let m = self.dir.y / self.dir.x;
        p.y == m * (p.x - self.point.x) + self.point.y
    }

    /// Where this line crosses the x axis, if it does.
    pub fn x_intercept(&self) -> Option<Coord> {
        self.intersection(&Line::new(Coord::origin(), Vector::new(1.0, 0.0)))
    }

    /// Where this line crosses the y axis, if it does.
    pub fn y_intercept(&self) -> Option<Coord> {
        self.intersection(&Line::new(Coord::origin(), Vector::new(0.0, 1.0)))
    }
}
