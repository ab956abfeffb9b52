//! Straight-line interpolation between two 2D points.
//!
//! Unlike the easing curves nothing here is range checked: a proportion
//! outside [0, 1] extrapolates past the segment.

use serde::{Deserialize, Serialize};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Point that has progressed a proportion `n` along the line from
/// `(x1, y1)` to `(x2, y2)`.
#[inline]
pub fn point_on_line(x1: f64, y1: f64, x2: f64, y2: f64, n: f64) -> (f64, f64) {
    (lerp(x1, x2, n), lerp(y1, y2, n))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same as [`point_on_line`] from `self` towards `other`.
    #[inline]
    pub fn lerp(self, other: Point, n: f64) -> Point {
        point_on_line(self.x, self.y, other.x, other.y, n).into()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint() {
        assert_eq!(point_on_line(0.0, 0.0, 10.0, 10.0, 0.5), (5.0, 5.0));
    }

    #[test]
    fn extrapolates_beyond_segment() {
        assert_eq!(point_on_line(0.0, 0.0, 10.0, 0.0, 2.0), (20.0, 0.0));
        assert_eq!(point_on_line(0.0, 0.0, 10.0, 0.0, -1.0), (-10.0, 0.0));
    }

    #[test]
    fn endpoints() {
        assert_eq!(point_on_line(1.0, 2.0, 3.0, 5.0, 0.0), (1.0, 2.0));
        assert_eq!(point_on_line(1.0, 2.0, 3.0, 5.0, 1.0), (3.0, 5.0));
    }

    #[test]
    fn point_lerp_matches_free_function() {
        let a = Point::new(-4.0, 2.0);
        let b = Point::new(6.0, -8.0);
        let p = a.lerp(b, 0.25);
        assert_eq!((p.x, p.y), point_on_line(-4.0, 2.0, 6.0, -8.0, 0.25));
        assert_eq!(p, Point::new(-1.5, -0.5));
    }
}
