//! 2D triangle type for collision shapes.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cross2;

/// A 2D triangle with concrete vertex positions.
///
/// Winding is **counter-clockwise** (positive signed area) for triangles
/// emitted by the pipeline; [`Triangle::normalized`] enforces this.
///
/// # Example
///
/// ```
/// use collision_types::{Point2, Triangle};
///
/// let tri = Triangle::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// );
///
/// assert!(tri.is_ccw());
/// assert!((tri.area() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub a: Point2<f64>,
    /// Second vertex.
    pub b: Point2<f64>,
    /// Third vertex.
    pub c: Point2<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Signed area: positive for counter-clockwise winding.
    #[inline]
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        cross2(self.b - self.a, self.c - self.a) * 0.5
    }

    /// Absolute area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the triangle winds counter-clockwise.
    #[inline]
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Whether the triangle is degenerate (collinear vertices).
    #[must_use]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.area() <= eps
    }

    /// The same triangle with counter-clockwise winding enforced.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.signed_area() < 0.0 {
            Self::new(self.a, self.c, self.b)
        } else {
            self
        }
    }

    /// Centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point2<f64> {
        Point2::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Whether a point lies strictly inside the triangle.
    ///
    /// Points on an edge or vertex are not inside. Assumes
    /// counter-clockwise winding.
    #[must_use]
    pub fn contains_point(&self, p: Point2<f64>, eps: f64) -> bool {
        let d0 = cross2(self.b - self.a, p - self.a);
        let d1 = cross2(self.c - self.b, p - self.b);
        let d2 = cross2(self.a - self.c, p - self.c);
        d0 > eps && d1 > eps && d2 > eps
    }

    /// Vertices as an array, in winding order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point2<f64>; 3] {
        [self.a, self.b, self.c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_tri() -> Triangle {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_area_and_winding() {
        let tri = right_tri();
        assert_relative_eq!(tri.signed_area(), 0.5);
        assert!(tri.is_ccw());

        let flipped = Triangle::new(tri.a, tri.c, tri.b);
        assert!(!flipped.is_ccw());
        assert!(flipped.normalized().is_ccw());
    }

    #[test]
    fn test_degenerate() {
        let degen = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(degen.is_degenerate(1e-12));
        assert!(!right_tri().is_degenerate(1e-12));
    }

    #[test]
    fn test_contains_point() {
        let tri = right_tri();
        assert!(tri.contains_point(Point2::new(0.2, 0.2), 1e-12));
        // On an edge: not strictly inside
        assert!(!tri.contains_point(Point2::new(0.5, 0.0), 1e-12));
        // Coincident with a vertex: not strictly inside
        assert!(!tri.contains_point(Point2::new(0.0, 0.0), 1e-12));
        assert!(!tri.contains_point(Point2::new(1.0, 1.0), 1e-12));
    }

    #[test]
    fn test_centroid() {
        let c = right_tri().centroid();
        assert_relative_eq!(c.x, 1.0 / 3.0);
        assert_relative_eq!(c.y, 1.0 / 3.0);
    }
}
