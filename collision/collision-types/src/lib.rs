//! Core 2D geometry types for sprite collision generation.
//!
//! This crate defines the value types shared by the collision pipeline:
//!
//! - [`ContourLoop`] - a closed boundary loop traced from an alpha mask
//! - [`Polygon`] - an outer loop plus optional hole loops
//! - [`Triangle`] - a counter-clockwise triangle with non-zero area
//! - [`BoundedPolygon`] - a 3-8 vertex polygon for legacy collision shapes
//! - [`CollisionShape`] / [`CollisionSet`] - the final output artifact
//! - [`Aabb2`] - a 2D axis-aligned bounding box
//!
//! # Coordinate system
//!
//! Coordinates are raster pixel coordinates: X grows right, Y grows down,
//! and contour vertices sit on pixel centers. Winding is defined purely by
//! the shoelace signed area in these raw coordinates: **positive signed
//! area is counter-clockwise** and marks an outer boundary, negative is
//! clockwise and marks a hole.
//!
//! # Example
//!
//! ```
//! use collision_types::{ContourLoop, Point2};
//!
//! let square = ContourLoop::outer(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert!(square.is_ccw());
//! assert!((square.area() - 4.0).abs() < 1e-12);
//! assert!((square.perimeter() - 8.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod loops;
mod shape;
mod triangle;

pub use bounds::Aabb2;
pub use error::{ShapeError, ShapeResult};
pub use loops::{ContourLoop, Polygon};
pub use shape::{BoundedPolygon, CollisionSet, CollisionShape, MAX_SHAPE_VERTICES};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

/// 2D cross product (z-component of the 3D cross of `a` and `b`).
///
/// Positive when `b` is counter-clockwise from `a`.
#[inline]
#[must_use]
pub fn cross2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Shoelace signed area of a closed point loop.
///
/// The last point is implicitly connected back to the first. Positive for
/// counter-clockwise loops, negative for clockwise, zero for degenerate
/// loops with fewer than 3 points.
#[must_use]
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);

        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_signed_area_degenerate() {
        assert!(signed_area(&[]).abs() < f64::EPSILON);
        let two = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(signed_area(&two).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross2_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!((cross2(x, y) - 1.0).abs() < f64::EPSILON);
        assert!((cross2(y, x) + 1.0).abs() < f64::EPSILON);
    }
}
