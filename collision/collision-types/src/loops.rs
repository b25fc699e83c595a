//! Contour loop and holed polygon types.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb2;
use crate::signed_area;

/// A closed boundary loop traced from an alpha mask.
///
/// The loop is stored without repeating the first point; the last point is
/// implicitly connected back to the first. Outer boundaries are
/// counter-clockwise (positive signed area), holes are clockwise.
///
/// # Example
///
/// ```
/// use collision_types::{ContourLoop, Point2};
///
/// let tri = ContourLoop::outer(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 3.0),
/// ]);
///
/// assert_eq!(tri.point_count(), 3);
/// assert!((tri.area() - 6.0).abs() < 1e-12);
/// assert!(!tri.is_hole);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContourLoop {
    /// Loop vertices; first and last are implicitly connected.
    pub points: Vec<Point2<f64>>,

    /// Whether this loop bounds a hole (clockwise winding).
    pub is_hole: bool,

    /// Nesting depth: 0 for outer boundaries, 1 for holes within them.
    pub depth: u8,
}

impl ContourLoop {
    /// Create an outer boundary loop (depth 0).
    #[inline]
    #[must_use]
    pub fn outer(points: Vec<Point2<f64>>) -> Self {
        Self {
            points,
            is_hole: false,
            depth: 0,
        }
    }

    /// Create a hole loop (depth 1).
    #[inline]
    #[must_use]
    pub fn hole(points: Vec<Point2<f64>>) -> Self {
        Self {
            points,
            is_hole: true,
            depth: 1,
        }
    }

    /// Number of stored points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Shoelace signed area (positive = counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the loop winds counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Total edge length, including the closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            total += (b - a).norm();
        }
        total
    }

    /// Arithmetic mean of the loop vertices.
    ///
    /// Returns the origin for an empty loop.
    #[must_use]
    pub fn centroid(&self) -> Point2<f64> {
        if self.points.is_empty() {
            return Point2::origin();
        }
        let mut sum = nalgebra::Vector2::zeros();
        for p in &self.points {
            sum += p.coords;
        }
        #[allow(clippy::cast_precision_loss)]
        Point2::from(sum / self.points.len() as f64)
    }

    /// Bounding box of the loop, or `None` if empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.points.iter().copied())
    }

    /// Reverse the vertex order in place, flipping the winding.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Number of distinct points (consecutive duplicates and the wrap-around
    /// duplicate counted once).
    #[must_use]
    pub fn distinct_point_count(&self) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        let mut count = 0;
        for i in 0..self.points.len() {
            let next = self.points[(i + 1) % self.points.len()];
            if self.points[i] != next {
                count += 1;
            }
        }
        count.max(1)
    }
}

/// A simple polygon: one outer loop plus optional hole loops.
///
/// Produced by simplification, consumed by the triangulator. The outer loop
/// must be counter-clockwise and non-self-intersecting; holes clockwise and
/// strictly inside the outer loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Outer boundary (counter-clockwise).
    pub outer: ContourLoop,

    /// Hole loops (clockwise).
    pub holes: Vec<ContourLoop>,
}

impl Polygon {
    /// Create a polygon with no holes.
    #[inline]
    #[must_use]
    pub const fn new(outer: ContourLoop) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Create a polygon with hole loops.
    #[inline]
    #[must_use]
    pub const fn with_holes(outer: ContourLoop, holes: Vec<ContourLoop>) -> Self {
        Self { outer, holes }
    }

    /// Total vertex count across the outer loop and all holes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.outer.point_count() + self.holes.iter().map(ContourLoop::point_count).sum::<usize>()
    }

    /// Enclosed area: outer area minus hole areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.holes.iter().map(ContourLoop::area).sum::<f64>()
    }
}
