//! 2D axis-aligned bounding box.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// # Example
///
/// ```
/// use collision_types::{Aabb2, Point2};
///
/// let bounds = Aabb2::from_points([
///     Point2::new(1.0, 2.0),
///     Point2::new(4.0, 0.5),
/// ].iter().copied()).unwrap();
///
/// assert!((bounds.width() - 3.0).abs() < 1e-12);
/// assert!((bounds.height() - 1.5).abs() < 1e-12);
/// assert!(bounds.contains(Point2::new(2.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Aabb2 {
    /// Create a bounding box from explicit corners.
    #[inline]
    #[must_use]
    pub const fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Compute the bounding box of a point iterator.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point2<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first, first);
        for p in iter {
            bounds.expand(p);
        }
        Some(bounds)
    }

    /// Grow the box to include a point.
    pub fn expand(&mut self, p: Point2<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the box.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether a point lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
