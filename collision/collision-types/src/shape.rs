//! Output collision shapes and the ordered shape set.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::de::Error as _;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bounds::Aabb2;
use crate::error::{ShapeError, ShapeResult};
use crate::signed_area;
use crate::triangle::Triangle;

/// Maximum vertex count for a legacy collision polygon.
pub const MAX_SHAPE_VERTICES: usize = 8;

/// A convex-ish legacy collision polygon with 3 to 8 vertices.
///
/// The vertex-count bound is enforced at construction; vertices are stored
/// in counter-clockwise order.
///
/// # Example
///
/// ```
/// use collision_types::{BoundedPolygon, Point2};
///
/// let quad = BoundedPolygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(0.0, 3.0),
/// ]).unwrap();
///
/// assert_eq!(quad.vertex_count(), 4);
/// assert!(BoundedPolygon::new(vec![Point2::origin(); 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedPolygon {
    vertices: Vec<Point2<f64>>,
}

impl BoundedPolygon {
    /// Create a bounded polygon, enforcing the 3-8 vertex invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::VertexCount`] when the count is out of range.
    pub fn new(vertices: Vec<Point2<f64>>) -> ShapeResult<Self> {
        if vertices.len() < 3 || vertices.len() > MAX_SHAPE_VERTICES {
            return Err(ShapeError::VertexCount {
                count: vertices.len(),
                min: 3,
                max: MAX_SHAPE_VERTICES,
            });
        }
        Ok(Self { vertices })
    }

    /// Vertices in counter-clockwise order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Number of vertices (always in 3..=8).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }
}

/// A single output collision shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// A triangle (triangulation mode: always 3 vertices).
    Triangle(Triangle),
    /// A bounded polygon (legacy mode: 3-8 vertices).
    Polygon(BoundedPolygon),
}

impl CollisionShape {
    /// Number of vertices in the shape.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Triangle(_) => 3,
            Self::Polygon(p) => p.vertex_count(),
        }
    }

    /// Absolute shape area.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Triangle(t) => t.area(),
            Self::Polygon(p) => p.area(),
        }
    }

    /// Shape vertices in winding order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        match self {
            Self::Triangle(t) => t.vertices().to_vec(),
            Self::Polygon(p) => p.vertices().to_vec(),
        }
    }
}

impl From<Triangle> for CollisionShape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<BoundedPolygon> for CollisionShape {
    fn from(p: BoundedPolygon) -> Self {
        Self::Polygon(p)
    }
}

/// The ordered collision shape set: the pipeline's output artifact.
///
/// Shapes appear in region-discovery order, then triangle-discovery order
/// within a region. Serializes as pure nested numeric arrays
/// (`[[[x, y], ...], ...]`) with no object wrappers - the format consumed
/// by game tooling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionSet {
    /// Ordered shapes.
    pub shapes: Vec<CollisionShape>,
}

impl CollisionSet {
    /// Create an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape, preserving discovery order.
    pub fn push(&mut self, shape: impl Into<CollisionShape>) {
        self.shapes.push(shape.into());
    }

    /// Number of shapes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the set holds no shapes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over the shapes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CollisionShape> {
        self.shapes.iter()
    }

    /// Sum of all shape areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(CollisionShape::area).sum()
    }

    /// Total vertex count across all shapes.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.shapes.iter().map(CollisionShape::vertex_count).sum()
    }

    /// Bounding box over all shape vertices, or `None` for an empty set.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.shapes.iter().flat_map(|s| s.points()))
    }

    /// Convert to the nested-array wire representation.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<[f64; 2]>> {
        self.shapes
            .iter()
            .map(|s| s.points().iter().map(|p| [p.x, p.y]).collect())
            .collect()
    }

    /// Build a set from the nested-array wire representation.
    ///
    /// 3-vertex shapes become [`Triangle`]s, 4-8 vertex shapes become
    /// [`BoundedPolygon`]s.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::VertexCount`] for shapes outside 3-8 vertices.
    pub fn from_nested(nested: &[Vec<[f64; 2]>]) -> ShapeResult<Self> {
        let mut set = Self::new();
        for raw in nested {
            let points: Vec<Point2<f64>> =
                raw.iter().map(|[x, y]| Point2::new(*x, *y)).collect();
            if points.len() == 3 {
                set.push(Triangle::new(points[0], points[1], points[2]));
            } else {
                set.push(BoundedPolygon::new(points)?);
            }
        }
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a CollisionSet {
    type Item = &'a CollisionShape;
    type IntoIter = std::slice::Iter<'a, CollisionShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for CollisionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_nested())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CollisionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nested = Vec::<Vec<[f64; 2]>>::deserialize(deserializer)?;
        Self::from_nested(&nested).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_set() -> CollisionSet {
        let mut set = CollisionSet::new();
        set.push(Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ));
        set.push(
            BoundedPolygon::new(vec![
                Point2::new(3.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 1.0),
                Point2::new(3.0, 1.0),
            ])
            .unwrap(),
        );
        set
    }

    #[test]
    fn test_bounded_polygon_vertex_bounds() {
        let too_few = BoundedPolygon::new(vec![Point2::origin(); 2]);
        assert!(matches!(
            too_few,
            Err(ShapeError::VertexCount { count: 2, .. })
        ));

        let too_many = BoundedPolygon::new(vec![Point2::origin(); 9]);
        assert!(too_many.is_err());

        assert!(BoundedPolygon::new(vec![Point2::origin(); 8]).is_ok());
    }

    #[test]
    fn test_set_totals() {
        let set = sample_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_vertices(), 7);
        assert_relative_eq!(set.total_area(), 3.0);
    }

    #[test]
    fn test_set_bounds() {
        assert!(CollisionSet::new().bounds().is_none());

        let bounds = sample_set().bounds().unwrap();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.min.y, 0.0);
        assert_relative_eq!(bounds.max.x, 4.0);
        assert_relative_eq!(bounds.max.y, 2.0);
    }

    #[test]
    fn test_nested_round_trip() {
        let set = sample_set();
        let nested = set.to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].len(), 3);
        assert_eq!(nested[1].len(), 4);

        let back = CollisionSet::from_nested(&nested).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_from_nested_rejects_bad_counts() {
        let nested = vec![vec![[0.0, 0.0], [1.0, 0.0]]];
        assert!(CollisionSet::from_nested(&nested).is_err());
    }
}
