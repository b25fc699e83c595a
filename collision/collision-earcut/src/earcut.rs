//! Deterministic ear-clipping triangulation.

use collision_types::{Point2, Polygon, Triangle, cross2};
use tracing::debug;

use crate::bridge::{merge_holes, normalize_winding};
use crate::error::{EarcutError, EarcutResult};

/// Areas at or below this are treated as zero (collinear).
const AREA_EPS: f64 = 1e-12;

/// Triangulate a simple polygon (outer loop plus optional holes).
///
/// Winding is normalized first (outer counter-clockwise, holes clockwise),
/// holes are spliced into the outer loop via bridge edges, and the result is
/// ear-clipped. Ear selection is deterministic: each pass scans the
/// remaining vertices in index order and clips the first valid ear, so
/// identical inputs always produce the identical triangle sequence.
///
/// A simple polygon with N vertices and no collinear runs yields exactly
/// N-2 counter-clockwise triangles whose areas sum to the polygon area.
/// Collinear corners are removed without emitting a zero-area triangle.
///
/// Complexity is O(n²) in the vertex count, which is fine for sprite
/// contours (tens to low hundreds of vertices per region).
///
/// # Errors
///
/// - [`EarcutError::TooFewVertices`] for loops below 3 vertices.
/// - [`EarcutError::NonSimplePolygon`] when no valid ear exists, indicating
///   a self-intersecting boundary from an upstream stage.
pub fn triangulate(polygon: &Polygon) -> EarcutResult<Vec<Triangle>> {
    if polygon.outer.point_count() < 3 {
        return Err(EarcutError::TooFewVertices {
            count: polygon.outer.point_count(),
        });
    }

    let mut outer = polygon.outer.points.clone();
    normalize_winding(&mut outer, true);

    let holes: Vec<Vec<Point2<f64>>> = polygon
        .holes
        .iter()
        .map(|h| {
            let mut points = h.points.clone();
            normalize_winding(&mut points, false);
            points
        })
        .collect();

    let merged = merge_holes(outer, &holes);
    let triangles = clip_ears(&merged)?;

    debug!(
        vertices = polygon.vertex_count(),
        triangles = triangles.len(),
        "Triangulation complete"
    );

    Ok(triangles)
}

/// Ear-clip one counter-clockwise (weakly simple) loop.
fn clip_ears(points: &[Point2<f64>]) -> EarcutResult<Vec<Triangle>> {
    let mut idx: Vec<usize> = (0..points.len()).collect();
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));

    while idx.len() > 3 {
        let mut clipped = false;
        for k in 0..idx.len() {
            if is_ear(points, &idx, k) {
                let (a, b, c) = corner(points, &idx, k);
                triangles.push(Triangle::new(a, b, c));
                idx.remove(k);
                clipped = true;
                break;
            }
        }
        if clipped {
            continue;
        }

        // No strict ear: drop a collinear corner without emitting, if any
        if let Some(k) = (0..idx.len()).find(|&k| {
            let (a, b, c) = corner(points, &idx, k);
            cross2(b - a, c - b).abs() <= AREA_EPS
        }) {
            idx.remove(k);
            continue;
        }

        return Err(EarcutError::NonSimplePolygon {
            remaining: idx.len(),
        });
    }

    let (a, b, c) = corner(points, &idx, 1);
    let last = Triangle::new(a, b, c);
    if !last.is_degenerate(AREA_EPS) {
        triangles.push(last);
    }

    Ok(triangles)
}

/// The (prev, cur, next) corner points at position `k` of the index list.
fn corner(points: &[Point2<f64>], idx: &[usize], k: usize) -> (Point2<f64>, Point2<f64>, Point2<f64>) {
    let n = idx.len();
    let a = points[idx[(k + n - 1) % n]];
    let b = points[idx[k]];
    let c = points[idx[(k + 1) % n]];
    (a, b, c)
}

/// Ear test: strictly convex corner whose triangle contains no other
/// remaining vertex.
///
/// Vertices coincident with a triangle corner (bridge duplicates) never
/// block; anything else inside or on the triangle boundary does.
fn is_ear(points: &[Point2<f64>], idx: &[usize], k: usize) -> bool {
    let (a, b, c) = corner(points, idx, k);
    if cross2(b - a, c - b) <= AREA_EPS {
        return false;
    }

    let n = idx.len();
    for (pos, &i) in idx.iter().enumerate() {
        if pos == k || pos == (k + n - 1) % n || pos == (k + 1) % n {
            continue;
        }
        let p = points[i];
        if p == a || p == b || p == c {
            continue;
        }
        if in_triangle(a, b, c, p) {
            return false;
        }
    }
    true
}

/// Inclusive point-in-triangle test for a counter-clockwise triangle.
fn in_triangle(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>, p: Point2<f64>) -> bool {
    cross2(b - a, p - a) >= -AREA_EPS
        && cross2(c - b, p - b) >= -AREA_EPS
        && cross2(a - c, p - c) >= -AREA_EPS
}
