//! Hole merging: splice hole loops into the outer loop via bridge edges.

use collision_types::{Point2, signed_area};
use tracing::debug;

/// Merge hole loops into an outer loop, producing one clip-ready loop.
///
/// Expects the outer loop counter-clockwise and holes clockwise. Holes are
/// processed in input order; each is spliced at the (hole vertex, outer
/// vertex) pair of minimum distance, ties resolved to the lowest hole index
/// then the lowest outer index. The bridge doubles both endpoints, so the
/// result is a weakly simple loop that ear clipping can consume.
#[must_use]
pub fn merge_holes(outer: Vec<Point2<f64>>, holes: &[Vec<Point2<f64>>]) -> Vec<Point2<f64>> {
    let mut merged = outer;

    for hole in holes {
        if hole.len() < 3 {
            continue;
        }
        let (h, o) = bridge_pair(hole, &merged);

        let mut next = Vec::with_capacity(merged.len() + hole.len() + 2);
        next.extend_from_slice(&merged[..=o]);
        next.extend_from_slice(&hole[h..]);
        next.extend_from_slice(&hole[..=h]);
        next.extend_from_slice(&merged[o..]);
        merged = next;

        debug!(
            hole_vertex = h,
            outer_vertex = o,
            merged_len = merged.len(),
            "Spliced hole into outer loop"
        );
    }

    merged
}

/// The (hole index, outer index) pair of minimum distance.
fn bridge_pair(hole: &[Point2<f64>], outer: &[Point2<f64>]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut best_d = f64::INFINITY;
    for (h, hp) in hole.iter().enumerate() {
        for (o, op) in outer.iter().enumerate() {
            let d = (hp - op).norm_squared();
            if d < best_d {
                best_d = d;
                best = (h, o);
            }
        }
    }
    best
}

/// Normalize a loop to the requested winding.
pub(crate) fn normalize_winding(points: &mut Vec<Point2<f64>>, ccw: bool) {
    let area = signed_area(points);
    if (ccw && area < 0.0) || (!ccw && area > 0.0) {
        points.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_pair_deterministic_on_ties() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        // All four corners are equidistant from the matching outer corner
        let hole = vec![
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 7.0),
            Point2::new(7.0, 7.0),
            Point2::new(7.0, 3.0),
        ];
        assert_eq!(bridge_pair(&hole, &outer), (0, 0));
    }

    #[test]
    fn test_merge_doubles_bridge_endpoints() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let hole = vec![
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 7.0),
            Point2::new(7.0, 7.0),
            Point2::new(7.0, 3.0),
        ];
        let merged = merge_holes(outer, &[hole]);
        assert_eq!(merged.len(), 10);
        // Bridge endpoints appear twice
        let count = |p: Point2<f64>| merged.iter().filter(|&&q| q == p).count();
        assert_eq!(count(Point2::new(0.0, 0.0)), 2);
        assert_eq!(count(Point2::new(3.0, 3.0)), 2);
        // Merged loop stays counter-clockwise
        assert!(signed_area(&merged) > 0.0);
    }

    #[test]
    fn test_normalize_winding() {
        let mut cw = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        normalize_winding(&mut cw, true);
        assert!(signed_area(&cw) > 0.0);
        normalize_winding(&mut cw, false);
        assert!(signed_area(&cw) < 0.0);
    }
}
