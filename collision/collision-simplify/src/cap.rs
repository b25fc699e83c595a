//! Legacy vertex-cap mode: epsilon backoff until a bounded polygon fits.

use collision_types::{ContourLoop, MAX_SHAPE_VERTICES};
use tracing::{debug, warn};

use crate::error::{SimplifyError, SimplifyResult};
use crate::simplify::simplify_loop;

/// Geometric backoff factor applied to epsilon on each cap retry.
pub const CAP_BACKOFF: f64 = 1.5;

/// Maximum number of epsilon backoff iterations before giving up.
pub const MAX_CAP_ITERATIONS: usize = 10;

/// Epsilon used for the first retry when the caller passed zero.
const ZERO_EPSILON_SEED: f64 = 0.5;

/// Simplify a loop under a hard vertex cap (legacy 3-8 vertex mode).
///
/// Runs [`simplify_loop`] at `epsilon`; while the result exceeds
/// `max_vertices`, epsilon is multiplied by [`CAP_BACKOFF`] and the
/// simplification retried, up to [`MAX_CAP_ITERATIONS`] times. A zero
/// starting epsilon is bumped to 0.5 before the first backoff so the retry
/// loop can make progress.
///
/// # Errors
///
/// - [`SimplifyError::InvalidMaxVertices`] when the cap is outside 3-8.
/// - [`SimplifyError::CapUnreachable`] when the cap is still exceeded after
///   the bounded backoff.
/// - [`SimplifyError::DegenerateLoop`] when backoff collapses the loop below
///   a triangle.
pub fn simplify_capped(
    contour: &ContourLoop,
    epsilon: f64,
    max_vertices: usize,
) -> SimplifyResult<ContourLoop> {
    if !(3..=MAX_SHAPE_VERTICES).contains(&max_vertices) {
        return Err(SimplifyError::InvalidMaxVertices(max_vertices));
    }

    let mut eps = epsilon;
    let mut best = simplify_loop(contour, eps)?;
    let mut iterations = 0;

    while best.point_count() > max_vertices && iterations < MAX_CAP_ITERATIONS {
        eps = if eps <= 0.0 {
            ZERO_EPSILON_SEED
        } else {
            eps * CAP_BACKOFF
        };
        iterations += 1;
        best = simplify_loop(contour, eps)?;
        debug!(
            iterations,
            epsilon = eps,
            vertices = best.point_count(),
            "Vertex cap backoff"
        );
    }

    if best.point_count() > max_vertices {
        warn!(
            vertices = best.point_count(),
            max_vertices, "Vertex cap unreachable after bounded backoff"
        );
        return Err(SimplifyError::CapUnreachable {
            vertices: best.point_count(),
            max_vertices,
            iterations,
        });
    }

    Ok(best)
}

/// Collapse runs of near-coincident vertices.
///
/// Walks the loop keeping a vertex only when it is farther than `threshold`
/// from the last kept vertex; a trailing vertex that closes up against the
/// first is dropped too. When merging would leave fewer than 3 vertices the
/// input is returned unchanged.
#[must_use]
pub fn merge_close_vertices(contour: &ContourLoop, threshold: f64) -> ContourLoop {
    if contour.points.len() < 3 || threshold <= 0.0 {
        return contour.clone();
    }

    let mut merged = vec![contour.points[0]];
    for &p in &contour.points[1..] {
        // merged is never empty
        if let Some(&last) = merged.last() {
            if (p - last).norm() > threshold {
                merged.push(p);
            }
        }
    }
    if merged.len() > 2 {
        if let (Some(&last), Some(&first)) = (merged.last(), merged.first()) {
            if (last - first).norm() <= threshold {
                merged.pop();
            }
        }
    }

    if merged.len() < 3 {
        warn!(
            input = contour.points.len(),
            "Vertex merge would degenerate loop; keeping original"
        );
        return contour.clone();
    }

    if merged.len() != contour.points.len() {
        debug!(
            input = contour.points.len(),
            output = merged.len(),
            threshold,
            "Merged close vertices"
        );
    }

    ContourLoop {
        points: merged,
        is_hole: contour.is_hole,
        depth: contour.depth,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use collision_types::Point2;

    /// Regular n-gon on a circle of the given radius.
    fn ring(n: usize, radius: f64) -> ContourLoop {
        #[allow(clippy::cast_precision_loss)]
        let points = (0..n)
            .map(|i| {
                let theta = std::f64::consts::TAU * (i as f64) / (n as f64);
                Point2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        ContourLoop::outer(points)
    }

    #[test]
    fn test_cap_satisfied_without_backoff() {
        let square = ring(4, 10.0);
        let capped = simplify_capped(&square, 0.0, 8).unwrap();
        assert_eq!(capped.point_count(), 4);
    }

    #[test]
    fn test_cap_backoff_reduces_ring() {
        let circle = ring(64, 20.0);
        let capped = simplify_capped(&circle, 0.1, 8).unwrap();
        assert!(capped.point_count() <= 8);
        assert!(capped.point_count() >= 3);
    }

    #[test]
    fn test_cap_rejects_bad_bounds() {
        let square = ring(4, 10.0);
        assert!(matches!(
            simplify_capped(&square, 1.0, 2),
            Err(SimplifyError::InvalidMaxVertices(2))
        ));
        assert!(matches!(
            simplify_capped(&square, 1.0, 9),
            Err(SimplifyError::InvalidMaxVertices(9))
        ));
    }

    #[test]
    fn test_merge_close_vertices() {
        let lp = ContourLoop::outer(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.1), // within threshold of previous
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(0.3, 0.4), // closes up against the first
        ]);
        let merged = merge_close_vertices(&lp, 2.0);
        assert_eq!(merged.point_count(), 4);
    }

    #[test]
    fn test_merge_keeps_original_when_degenerate() {
        let tiny = ContourLoop::outer(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.1, 0.1),
        ]);
        let merged = merge_close_vertices(&tiny, 2.0);
        assert_eq!(merged.points, tiny.points);
    }
}
