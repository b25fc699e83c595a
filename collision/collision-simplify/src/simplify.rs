//! Douglas-Peucker simplification of closed loops.

use collision_types::{ContourLoop, Point2, cross2};
use tracing::debug;

use crate::error::{SimplifyError, SimplifyResult};

/// Simplify a closed loop with Douglas-Peucker at the given tolerance.
///
/// The loop is split at its two points of maximum mutual distance (ties
/// resolved to the lowest index pair), each open chain is simplified with
/// an explicit work-list, and the chains are rejoined. A point survives only
/// if its perpendicular distance from the local baseline strictly exceeds
/// `epsilon`, so `epsilon = 0` keeps every non-collinear point. Chain
/// endpoints are always retained, the output never has more points than the
/// input, and re-simplifying an output at the same tolerance is a no-op.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidEpsilon`] for a negative or non-finite
/// tolerance and [`SimplifyError::DegenerateLoop`] when fewer than 3 points
/// survive.
pub fn simplify_loop(contour: &ContourLoop, epsilon: f64) -> SimplifyResult<ContourLoop> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(SimplifyError::InvalidEpsilon(epsilon));
    }
    let points = &contour.points;
    if points.len() < 3 {
        return Err(SimplifyError::DegenerateLoop {
            points: points.len(),
        });
    }

    let (i, j) = seed_points(points);

    // Two open chains: i..=j and j..wrap..=i
    let chain_a: Vec<Point2<f64>> = points[i..=j].to_vec();
    let mut chain_b: Vec<Point2<f64>> = points[j..].to_vec();
    chain_b.extend_from_slice(&points[..=i]);

    let kept_a = douglas_peucker(&chain_a, epsilon);
    let kept_b = douglas_peucker(&chain_b, epsilon);

    // Rejoin without duplicating the shared split points
    let mut result = kept_a;
    if kept_b.len() > 2 {
        result.extend_from_slice(&kept_b[1..kept_b.len() - 1]);
    }

    if result.len() < 3 {
        return Err(SimplifyError::DegenerateLoop {
            points: result.len(),
        });
    }

    debug!(
        input = points.len(),
        output = result.len(),
        epsilon,
        "Simplified loop"
    );

    Ok(ContourLoop {
        points: result,
        is_hole: contour.is_hole,
        depth: contour.depth,
    })
}

/// The two loop indices of maximum mutual distance, lowest pair on ties.
fn seed_points(points: &[Point2<f64>]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_d = -1.0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = (points[j] - points[i]).norm_squared();
            if d > best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    best
}

/// Iterative Douglas-Peucker on an open chain; endpoints always kept.
fn douglas_peucker(points: &[Point2<f64>], epsilon: f64) -> Vec<Point2<f64>> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit work-list instead of recursion: sprite contours can be large
    let mut work = vec![(0usize, n - 1)];
    while let Some((a, b)) = work.pop() {
        if b <= a + 1 {
            continue;
        }
        // Strictly-greater comparison both enforces the tolerance and breaks
        // distance ties toward the lowest index.
        let mut max_d = epsilon;
        let mut split = None;
        for i in (a + 1)..b {
            let d = perpendicular_distance(points[i], points[a], points[b]);
            if d > max_d {
                max_d = d;
                split = Some(i);
            }
        }
        if let Some(i) = split {
            keep[i] = true;
            work.push((a, i));
            work.push((i, b));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Falls back to point distance when the baseline is degenerate.
#[must_use]
pub fn perpendicular_distance(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    let base = b - a;
    let len = base.norm();
    if len <= f64::EPSILON {
        return (p - a).norm();
    }
    cross2(base, p - a).abs() / len
}
