//! Moore-neighbor border following over pixel centers.

use std::collections::VecDeque;

use collision_mask::AlphaMask;
use collision_types::{ContourLoop, Point2};
use hashbrown::HashSet;
use tracing::{debug, warn};

use crate::error::{TraceError, TraceResult};
use crate::label::{RegionMap, label_regions};
use crate::params::TraceParams;

/// Moore neighborhood in clockwise order starting west (y grows down).
const RING: [(i64, i64); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// A traced connected region: outer boundary plus any hole loops.
#[derive(Debug, Clone)]
pub struct TracedRegion {
    /// Outer boundary, counter-clockwise (positive signed area).
    pub outer: ContourLoop,
    /// Hole loops, clockwise; empty unless hole tracing is enabled.
    pub holes: Vec<ContourLoop>,
    /// Opaque pixel count of the region.
    pub pixel_count: usize,
}

/// Trace all regions of a mask in discovery order.
///
/// Regions below the minimum area are skipped as noise. Fails fast on the
/// first degenerate boundary; callers that need per-region error
/// aggregation should drive [`label_regions`] and [`trace_region`]
/// themselves.
///
/// # Errors
///
/// Returns [`TraceError::DegenerateContour`] when a region's boundary has
/// fewer than 3 distinct points.
pub fn trace_contours(mask: &AlphaMask, params: &TraceParams) -> TraceResult<Vec<TracedRegion>> {
    let map = label_regions(mask, params.include_holes);
    let mut traced = Vec::new();
    for index in 0..map.region_count() {
        #[allow(clippy::cast_precision_loss)]
        if (map.regions()[index].pixel_count as f64) < params.min_region_area {
            debug!(region = index, "Skipping sub-threshold region");
            continue;
        }
        traced.push(trace_region(mask, &map, params, index)?);
    }
    debug!(regions = traced.len(), "Contour tracing complete");
    Ok(traced)
}

/// Trace one region of a labeled mask.
///
/// The outer boundary follows opaque pixel centers with Moore-neighbor
/// tracing (west backtrack seed, repeated-state stopping criterion) and is
/// normalized to counter-clockwise. Hole loops, when enabled, are traced
/// over their background components and normalized to clockwise.
///
/// # Errors
///
/// Returns [`TraceError::RegionIndex`] for an out-of-range index and
/// [`TraceError::DegenerateContour`] when the boundary collapses below 3
/// distinct points.
pub fn trace_region(
    mask: &AlphaMask,
    map: &RegionMap,
    params: &TraceParams,
    index: usize,
) -> TraceResult<TracedRegion> {
    let Some(info) = map.regions().get(index).copied() else {
        return Err(TraceError::RegionIndex {
            region: index,
            count: map.region_count(),
        });
    };
    #[allow(clippy::cast_possible_truncation)]
    let label = index as u32 + 1;

    let start = (i64::from(info.seed.0), i64::from(info.seed.1));
    let raw = moore_trace(
        &|x, y| map.label(x, y) == label,
        start,
        8 * info.pixel_count + 8,
    );
    let points = collapse_collinear(&raw);
    if points.len() < 3 {
        return Err(TraceError::DegenerateContour {
            region: index,
            points: points.len(),
        });
    }

    let mut outer = ContourLoop::outer(to_points(&points));
    // Thin regions trace out-and-back along themselves: enough raw points,
    // but no enclosed area. They are degenerate too.
    if outer.distinct_point_count() < 3 || outer.area() < f64::EPSILON {
        return Err(TraceError::DegenerateContour {
            region: index,
            points: outer.distinct_point_count(),
        });
    }
    if !outer.is_ccw() {
        outer.reverse();
    }

    let mut holes = Vec::new();
    if params.include_holes {
        for hole in map.holes_of(label) {
            #[allow(clippy::cast_precision_loss)]
            if (hole.pixel_count as f64) < params.min_region_area {
                debug!(region = index, "Filling sub-threshold hole");
                continue;
            }
            let member = hole_membership(mask, hole.seed);
            let seed = (i64::from(hole.seed.0), i64::from(hole.seed.1));
            let raw = moore_trace(
                &|x, y| member(x, y),
                seed,
                8 * hole.pixel_count + 8,
            );
            let points = collapse_collinear(&raw);
            if points.len() < 3 {
                debug!(region = index, "Skipping degenerate hole loop");
                continue;
            }
            let mut loop_ = ContourLoop::hole(to_points(&points));
            if loop_.distinct_point_count() < 3 || loop_.area() < f64::EPSILON {
                debug!(region = index, "Skipping zero-area hole loop");
                continue;
            }
            if loop_.is_ccw() {
                loop_.reverse();
            }
            holes.push(loop_);
        }
    }

    debug!(
        region = index,
        outer_points = outer.point_count(),
        holes = holes.len(),
        "Traced region boundary"
    );

    Ok(TracedRegion {
        outer,
        holes,
        pixel_count: info.pixel_count,
    })
}

/// Follow a component boundary clockwise through the Moore neighborhood.
///
/// `start` must be the component's first pixel in row-major scan order, so
/// its west neighbor is guaranteed outside. The next move is fully
/// determined by the (pixel, backtrack) pair, so the walk terminates when
/// that state repeats; plain re-entry of the start pixel is not enough,
/// because thin regions pass back through it with a different backtrack.
/// An isolated pixel terminates immediately.
fn moore_trace(
    inside: &dyn Fn(i64, i64) -> bool,
    start: (i64, i64),
    max_steps: usize,
) -> Vec<(i64, i64)> {
    let mut contour = vec![start];
    let mut cur = start;
    let mut backtrack = (start.0 - 1, start.1);
    let mut seen: HashSet<((i64, i64), (i64, i64))> = HashSet::new();
    seen.insert((cur, backtrack));

    for step in 0.. {
        if step >= max_steps {
            warn!(?start, max_steps, "Border following exceeded step bound");
            break;
        }

        let bdir = (backtrack.0 - cur.0, backtrack.1 - cur.1);
        // backtrack is always a neighbor of cur
        let bidx = RING.iter().position(|&d| d == bdir).unwrap_or(0);

        let mut advanced = false;
        for k in 1..=8 {
            let idx = (bidx + k) % 8;
            let next = (cur.0 + RING[idx].0, cur.1 + RING[idx].1);
            if inside(next.0, next.1) {
                let prev = (bidx + k - 1) % 8;
                backtrack = (cur.0 + RING[prev].0, cur.1 + RING[prev].1);
                cur = next;
                advanced = true;
                break;
            }
        }

        if !advanced {
            // isolated pixel
            break;
        }
        if !seen.insert((cur, backtrack)) {
            break;
        }
        contour.push(cur);
    }

    contour
}

/// Drop consecutive duplicates and collinear run interiors (wrap-aware).
///
/// Trace steps are unit 8-way moves, so collinearity is exact direction
/// equality.
fn collapse_collinear(points: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut deduped: Vec<(i64, i64)> = Vec::with_capacity(points.len());
    for &p in points {
        if deduped.last() != Some(&p) {
            deduped.push(p);
        }
    }
    while deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.pop();
    }
    if deduped.len() < 3 {
        return deduped;
    }

    let n = deduped.len();
    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let prev = deduped[(i + n - 1) % n];
        let cur = deduped[i];
        let next = deduped[(i + 1) % n];
        let din = (cur.0 - prev.0, cur.1 - prev.1);
        let dout = (next.0 - cur.0, next.1 - cur.1);
        if din != dout {
            kept.push(cur);
        }
    }
    kept
}

/// Membership test for one 4-connected background component.
fn hole_membership(mask: &AlphaMask, seed: (u32, u32)) -> impl Fn(i64, i64) -> bool {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let mut member = vec![false; width * height];
    let mut queue = VecDeque::new();

    let idx = move |x: i64, y: i64| (y as usize) * width + (x as usize);
    member[idx(i64::from(seed.0), i64::from(seed.1))] = true;
    queue.push_back((i64::from(seed.0), i64::from(seed.1)));
    while let Some((cx, cy)) = queue.pop_front() {
        for (dx, dy) in [(0, -1), (-1, 0), (1, 0), (0, 1)] {
            let (nx, ny) = (cx + dx, cy + dy);
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            if !mask.is_opaque_signed(nx, ny) && !member[idx(nx, ny)] {
                member[idx(nx, ny)] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    move |x: i64, y: i64| {
        x >= 0 && y >= 0 && x < width as i64 && y < height as i64 && member[idx(x, y)]
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_points(points: &[(i64, i64)]) -> Vec<Point2<f64>> {
    points
        .iter()
        .map(|&(x, y)| Point2::new(x as f64, y as f64))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mask_from_rows(rows: &[&str]) -> AlphaMask {
        let height = u32::try_from(rows.len()).unwrap();
        let width = u32::try_from(rows[0].len()).unwrap();
        let bits = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| c == '#'))
            .collect();
        AlphaMask::from_bits(width, height, bits)
    }

    fn permissive() -> TraceParams {
        TraceParams::default().with_min_region_area(0.0)
    }

    #[test]
    fn test_square_block_gives_four_corners() {
        let mask = mask_from_rows(&[
            "###", //
            "###", //
            "###", //
        ]);
        let regions = trace_contours(&mask, &permissive()).unwrap();
        assert_eq!(regions.len(), 1);

        let outer = &regions[0].outer;
        assert_eq!(outer.point_count(), 4);
        assert!(outer.is_ccw());
        // Pixel-center corners of a 3x3 block
        assert_relative_eq!(outer.area(), 4.0);
        assert_relative_eq!(outer.perimeter(), 8.0);
        assert_relative_eq!(outer.centroid().x, 1.0);
        assert_relative_eq!(outer.centroid().y, 1.0);

        let bounds = outer.bounds().unwrap();
        assert_relative_eq!(bounds.width(), 2.0);
        assert_relative_eq!(bounds.height(), 2.0);
    }

    #[test]
    fn test_single_pixel_is_degenerate() {
        let mask = mask_from_rows(&["#"]);
        let err = trace_contours(&mask, &permissive()).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DegenerateContour {
                region: 0,
                points: 1
            }
        ));
    }

    #[test]
    fn test_thin_line_is_degenerate() {
        let mask = mask_from_rows(&["######"]);
        let err = trace_contours(&mask, &permissive()).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DegenerateContour { points: 2, .. }
        ));
    }

    #[test]
    fn test_diagonal_pair_is_degenerate() {
        // Two pixels touching only at a corner: one 8-connected region
        // whose boundary walk goes out and straight back.
        let mask = mask_from_rows(&[
            "#.", //
            ".#", //
        ]);
        let err = trace_contours(&mask, &permissive()).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DegenerateContour { points: 2, .. }
        ));
    }

    #[test]
    fn test_diagonally_joined_blocks_terminate() {
        // Two 2x2 blocks pinched at a single diagonal contact. The walk
        // passes through the pinch twice with different backtracks and
        // must still close after exactly one boundary cycle.
        let mask = mask_from_rows(&[
            "##..", //
            "##..", //
            "..##", //
            "..##", //
        ]);
        let regions = trace_contours(&mask, &permissive()).unwrap();
        assert_eq!(regions.len(), 1);

        let outer = &regions[0].outer;
        assert_eq!(outer.point_count(), 10);
        assert!(outer.is_ccw());
        // One pixel-center unit square per block
        assert_relative_eq!(outer.area(), 2.0);
    }

    #[test]
    fn test_min_area_filters_noise() {
        let mask = mask_from_rows(&[
            "####....", //
            "####...#", //
            "####....", //
        ]);
        let params = TraceParams::default(); // min area 10
        let regions = trace_contours(&mask, &params).unwrap();
        // The lone pixel (and the 12-pixel block survives)
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].pixel_count, 12);
    }

    #[test]
    fn test_region_discovery_order() {
        let mask = mask_from_rows(&[
            "###..###", //
            "###..###", //
            "###..###", //
        ]);
        let regions = trace_contours(&mask, &permissive()).unwrap();
        assert_eq!(regions.len(), 2);
        assert_relative_eq!(regions[0].outer.points[0].x, 0.0);
        assert_relative_eq!(regions[1].outer.points[0].x, 5.0);
    }

    #[test]
    fn test_hole_tracing() {
        let mask = mask_from_rows(&[
            "#######", //
            "#.....#", //
            "#.....#", //
            "#.....#", //
            "#######", //
        ]);
        let params = permissive().with_holes(true);
        let regions = trace_contours(&mask, &params).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].holes.len(), 1);

        let hole = &regions[0].holes[0];
        assert!(hole.is_hole);
        assert!(!hole.is_ccw());
        assert_eq!(hole.depth, 1);
        // 5x3 interior, pixel-center loop spans 4x2
        assert_relative_eq!(hole.area(), 8.0);
    }

    #[test]
    fn test_holes_off_by_default() {
        let mask = mask_from_rows(&[
            "#####", //
            "#...#", //
            "#...#", //
            "#...#", //
            "#####", //
        ]);
        let regions = trace_contours(&mask, &permissive()).unwrap();
        assert!(regions[0].holes.is_empty());
    }

    #[test]
    fn test_l_shape_contour() {
        let mask = mask_from_rows(&[
            "##..", //
            "##..", //
            "####", //
            "####", //
        ]);
        let regions = trace_contours(&mask, &permissive()).unwrap();
        let outer = &regions[0].outer;
        // The inner corner is cut by a diagonal step between pixel centers
        assert_eq!(outer.point_count(), 7);
        assert!(outer.is_ccw());
        assert_relative_eq!(outer.area(), 5.5);
    }
}
