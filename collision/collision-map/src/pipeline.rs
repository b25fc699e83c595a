//! The end-to-end generation pipeline.

use collision_earcut::triangulate;
use collision_mask::{AlphaMask, RasterImage, extract_mask};
use collision_simplify::{SimplifyError, merge_close_vertices, simplify_capped, simplify_loop};
use collision_trace::{TraceError, TraceParams, TracedRegion, label_regions, trace_region};
use collision_types::{BoundedPolygon, CollisionSet, CollisionShape, Polygon};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{Config, OutputMode};
use crate::error::{MapError, MapResult, RegionError};
use crate::report::{COVERAGE_THRESHOLD, CollisionReport, RegionFailure};

/// Output of the tracing phase, before any geometry processing.
///
/// Cloneable so a contour cache can hand the same outcome to repeated
/// invocations with different geometry parameters.
#[derive(Debug, Clone)]
pub(crate) struct TraceOutcome {
    /// Successfully traced regions, tagged with discovery index.
    pub regions: Vec<(usize, TracedRegion)>,
    /// Per-region trace failures, tagged with discovery index.
    pub failures: Vec<(usize, TraceError)>,
    /// Regions attempted after noise filtering.
    pub attempted: usize,
}

/// Run the full pipeline: mask, trace, simplify, shape, report.
///
/// Regions are processed independently; a failure in one region is recorded
/// in the report and does not abort the others. Shapes appear in
/// region-discovery order.
///
/// # Errors
///
/// - `MapError::Invalid*` for out-of-range configuration.
/// - [`MapError::Mask`] when no pixel clears the alpha threshold.
/// - [`MapError::NoShapes`] when every region failed.
pub fn generate_collision_set(
    image: &RasterImage,
    config: &Config,
) -> MapResult<CollisionReport> {
    config.validate()?;
    let mask = extract_mask(image, config.alpha_threshold)?;
    let outcome = trace_phase(&mask, config);
    assemble(&mask, outcome, config)
}

/// Trace every region large enough to matter, collecting per-region errors.
pub(crate) fn trace_phase(mask: &AlphaMask, config: &Config) -> TraceOutcome {
    let params = TraceParams::default()
        .with_holes(config.include_holes)
        .with_min_region_area(config.min_region_area);
    let map = label_regions(mask, config.include_holes);

    let mut regions = Vec::new();
    let mut failures = Vec::new();
    let mut attempted = 0;
    for index in 0..map.region_count() {
        #[allow(clippy::cast_precision_loss)]
        if (map.regions()[index].pixel_count as f64) < config.min_region_area {
            debug!(region = index, "Skipping sub-threshold region");
            continue;
        }
        attempted += 1;
        match trace_region(mask, &map, &params, index) {
            Ok(traced) => regions.push((index, traced)),
            Err(err) => {
                warn!(region = index, error = %err, "Region trace failed");
                failures.push((index, err));
            }
        }
    }

    TraceOutcome {
        regions,
        failures,
        attempted,
    }
}

/// Turn traced regions into shapes and fold everything into a report.
pub(crate) fn assemble(
    mask: &AlphaMask,
    outcome: TraceOutcome,
    config: &Config,
) -> MapResult<CollisionReport> {
    let mut failures: Vec<RegionFailure> = outcome
        .failures
        .into_iter()
        .map(|(region, err)| RegionFailure {
            region,
            error: err.into(),
        })
        .collect();

    let shaped: Vec<(usize, Result<Vec<CollisionShape>, RegionError>)> = outcome
        .regions
        .par_iter()
        .map(|(index, region)| (*index, build_shapes(region, config)))
        .collect();

    let mut set = CollisionSet::new();
    for (index, result) in shaped {
        match result {
            Ok(shapes) => {
                for shape in shapes {
                    set.push(shape);
                }
            }
            Err(err) => {
                warn!(region = index, error = %err, "Region shaping failed");
                failures.push(RegionFailure {
                    region: index,
                    error: err,
                });
            }
        }
    }
    failures.sort_by_key(|f| f.region);

    if set.is_empty() {
        return Err(MapError::NoShapes {
            regions: outcome.attempted,
        });
    }

    let opaque_pixels = mask.opaque_count();
    #[allow(clippy::cast_precision_loss)]
    let coverage = if opaque_pixels == 0 {
        0.0
    } else {
        set.total_area() / opaque_pixels as f64
    };
    let meets_coverage = coverage >= COVERAGE_THRESHOLD;
    if !meets_coverage {
        warn!(
            coverage,
            threshold = COVERAGE_THRESHOLD,
            "Collision shapes under-cover the opaque mask"
        );
    }

    info!(
        shapes = set.len(),
        regions = outcome.attempted,
        failures = failures.len(),
        coverage,
        "Collision set generated"
    );

    Ok(CollisionReport {
        set,
        coverage,
        meets_coverage,
        opaque_pixels,
        region_count: outcome.attempted,
        failures,
        config: config.clone(),
    })
}

/// Convert one traced region into output shapes per the configured mode.
fn build_shapes(
    region: &TracedRegion,
    config: &Config,
) -> Result<Vec<CollisionShape>, RegionError> {
    match config.mode {
        OutputMode::Triangulate => {
            let outer = simplify_loop(&region.outer, config.epsilon)?;
            let mut holes = Vec::with_capacity(region.holes.len());
            for hole in &region.holes {
                match simplify_loop(hole, config.epsilon) {
                    Ok(simplified) => holes.push(simplified),
                    // A hole that simplifies away is just filled in.
                    Err(SimplifyError::DegenerateLoop { points }) => {
                        debug!(points, "Dropping hole that simplified to nothing");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            let triangles = triangulate(&Polygon::with_holes(outer, holes))?;
            Ok(triangles.into_iter().map(CollisionShape::from).collect())
        }
        OutputMode::LegacyPolygon => {
            let capped = simplify_capped(&region.outer, config.epsilon, config.max_vertices)?;
            let merged = merge_close_vertices(&capped, config.merge_distance);
            let polygon = BoundedPolygon::new(merged.points)?;
            Ok(vec![CollisionShape::Polygon(polygon)])
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// RGBA image from an ASCII art grid: `#` opaque, `.` transparent.
    fn image_from_rows(rows: &[&str]) -> RasterImage {
        let height = u32::try_from(rows.len()).unwrap();
        let width = u32::try_from(rows[0].len()).unwrap();
        let alphas: Vec<u8> = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| if c == '#' { 255 } else { 0 }))
            .collect();
        RasterImage::from_alpha(width, height, alphas).unwrap()
    }

    fn permissive() -> Config {
        Config::default().with_min_region_area(0.0)
    }

    #[test]
    fn test_square_triangulates_to_two() {
        let image = image_from_rows(&[
            "###", //
            "###", //
            "###", //
        ]);
        let config = permissive().with_epsilon(0.0);
        let report = generate_collision_set(&image, &config).unwrap();

        assert_eq!(report.shape_count(), 2);
        assert!(report.failures.is_empty());
        assert_relative_eq!(report.set.total_area(), 4.0);
        for shape in &report.set {
            assert_eq!(shape.vertex_count(), 3);
        }
    }

    #[test]
    fn test_transparent_image_is_empty_mask() {
        let image = image_from_rows(&["...", "..."]);
        let err = generate_collision_set(&image, &permissive()).unwrap_err();
        assert!(matches!(err, MapError::Mask(_)));
    }

    #[test]
    fn test_single_pixel_yields_no_shapes() {
        let image = image_from_rows(&["#"]);
        let err = generate_collision_set(&image, &permissive()).unwrap_err();
        assert!(matches!(err, MapError::NoShapes { regions: 1 }));
    }

    #[test]
    fn test_degenerate_region_does_not_abort_others() {
        // A healthy block plus an isolated pixel: the block succeeds, the
        // pixel is recorded as a failure.
        let image = image_from_rows(&[
            "####....", //
            "####...#", //
            "####....", //
        ]);
        let config = permissive().with_epsilon(0.0);
        let report = generate_collision_set(&image, &config).unwrap();
        assert!(report.shape_count() >= 2);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            RegionError::Trace(TraceError::DegenerateContour { .. })
        ));
    }

    #[test]
    fn test_legacy_mode_bounds_vertices() {
        let image = image_from_rows(&[
            "..####..", //
            ".######.", //
            "########", //
            "########", //
            ".######.", //
            "..####..", //
        ]);
        let config = permissive()
            .with_mode(OutputMode::LegacyPolygon)
            .with_epsilon(0.5);
        let report = generate_collision_set(&image, &config).unwrap();

        assert_eq!(report.shape_count(), 1);
        let count = report.set.shapes[0].vertex_count();
        assert!((3..=8).contains(&count), "vertex count {count}");
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let image = image_from_rows(&["###", "###", "###"]);
        let config = permissive().with_epsilon(-1.0);
        assert!(matches!(
            generate_collision_set(&image, &config),
            Err(MapError::InvalidEpsilon(_))
        ));
        let config = permissive().with_max_vertices(12);
        assert!(matches!(
            generate_collision_set(&image, &config),
            Err(MapError::InvalidMaxVertices(12))
        ));
    }

    #[test]
    fn test_regions_emit_in_discovery_order() {
        let image = image_from_rows(&[
            "###..###", //
            "###..###", //
            "###..###", //
        ]);
        let config = permissive().with_epsilon(0.0);
        let report = generate_collision_set(&image, &config).unwrap();
        assert_eq!(report.region_count, 2);
        assert_eq!(report.shape_count(), 4);

        // First two triangles come from the left block.
        let left_max_x = report.set.shapes[..2]
            .iter()
            .flat_map(CollisionShape::points)
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(left_max_x <= 2.0);
    }

    #[test]
    fn test_coverage_reported_for_large_block() {
        let rows: Vec<String> = (0..64).map(|_| "#".repeat(64)).collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let image = image_from_rows(&refs);
        let report = generate_collision_set(&image, &permissive()).unwrap();

        // Pixel-center contour of a 64x64 block encloses 63x63.
        assert_relative_eq!(report.set.total_area(), 3969.0);
        assert!(report.meets_coverage, "coverage {}", report.coverage);
    }

    #[test]
    fn test_holes_carved_when_enabled() {
        let mut rows = vec!["#".repeat(20); 20];
        for row in rows.iter_mut().take(15).skip(5) {
            *row = format!("{}{}{}", "#".repeat(5), ".".repeat(10), "#".repeat(5));
        }
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let image = image_from_rows(&refs);

        let config = permissive().with_holes(true).with_epsilon(0.0);
        let report = generate_collision_set(&image, &config).unwrap();

        // Outer 19x19 pixel-center square minus the 9x9 hole loop interior.
        assert_relative_eq!(report.set.total_area(), 361.0 - 81.0);

        let without = permissive().with_epsilon(0.0);
        let filled = generate_collision_set(&image, &without).unwrap();
        assert_relative_eq!(filled.set.total_area(), 361.0);
    }
}
