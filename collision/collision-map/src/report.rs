//! Pipeline result types.

use std::collections::BTreeMap;

use collision_types::{Aabb2, CollisionSet};

use crate::config::Config;
use crate::error::RegionError;

/// Minimum acceptable coverage ratio (shape area / opaque pixel area).
pub const COVERAGE_THRESHOLD: f64 = 0.95;

/// A per-region failure, tagged with the region's discovery index.
#[derive(Debug)]
pub struct RegionFailure {
    /// Discovery index of the failed region.
    pub region: usize,
    /// The stage error.
    pub error: RegionError,
}

/// Result of one pipeline invocation.
#[derive(Debug)]
pub struct CollisionReport {
    /// The assembled shape set, in region order then shape order.
    pub set: CollisionSet,

    /// Shape area divided by opaque pixel area.
    ///
    /// A validation signal: values below [`COVERAGE_THRESHOLD`] indicate the
    /// decomposition lost geometry, but the result is never auto-corrected.
    pub coverage: f64,

    /// Whether `coverage >= COVERAGE_THRESHOLD`.
    pub meets_coverage: bool,

    /// Opaque pixel count of the source mask.
    pub opaque_pixels: usize,

    /// Number of regions attempted (after noise filtering).
    pub region_count: usize,

    /// Per-region failures; successful regions are unaffected.
    pub failures: Vec<RegionFailure>,

    /// Configuration used for this invocation.
    pub config: Config,
}

impl CollisionReport {
    /// Number of output shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.set.len()
    }

    /// Total vertex count across all shapes.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.set.total_vertices()
    }

    /// Bounding box of the generated shapes, in pixel coordinates.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        self.set.bounds()
    }

    /// Shape count per vertex count, sorted by vertex count.
    #[must_use]
    pub fn vertex_distribution(&self) -> BTreeMap<usize, usize> {
        let mut dist = BTreeMap::new();
        for shape in &self.set {
            *dist.entry(shape.vertex_count()).or_insert(0) += 1;
        }
        dist
    }

    /// Whether any region failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
