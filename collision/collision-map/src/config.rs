//! Pipeline configuration.

use collision_mask::DEFAULT_ALPHA_THRESHOLD;
use collision_trace::MIN_REGION_AREA;
use collision_types::MAX_SHAPE_VERTICES;

use crate::error::{MapError, MapResult};

/// Output shape format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Ear-clipping triangulation: every shape has exactly 3 vertices.
    ///
    /// This is the primary mode.
    #[default]
    Triangulate,

    /// Legacy mode: one 3-8 vertex polygon per region, produced by
    /// vertex-capped simplification.
    LegacyPolygon,
}

/// Parameters for a pipeline invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Alpha threshold (0-255); pixels with alpha above it are opaque.
    pub alpha_threshold: u8,

    /// Douglas-Peucker tolerance in pixels.
    pub epsilon: f64,

    /// Vertex cap for legacy mode (3-8).
    pub max_vertices: usize,

    /// Output shape format.
    pub mode: OutputMode,

    /// Trace enclosed background components as holes.
    pub include_holes: bool,

    /// Minimum region area in square pixels; smaller regions are noise.
    pub min_region_area: f64,

    /// Distance under which consecutive vertices are merged (legacy mode).
    pub merge_distance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            epsilon: 2.0,
            max_vertices: MAX_SHAPE_VERTICES,
            mode: OutputMode::default(),
            include_holes: false,
            min_region_area: MIN_REGION_AREA,
            merge_distance: 2.0,
        }
    }
}

impl Config {
    /// Set the alpha threshold.
    #[must_use]
    pub const fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set the simplification tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the legacy vertex cap.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Set the output mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable hole tracing.
    #[must_use]
    pub const fn with_holes(mut self, include_holes: bool) -> Self {
        self.include_holes = include_holes;
        self
    }

    /// Set the minimum region area.
    #[must_use]
    pub const fn with_min_region_area(mut self, area: f64) -> Self {
        self.min_region_area = area;
        self
    }

    /// Set the legacy vertex-merge distance.
    #[must_use]
    pub const fn with_merge_distance(mut self, distance: f64) -> Self {
        self.merge_distance = distance;
        self
    }

    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns the matching `MapError::Invalid*` variant for an
    /// out-of-range parameter.
    pub fn validate(&self) -> MapResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(MapError::InvalidEpsilon(self.epsilon));
        }
        if !(3..=MAX_SHAPE_VERTICES).contains(&self.max_vertices) {
            return Err(MapError::InvalidMaxVertices(self.max_vertices));
        }
        if !self.min_region_area.is_finite() || self.min_region_area < 0.0 {
            return Err(MapError::InvalidMinRegionArea(self.min_region_area));
        }
        Ok(())
    }
}
