//! Tracing parameters.

/// Minimum region (or hole) area in square pixels.
///
/// Connected components smaller than this are treated as raster noise and
/// discarded: opaque specks produce no contour, and enclosed background
/// specks are filled rather than traced as holes.
pub const MIN_REGION_AREA: f64 = 10.0;

/// Parameters for contour tracing.
#[derive(Debug, Clone)]
pub struct TraceParams {
    /// Trace enclosed background components as hole loops.
    ///
    /// Off by default: only external boundaries are traced, matching the
    /// legacy extractor.
    pub include_holes: bool,

    /// Minimum component area in square pixels; smaller opaque regions and
    /// holes are discarded as noise.
    pub min_region_area: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            include_holes: false,
            min_region_area: MIN_REGION_AREA,
        }
    }
}

impl TraceParams {
    /// Enable or disable hole tracing.
    #[must_use]
    pub const fn with_holes(mut self, include_holes: bool) -> Self {
        self.include_holes = include_holes;
        self
    }

    /// Set the minimum component area.
    #[must_use]
    pub const fn with_min_region_area(mut self, area: f64) -> Self {
        self.min_region_area = area;
        self
    }
}
