//! Error types for contour tracing.

use thiserror::Error;

/// Errors that can occur during contour tracing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// A traced boundary collapsed to fewer than 3 distinct points.
    #[error("Region {region} boundary degenerated to {points} point(s) (3 required)")]
    DegenerateContour {
        /// Discovery index of the offending region.
        region: usize,
        /// Distinct point count after collinear collapse.
        points: usize,
    },

    /// Region index out of range for the region map.
    #[error("Region index {region} out of range ({count} regions)")]
    RegionIndex {
        /// The requested region index.
        region: usize,
        /// Number of regions in the map.
        count: usize,
    },
}

/// Result type for tracing operations.
pub type TraceResult<T> = std::result::Result<T, TraceError>;
