//! Error types for the assembly pipeline.

use std::path::PathBuf;

use collision_earcut::EarcutError;
use collision_mask::MaskError;
use collision_simplify::SimplifyError;
use collision_trace::TraceError;
use collision_types::ShapeError;
use thiserror::Error;

/// A failure inside one region's processing pipeline.
///
/// Collected per region so one bad region never aborts the others.
#[derive(Debug, Error)]
pub enum RegionError {
    /// Contour tracing failed.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Simplification failed (degenerate loop or unreachable vertex cap).
    #[error(transparent)]
    Simplify(#[from] SimplifyError),

    /// Triangulation failed (self-intersecting boundary).
    #[error(transparent)]
    Earcut(#[from] EarcutError),

    /// Shape construction failed (vertex-count bound).
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors that can abort a whole pipeline invocation.
#[derive(Debug, Error)]
pub enum MapError {
    /// Epsilon must be finite and non-negative.
    #[error("Invalid epsilon {0} (must be finite and >= 0)")]
    InvalidEpsilon(f64),

    /// Vertex cap outside the supported 3-8 range.
    #[error("Invalid max_vertices {0} (must be 3-8)")]
    InvalidMaxVertices(usize),

    /// Minimum region area must be finite and non-negative.
    #[error("Invalid min_region_area {0} (must be finite and >= 0)")]
    InvalidMinRegionArea(f64),

    /// Mask extraction failed (empty mask or bad input buffer).
    #[error(transparent)]
    Mask(#[from] MaskError),

    /// Every region failed; no collision shape was produced.
    #[error("No valid collision shapes generated ({regions} region(s) attempted)")]
    NoShapes {
        /// Number of regions attempted.
        regions: usize,
    },

    /// Deserialized shape data violated the vertex-count bounds.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// JSON encode/decode failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error during export.
    #[error("Failed to write to {path}: {source}")]
    IoWrite {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline operations.
pub type MapResult<T> = std::result::Result<T, MapError>;
