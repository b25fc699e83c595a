//! Error types for ear-clipping triangulation.

use thiserror::Error;

/// Errors that can occur during triangulation.
#[derive(Debug, Error)]
pub enum EarcutError {
    /// Polygon has fewer than 3 vertices.
    #[error("Polygon must have at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Supplied vertex count.
        count: usize,
    },

    /// No valid ear was found before the polygon was exhausted, which means
    /// an upstream stage produced a self-intersecting boundary.
    #[error("No valid ear with {remaining} vertices remaining (polygon is not simple)")]
    NonSimplePolygon {
        /// Vertices remaining when clipping stalled.
        remaining: usize,
    },
}

/// Result type for triangulation operations.
pub type EarcutResult<T> = std::result::Result<T, EarcutError>;
