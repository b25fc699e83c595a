//! Error types for collision shape construction.

use thiserror::Error;

/// Errors that can occur when constructing collision shapes.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Shape has an invalid number of vertices.
    #[error("Shape must have {min}-{max} vertices, got {count}")]
    VertexCount {
        /// Number of vertices supplied.
        count: usize,
        /// Minimum allowed vertex count.
        min: usize,
        /// Maximum allowed vertex count.
        max: usize,
    },
}

/// Result type for shape construction.
pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::VertexCount {
            count: 9,
            min: 3,
            max: 8,
        };
        assert_eq!(format!("{err}"), "Shape must have 3-8 vertices, got 9");
    }
}
