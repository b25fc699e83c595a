//! Error types for loop simplification.

use thiserror::Error;

/// Errors that can occur during loop simplification.
#[derive(Debug, Error)]
pub enum SimplifyError {
    /// Epsilon must be finite and non-negative.
    #[error("Invalid epsilon {0} (must be finite and >= 0)")]
    InvalidEpsilon(f64),

    /// Vertex cap outside the supported 3-8 range.
    #[error("Invalid vertex cap {0} (must be 3-8)")]
    InvalidMaxVertices(usize),

    /// The loop collapsed below 3 vertices: not even a triangle remains.
    #[error("Loop degenerated to {points} point(s) during simplification")]
    DegenerateLoop {
        /// Remaining point count.
        points: usize,
    },

    /// The vertex cap was still exceeded after bounded epsilon backoff.
    #[error(
        "Could not reduce loop to {max_vertices} vertices after {iterations} backoff iterations (best: {vertices})"
    )]
    CapUnreachable {
        /// Vertex count of the best attempt.
        vertices: usize,
        /// The requested cap.
        max_vertices: usize,
        /// Number of backoff iterations performed.
        iterations: usize,
    },
}

/// Result type for simplification operations.
pub type SimplifyResult<T> = std::result::Result<T, SimplifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimplifyError::CapUnreachable {
            vertices: 12,
            max_vertices: 8,
            iterations: 10,
        };
        let msg = format!("{err}");
        assert!(msg.contains("8 vertices"));
        assert!(msg.contains("10 backoff"));
    }
}
