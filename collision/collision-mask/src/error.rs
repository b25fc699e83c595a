//! Error types for mask extraction.

use thiserror::Error;

/// Errors that can occur while building an alpha mask.
#[derive(Debug, Error)]
pub enum MaskError {
    /// No pixel cleared the alpha threshold.
    #[error("No opaque pixels at alpha threshold {threshold}")]
    EmptyMask {
        /// Threshold that produced the empty mask.
        threshold: u8,
    },

    /// RGBA buffer length does not match the image dimensions.
    #[error("Buffer of {actual} bytes does not match {width}x{height} ({expected} expected)")]
    BufferSize {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Expected buffer length in bytes.
        expected: usize,
        /// Supplied buffer length in bytes.
        actual: usize,
    },

    /// Image has a zero dimension.
    #[error("Image has zero dimension: {width}x{height}")]
    ZeroDimension {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

/// Result type for mask operations.
pub type MaskResult<T> = std::result::Result<T, MaskError>;
