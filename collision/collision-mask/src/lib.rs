//! Alpha-channel thresholding into binary opacity masks.
//!
//! First stage of the collision pipeline: a caller-owned RGBA raster is
//! reduced to an [`AlphaMask`], a width x height boolean grid where a pixel
//! is opaque iff its alpha value exceeds the threshold.
//!
//! # Example
//!
//! ```
//! use collision_mask::{extract_mask, RasterImage, DEFAULT_ALPHA_THRESHOLD};
//!
//! // A 2x1 image: one opaque pixel, one transparent
//! let image = RasterImage::from_alpha(2, 1, vec![255, 0]).unwrap();
//! let mask = extract_mask(&image, DEFAULT_ALPHA_THRESHOLD).unwrap();
//!
//! assert!(mask.is_opaque(0, 0));
//! assert!(!mask.is_opaque(1, 0));
//! assert_eq!(mask.opaque_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mask;
mod raster;

pub use error::{MaskError, MaskResult};
pub use mask::AlphaMask;
pub use raster::RasterImage;

use tracing::debug;

/// Default alpha threshold: pixels with alpha above this are opaque.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Threshold an image's alpha channel into a binary opacity mask.
///
/// A pixel is opaque iff `alpha(x, y) > threshold`. Raising the threshold
/// therefore never increases the opaque-pixel count.
///
/// # Errors
///
/// Returns [`MaskError::EmptyMask`] when no pixel clears the threshold.
pub fn extract_mask(image: &RasterImage, threshold: u8) -> MaskResult<AlphaMask> {
    let width = image.width();
    let height = image.height();
    let mut bits = Vec::with_capacity((width as usize) * (height as usize));

    for y in 0..height {
        for x in 0..width {
            bits.push(image.alpha(x, y) > threshold);
        }
    }

    let mask = AlphaMask::from_bits(width, height, bits);
    let opaque = mask.opaque_count();
    if opaque == 0 {
        return Err(MaskError::EmptyMask { threshold });
    }

    debug!(
        opaque,
        total = (width as usize) * (height as usize),
        threshold,
        "Alpha mask extracted"
    );

    Ok(mask)
}
