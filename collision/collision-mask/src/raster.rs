//! Caller-owned RGBA raster input.

use crate::error::{MaskError, MaskResult};

/// An RGBA8 raster image, as produced by an image decoder.
///
/// The pipeline only reads the alpha channel; RGB bytes are carried for the
/// preview-rendering collaborator. Reads outside the image bounds return 0
/// (implicit transparent background).
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create an image from a tightly packed RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::ZeroDimension`] for zero-sized images and
    /// [`MaskError::BufferSize`] when the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> MaskResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskError::ZeroDimension { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(MaskError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from a bare alpha channel (RGB set to zero).
    ///
    /// Convenience for tests and tooling that only care about opacity.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RasterImage::from_rgba`], with the buffer
    /// expected to be `width * height` alpha bytes.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> MaskResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskError::ZeroDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if alpha.len() != expected {
            return Err(MaskError::BufferSize {
                width,
                height,
                expected,
                actual: alpha.len(),
            });
        }
        let mut pixels = vec![0u8; expected * 4];
        for (i, a) in alpha.into_iter().enumerate() {
            pixels[i * 4 + 3] = a;
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 buffer, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Alpha value at `(x, y)`; 0 outside the image bounds.
    #[must_use]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4 + 3;
        self.pixels[idx]
    }
}
