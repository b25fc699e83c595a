//! Binary opacity mask.

/// A width x height boolean opacity grid derived from an alpha channel.
///
/// Coordinates outside the grid are implicitly background, so boundary
/// tracing never needs bounds special-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl AlphaMask {
    /// Build a mask from row-major bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits.len() != width * height` (internal constructor; the
    /// public path is [`crate::extract_mask`]).
    #[must_use]
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(bits.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            bits,
        }
    }

    /// Mask width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` is opaque; out-of-bounds reads are background.
    ///
    /// Accepts signed coordinates so neighbor probes can run off the edge.
    #[must_use]
    pub fn is_opaque_signed(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        #[allow(clippy::cast_sign_loss)]
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.bits[idx]
    }

    /// Whether `(x, y)` is opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.is_opaque_signed(i64::from(x), i64::from(y))
    }

    /// Number of opaque pixels.
    #[must_use]
    pub fn opaque_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Raw row-major bits.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_access() {
        let mask = AlphaMask::from_bits(2, 2, vec![true, false, false, true]);
        assert!(mask.is_opaque_signed(0, 0));
        assert!(mask.is_opaque_signed(1, 1));
        assert!(!mask.is_opaque_signed(-1, 0));
        assert!(!mask.is_opaque_signed(0, 2));
    }

    #[test]
    fn test_opaque_count() {
        let mask = AlphaMask::from_bits(3, 1, vec![true, true, false]);
        assert_eq!(mask.opaque_count(), 2);
    }
}
