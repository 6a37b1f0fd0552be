//! Owned pixel buffer shared by all filters.
//!
//! Images are stored as `(height, width, channels)` arrays of 8-bit
//! samples, row-major and channel-interleaved. Supported channel counts:
//!
//! | Format | Shape | Description |
//! |--------|-------|-------------|
//! | Grayscale | (H, W, 1) | Single luminance channel |
//! | RGB | (H, W, 3) | Red, green, blue |
//! | RGBA | (H, W, 4) | RGB + alpha |
//!
//! A buffer is owned by exactly one pipeline stage at a time; stages
//! produce fresh output buffers instead of mutating their input.

use ndarray::{Array3, ArrayView3};

/// Decoded raster image: flat `u8` samples with known dimensions.
///
/// Construction asserts the shape invariants (sample count matches
/// `width * height * channels`, channel count is 1, 3 or 4). Violating
/// them is a programming error, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from a flat sample vector.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Samples per pixel (1, 3 or 4)
    /// * `data` - Row-major, channel-interleaved samples
    ///
    /// # Panics
    /// If `channels` is unsupported or `data.len() != width * height * channels`.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        assert!(
            matches!(channels, 1 | 3 | 4),
            "unsupported channel count: {channels}"
        );
        let data = Array3::from_shape_vec((height, width, channels), data)
            .expect("sample count must equal width * height * channels");
        Self { data }
    }

    /// Wrap an existing `(H, W, C)` array.
    pub fn from_array(data: Array3<u8>) -> Self {
        let channels = data.dim().2;
        assert!(
            matches!(channels, 1 | 3 | 4),
            "unsupported channel count: {channels}"
        );
        Self { data }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Samples per pixel (1, 3 or 4)
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Whether the last channel is an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.channels() == 4
    }

    /// Read-only view of the underlying `(H, W, C)` array.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Sample with clamp-to-edge semantics.
    ///
    /// Out-of-bounds coordinates are clamped to the nearest valid pixel,
    /// so border pixels reuse their own values for missing neighbors.
    /// Requires `width, height >= 1`.
    #[inline]
    pub fn sample_clamped(&self, x: isize, y: isize, c: usize) -> u8 {
        let sx = x.clamp(0, self.width() as isize - 1) as usize;
        let sy = y.clamp(0, self.height() as isize - 1) as usize;
        self.data[[sy, sx, c]]
    }

    /// Consume the buffer and return the flat sample vector.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }

    /// Copy the samples into a fresh flat vector.
    pub fn to_raw_vec(&self) -> Vec<u8> {
        self.data.clone().into_raw_vec_and_offset().0
    }
}
