//! Pointwise and geometric transforms: invert, flip.

use ndarray::Array3;

use crate::buffer::PixelBuffer;

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Reverse column order (mirror left/right).
    Horizontal,
    /// Reverse row order (mirror top/bottom).
    Vertical,
}

/// Invert every color channel: `new = 255 - old`.
///
/// The alpha channel, if present, passes through unchanged; inverting
/// transparency would be visually wrong.
pub fn invert(input: &PixelBuffer) -> PixelBuffer {
    let (width, height, channels) = (input.width(), input.height(), input.channels());
    let view = input.view();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let color_channels = if channels == 4 { 3 } else { channels };

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                output[[y, x, c]] = 255 - view[[y, x, c]];
            }
            if channels == 4 {
                output[[y, x, 3]] = view[[y, x, 3]];
            }
        }
    }

    PixelBuffer::from_array(output)
}

/// Mirror the image along one axis.
///
/// Only pixel positions permute; channel values are copied verbatim.
pub fn flip(input: &PixelBuffer, axis: FlipAxis) -> PixelBuffer {
    let (width, height, channels) = (input.width(), input.height(), input.channels());
    let view = input.view();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let (sy, sx) = match axis {
                FlipAxis::Horizontal => (y, width - 1 - x),
                FlipAxis::Vertical => (height - 1 - y, x),
            };
            for c in 0..channels {
                output[[y, x, c]] = view[[sy, sx, c]];
            }
        }
    }

    PixelBuffer::from_array(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_white_rgba() {
        // 3x3 all-white, fully opaque
        let input = PixelBuffer::from_raw(3, 3, 4, vec![255; 3 * 3 * 4]);

        let output = invert(&input);
        let view = output.view();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(view[[y, x, 0]], 0);
                assert_eq!(view[[y, x, 1]], 0);
                assert_eq!(view[[y, x, 2]], 0);
                assert_eq!(view[[y, x, 3]], 255); // Alpha preserved
            }
        }
    }

    #[test]
    fn test_invert_is_involution() {
        let data: Vec<u8> = (0..48).map(|i| (i * 3 + 7) as u8).collect();
        let input = PixelBuffer::from_raw(4, 3, 4, data);

        assert_eq!(invert(&invert(&input)), input);
    }

    #[test]
    fn test_invert_grayscale() {
        let input = PixelBuffer::from_raw(2, 1, 1, vec![0, 200]);
        let output = invert(&input);

        assert_eq!(output.view()[[0, 0, 0]], 255);
        assert_eq!(output.view()[[0, 1, 0]], 55);
    }

    #[test]
    fn test_flip_horizontal_checkerboard() {
        // 2x2 grayscale checkerboard: 255 0 / 0 255
        let input = PixelBuffer::from_raw(2, 2, 1, vec![255, 0, 0, 255]);

        let output = flip(&input, FlipAxis::Horizontal);
        let view = output.view();

        // Columns swap, rows stay
        assert_eq!(view[[0, 0, 0]], 0);
        assert_eq!(view[[0, 1, 0]], 255);
        assert_eq!(view[[1, 0, 0]], 255);
        assert_eq!(view[[1, 1, 0]], 0);
    }

    #[test]
    fn test_flip_vertical_swaps_rows() {
        let input = PixelBuffer::from_raw(1, 2, 3, vec![10, 20, 30, 40, 50, 60]);

        let output = flip(&input, FlipAxis::Vertical);
        let view = output.view();

        assert_eq!(view[[0, 0, 0]], 40);
        assert_eq!(view[[0, 0, 1]], 50);
        assert_eq!(view[[0, 0, 2]], 60);
        assert_eq!(view[[1, 0, 0]], 10);
    }

    #[test]
    fn test_flip_is_involution() {
        let data: Vec<u8> = (0..60).map(|i| (i * 11) as u8).collect();
        let input = PixelBuffer::from_raw(5, 3, 4, data);

        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            assert_eq!(flip(&flip(&input, axis), axis), input, "{axis:?}");
        }
    }
}
