//! Filter dispatch and boundary marshalling.
//!
//! A boundary call is one synchronous pass: decode the incoming base64
//! string, run exactly one filter, encode the result back to a base64
//! string. Buffers move by value from stage to stage and are dropped on
//! every exit path, success or error; nothing survives the call.
//!
//! Either a fully filtered image comes back or the call fails; no
//! partial output is ever encoded.

use crate::buffer::PixelBuffer;
use crate::codec::{self, Container};
use crate::error::FilterError;
use crate::filters::convolve::convolve;
use crate::filters::pointwise::{flip, invert, FlipAxis};
use crate::kernel::{gaussian_size_for_sigma, generate_gaussian_kernel};

/// Sigma used by [`apply_basic_gaussian`].
pub const DEFAULT_BLUR_SIGMA: f32 = 5.0;

/// The closed set of filters reachable from the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Gaussian blur with the given standard deviation.
    Gaussian { sigma: f32 },
    /// Per-channel color negation, alpha untouched.
    Invert,
    /// Mirror along one axis.
    Flip { axis: FlipAxis },
}

/// Run one filter over an encoded image.
///
/// Output is always PNG (lossless, keeps alpha) wrapped in a data-URI,
/// with pixel dimensions identical to the input.
///
/// # Errors
/// Any stage error ([`FilterError::Decode`], [`FilterError::Encode`],
/// kernel errors) aborts the call before encoding.
pub fn apply_filter(encoded: &str, filter: FilterKind) -> Result<String, FilterError> {
    let decoded = codec::decode(encoded)?;

    let processed = match filter {
        FilterKind::Gaussian { sigma } => gaussian_blur(decoded, sigma)?,
        FilterKind::Invert => invert(&decoded),
        FilterKind::Flip { axis } => flip(&decoded, axis),
    };

    codec::encode(&processed, Container::Png)
}

/// Blur with a kernel sized from sigma (±3σ coverage).
///
/// The derived kernel side is clamped to the largest odd value that
/// still fits the image, so a fixed sigma works on arbitrarily small
/// inputs. Non-positive sigma returns the decoded image unchanged.
fn gaussian_blur(input: PixelBuffer, sigma: f32) -> Result<PixelBuffer, FilterError> {
    if sigma <= 0.0 {
        return Ok(input);
    }

    let mut size = gaussian_size_for_sigma(sigma);
    let limit = input.width().min(input.height()) + 1;
    if size > limit {
        size = if limit % 2 == 0 { limit - 1 } else { limit };
    }

    log::debug!("gaussian blur: sigma={sigma}, kernel {size}x{size}");
    let kernel = generate_gaussian_kernel(size, sigma)?;
    convolve(&input, &kernel)
}

// ============================================================================
// Fixed-configuration entry points
// ============================================================================

/// Gaussian blur with sigma [`DEFAULT_BLUR_SIGMA`].
pub fn apply_basic_gaussian(encoded: &str) -> Result<String, FilterError> {
    apply_filter(
        encoded,
        FilterKind::Gaussian {
            sigma: DEFAULT_BLUR_SIGMA,
        },
    )
}

/// Color inversion.
pub fn apply_invert(encoded: &str) -> Result<String, FilterError> {
    apply_filter(encoded, FilterKind::Invert)
}

/// Horizontal mirror.
pub fn apply_flip(encoded: &str) -> Result<String, FilterError> {
    apply_filter(
        encoded,
        FilterKind::Flip {
            axis: FlipAxis::Horizontal,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(buffer: &PixelBuffer) -> String {
        codec::encode(buffer, Container::Png).unwrap()
    }

    #[test]
    fn test_invert_end_to_end() {
        let input = PixelBuffer::from_raw(3, 3, 4, vec![255; 3 * 3 * 4]);

        let result = apply_invert(&encode_png(&input)).unwrap();
        let output = codec::decode(&result).unwrap();
        let view = output.view();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(view[[y, x, 0]], 0);
                assert_eq!(view[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_flip_end_to_end() {
        // 2x1 RGB: red pixel, then blue pixel
        let input = PixelBuffer::from_raw(2, 1, 3, vec![255, 0, 0, 0, 0, 255]);

        let result = apply_flip(&encode_png(&input)).unwrap();
        let output = codec::decode(&result).unwrap();
        let view = output.view();

        assert_eq!(view[[0, 0, 2]], 255); // blue now left
        assert_eq!(view[[0, 1, 0]], 255); // red now right
    }

    #[test]
    fn test_gaussian_keeps_uniform_image_uniform() {
        // 8x8 image is smaller than the sigma=5 kernel; the size clamp
        // plus clamp-to-edge must leave a flat field untouched.
        let input = PixelBuffer::from_raw(8, 8, 4, vec![90; 8 * 8 * 4]);

        let result = apply_basic_gaussian(&encode_png(&input)).unwrap();
        let output = codec::decode(&result).unwrap();

        assert_eq!(output, input);
    }

    #[test]
    fn test_gaussian_preserves_dimensions() {
        let input = PixelBuffer::from_raw(17, 9, 3, vec![120; 17 * 9 * 3]);

        let result = apply_basic_gaussian(&encode_png(&input)).unwrap();
        let output = codec::decode(&result).unwrap();

        assert_eq!(output.width(), 17);
        assert_eq!(output.height(), 9);
    }

    #[test]
    fn test_output_is_png_data_uri() {
        let input = PixelBuffer::from_raw(2, 2, 4, vec![10; 16]);
        let result = apply_invert(&encode_png(&input)).unwrap();

        assert!(result.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_garbage_input_fails_with_decode_error() {
        let err = apply_basic_gaussian("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, FilterError::Decode(_)));

        let err = apply_invert("not an image at all").unwrap_err();
        assert!(matches!(err, FilterError::Decode(_)));
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let data: Vec<u8> = (0..36).map(|i| (i * 7) as u8).collect();
        let input = PixelBuffer::from_raw(3, 3, 4, data);

        let result =
            apply_filter(&encode_png(&input), FilterKind::Gaussian { sigma: 0.0 }).unwrap();
        let output = codec::decode(&result).unwrap();

        assert_eq!(output, input);
    }
}
