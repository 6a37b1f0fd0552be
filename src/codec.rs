//! Base64 / data-URI image codec.
//!
//! Decodes a `data:<mime>;base64,` wrapped (or bare base64) compressed
//! image into a [`PixelBuffer`] and encodes a buffer back into the same
//! string shape. PNG round-trips losslessly; JPEG is lossy.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, GrayImage, ImageOutputFormat, RgbImage, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::error::FilterError;

/// Target container format for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Png,
    Jpeg,
}

impl Container {
    /// MIME type used in the data-URI prefix.
    pub fn mime(self) -> &'static str {
        match self {
            Container::Png => "image/png",
            Container::Jpeg => "image/jpeg",
        }
    }

    fn supports_channels(self, channels: usize) -> bool {
        match self {
            Container::Png => matches!(channels, 1 | 3 | 4),
            // JPEG has no alpha plane
            Container::Jpeg => matches!(channels, 1 | 3),
        }
    }

    fn output_format(self) -> ImageOutputFormat {
        match self {
            Container::Png => ImageOutputFormat::Png,
            Container::Jpeg => ImageOutputFormat::Jpeg(90),
        }
    }
}

/// Drop a leading `data:<mime>;base64,` wrapper, if any.
fn strip_data_uri(encoded: &str) -> &str {
    match encoded.strip_prefix("data:") {
        Some(rest) => match rest.find(',') {
            Some(comma) => &rest[comma + 1..],
            None => encoded,
        },
        None => encoded,
    }
}

/// Decode a base64-encoded compressed image into a pixel buffer.
///
/// The container format is sniffed from the decompressed bytes. The
/// channel count follows the decoded color type: 8-bit grayscale stays
/// single-channel, 8-bit RGB stays 3-channel, everything else is
/// normalized to RGBA.
///
/// # Errors
/// `Decode` if the base64 payload is malformed or the bytes are not a
/// recognizable image container.
pub fn decode(encoded: &str) -> Result<PixelBuffer, FilterError> {
    let payload = strip_data_uri(encoded.trim());

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| FilterError::Decode(format!("invalid base64 payload: {e}")))?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| FilterError::Decode(format!("unrecognized image container: {e}")))?;

    let buffer = match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = gray.dimensions();
            PixelBuffer::from_raw(w as usize, h as usize, 1, gray.into_raw())
        }
        DynamicImage::ImageRgb8(rgb) => {
            let (w, h) = rgb.dimensions();
            PixelBuffer::from_raw(w as usize, h as usize, 3, rgb.into_raw())
        }
        other => {
            let rgba = other.into_rgba8();
            let (w, h) = rgba.dimensions();
            PixelBuffer::from_raw(w as usize, h as usize, 4, rgba.into_raw())
        }
    };

    log::debug!(
        "decoded {}x{} image, {} channels",
        buffer.width(),
        buffer.height(),
        buffer.channels()
    );
    Ok(buffer)
}

/// Encode a pixel buffer into a base64 data-URI string.
///
/// # Errors
/// `Encode` if a dimension is zero or the channel count is unsupported
/// by the target container.
pub fn encode(buffer: &PixelBuffer, container: Container) -> Result<String, FilterError> {
    let (width, height, channels) = (buffer.width(), buffer.height(), buffer.channels());

    if width == 0 || height == 0 {
        return Err(FilterError::Encode(format!(
            "cannot encode {width}x{height} image"
        )));
    }
    if !container.supports_channels(channels) {
        return Err(FilterError::Encode(format!(
            "{channels}-channel data is not supported by {}",
            container.mime()
        )));
    }

    let (w, h) = (width as u32, height as u32);
    let data = buffer.to_raw_vec();
    let img = match channels {
        1 => DynamicImage::ImageLuma8(
            GrayImage::from_raw(w, h, data)
                .ok_or_else(|| FilterError::Encode("buffer shape mismatch".into()))?,
        ),
        3 => DynamicImage::ImageRgb8(
            RgbImage::from_raw(w, h, data)
                .ok_or_else(|| FilterError::Encode("buffer shape mismatch".into()))?,
        ),
        _ => DynamicImage::ImageRgba8(
            RgbaImage::from_raw(w, h, data)
                .ok_or_else(|| FilterError::Encode("buffer shape mismatch".into()))?,
        ),
    };

    let mut compressed = Vec::new();
    img.write_to(&mut Cursor::new(&mut compressed), container.output_format())
        .map_err(|e| FilterError::Encode(e.to_string()))?;

    Ok(format!(
        "data:{};base64,{}",
        container.mime(),
        STANDARD.encode(compressed)
    ))
}
