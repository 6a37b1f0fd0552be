//! Square-kernel 2D convolution with clamp-to-edge border handling.

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::kernel::Kernel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Convolve a pixel buffer with a square kernel.
///
/// Per output sample: f32 weighted sum over the kernel's offsets,
/// rounded to the nearest integer and clamped into 0-255. Neighbor
/// lookups outside the image reuse the nearest in-bounds pixel
/// (clamp-to-edge), which keeps normalized kernels brightness-neutral
/// at the borders where a zero-fill policy would darken the edges.
///
/// The alpha channel, if present, is convolved exactly like the color
/// channels; a blurred edge gets a blurred alpha ramp.
///
/// # Arguments
/// * `input` - Source buffer (width, height >= 1)
/// * `kernel` - Square kernel with odd side length
///
/// # Returns
/// A new buffer with identical width, height and channel count.
///
/// # Errors
/// `KernelSize` if the kernel side exceeds the smaller image dimension
/// plus one. Callers wanting a softer policy must clamp the kernel size
/// before calling (see [`crate::pipeline`]).
pub fn convolve(input: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer, FilterError> {
    let (width, height, channels) = (input.width(), input.height(), input.channels());

    let limit = width.min(height) + 1;
    if kernel.size() > limit {
        return Err(FilterError::KernelSize {
            kernel: kernel.size(),
            limit,
        });
    }

    let row_len = width * channels;
    let mut output = vec![0u8; height * row_len];

    #[cfg(feature = "parallel")]
    output
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| convolve_row(input, kernel, y, row));

    #[cfg(not(feature = "parallel"))]
    for (y, row) in output.chunks_mut(row_len).enumerate() {
        convolve_row(input, kernel, y, row);
    }

    Ok(PixelBuffer::from_raw(width, height, channels, output))
}

/// Fill one output row. Reads only from `input`, writes only to `row`.
fn convolve_row(input: &PixelBuffer, kernel: &Kernel, y: usize, row: &mut [u8]) {
    let (width, channels) = (input.width(), input.channels());
    let size = kernel.size();
    let half = kernel.half() as isize;

    for x in 0..width {
        for c in 0..channels {
            let mut sum = 0.0f32;
            for ky in 0..size {
                let sy = y as isize + ky as isize - half;
                for kx in 0..size {
                    let sx = x as isize + kx as isize - half;
                    sum += kernel.weight(ky, kx) * input.sample_clamped(sx, sy, c) as f32;
                }
            }
            row[x * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
}
