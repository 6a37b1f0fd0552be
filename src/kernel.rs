//! Convolution kernel type and Gaussian kernel generation.

use ndarray::Array2;

use crate::error::FilterError;

/// Square convolution kernel with an odd side length.
///
/// Weights are stored row-major as an `Array2<f32>`. For averaging
/// kernels (such as the Gaussian) the weights sum to 1 within floating
/// tolerance, so the filter is brightness-neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f32>,
}

impl Kernel {
    /// Wrap a square, odd-sided weight matrix.
    ///
    /// # Panics
    /// If the matrix is not square or its side length is even.
    pub fn from_weights(weights: Array2<f32>) -> Self {
        let (rows, cols) = weights.dim();
        assert_eq!(rows, cols, "kernel must be square");
        assert!(rows % 2 == 1, "kernel side must be odd");
        Self { weights }
    }

    /// Side length K
    pub fn size(&self) -> usize {
        self.weights.dim().0
    }

    /// Offset of the anchor pixel from the kernel edge (K / 2).
    pub fn half(&self) -> usize {
        self.size() / 2
    }

    /// Weight at kernel row `ky`, column `kx`.
    #[inline]
    pub fn weight(&self, ky: usize, kx: usize) -> f32 {
        self.weights[[ky, kx]]
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f32 {
        self.weights.sum()
    }
}

/// Generate a normalized 2D Gaussian kernel.
///
/// Each weight is `exp(-(dx² + dy²) / (2σ²))` for the centered offset
/// `(dx, dy)`, then all weights are divided by their sum. The division
/// compensates floating-point drift so the kernel sums to 1 exactly
/// enough to leave overall brightness untouched.
///
/// `size == 1` yields the single weight 1.0 (identity kernel).
///
/// # Errors
/// `InvalidKernelParams` if `size` is even or zero, or `sigma <= 0`.
pub fn generate_gaussian_kernel(size: usize, sigma: f32) -> Result<Kernel, FilterError> {
    if size == 0 || size % 2 == 0 || sigma <= 0.0 {
        return Err(FilterError::InvalidKernelParams { size, sigma });
    }

    let half = (size / 2) as isize;
    let norm = 2.0 * sigma * sigma;

    let mut weights = Array2::<f32>::zeros((size, size));
    let mut sum = 0.0f32;
    for ky in 0..size {
        for kx in 0..size {
            let dy = (ky as isize - half) as f32;
            let dx = (kx as isize - half) as f32;
            let w = (-(dx * dx + dy * dy) / norm).exp();
            weights[[ky, kx]] = w;
            sum += w;
        }
    }

    weights.mapv_inplace(|w| w / sum);

    Ok(Kernel { weights })
}

/// Derive an odd kernel side covering ±3σ of the distribution
/// (99.7% of its mass): `ceil(6σ) | 1`.
pub fn gaussian_size_for_sigma(sigma: f32) -> usize {
    ((sigma * 6.0).ceil() as usize) | 1
}
