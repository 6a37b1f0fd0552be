//! Error taxonomy for the filter core.
//!
//! Every error surfaces to the boundary call unchanged; no stage retries
//! and no partially filtered image is ever returned.

use thiserror::Error;

/// Errors produced by the decode → transform → encode pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("image encode failed: {0}")]
    Encode(String),

    #[error("invalid kernel parameters: size={size}, sigma={sigma}")]
    InvalidKernelParams { size: usize, sigma: f32 },

    #[error("kernel side {kernel} exceeds image extent limit {limit}")]
    KernelSize { kernel: usize, limit: usize },
}
