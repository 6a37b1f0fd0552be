//! rasterfx
//!
//! Image-filter core for a browser front end: receives a base64-encoded
//! raster image, decodes it into a pixel buffer, applies one filter
//! (Gaussian blur, invert or flip) and re-encodes the result, all in a
//! single synchronous call with no state carried between invocations.
//!
//! ## Image Format
//! Buffers carry 8-bit samples with 1 (grayscale), 3 (RGB) or
//! 4 (RGBA) channels, row-major and channel-interleaved. The channel
//! count follows the decoded image's color type; filters process the
//! channels that exist and preserve alpha where a filter shouldn't
//! touch it.
//!
//! ## Features
//! - `parallel` (default): fan per-pixel loops out across threads with
//!   rayon on native builds.
//! - `wasm`: expose the three boundary entry points to JavaScript via
//!   wasm-bindgen. Combine with `--no-default-features` for browser
//!   targets.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod filters;
pub mod kernel;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use codec::Container;
pub use error::FilterError;
pub use filters::convolve::convolve;
pub use filters::pointwise::{flip, invert, FlipAxis};
pub use kernel::{generate_gaussian_kernel, Kernel};
pub use pipeline::{
    apply_basic_gaussian, apply_filter, apply_flip, apply_invert, FilterKind, DEFAULT_BLUR_SIGMA,
};
