//! Filter implementations.
//!
//! All filters take a [`crate::PixelBuffer`] and produce a fresh output
//! buffer of identical dimensions; inputs are never mutated. Every
//! output sample depends only on the input buffer, so the per-pixel
//! loops may run in parallel per row under the `parallel` feature with
//! no synchronization beyond the final join.
//!
//! - **Neighborhood**: [`convolve::convolve`], square-kernel convolution
//!   with clamp-to-edge border handling.
//! - **Pointwise/geometric**: [`pointwise::invert`] and
//!   [`pointwise::flip`], no neighbor access; per-channel math and
//!   position permutation only.

pub mod convolve;
pub mod pointwise;
