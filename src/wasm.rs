//! WebAssembly exports for the filter boundary.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Each one
//! is a single synchronous call: base64 data-URI string in, base64
//! data-URI string out. Errors become thrown JS exceptions.
//!
//! Build with the `wasm` feature and without `parallel` (threads are
//! not available in the browser target).

use wasm_bindgen::prelude::*;

use crate::error::FilterError;
use crate::pipeline;

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Gaussian blur with the default sigma.
#[wasm_bindgen]
pub fn apply_basic_gaussian(base64_img: String) -> Result<String, JsValue> {
    pipeline::apply_basic_gaussian(&base64_img).map_err(to_js)
}

/// Per-channel color inversion, alpha preserved.
#[wasm_bindgen]
pub fn apply_invert(base64_img: String) -> Result<String, JsValue> {
    pipeline::apply_invert(&base64_img).map_err(to_js)
}

/// Horizontal mirror.
#[wasm_bindgen]
pub fn apply_flip(base64_img: String) -> Result<String, JsValue> {
    pipeline::apply_flip(&base64_img).map_err(to_js)
}
