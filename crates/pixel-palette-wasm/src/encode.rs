//! Stand-alone encoding bindings.
//!
//! The session's `download()` covers the normal export path. These functions
//! encode arbitrary RGBA buffers, e.g. a frame the host has already pulled
//! out of the session.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@pixel-palette/wasm';
//!
//! const frame = session.render();
//! const png = encode_png(frame.pixels(), frame.width, frame.height);
//! const jpeg = encode_jpeg(frame.pixels(), frame.width, frame.height, 90);
//! ```

use pixel_palette_core::encode;
use wasm_bindgen::prelude::*;

use crate::js_error;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match
/// `width * height * 4`, or either dimension is zero.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| js_error("PNG encoding failed", e))
}

/// Encode RGBA pixel data to JPEG bytes.
///
/// Transparent pixels are flattened onto black. `quality` is clamped to 1-100.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| js_error("JPEG encoding failed", e))
}
