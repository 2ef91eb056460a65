//! Pixel Palette WASM - WebAssembly bindings for the Pixel Palette editor
//!
//! This crate exposes the pixel-palette-core edit session to JavaScript.
//!
//! # Module Structure
//!
//! - `session` - The `EditorSession` object the UI drives
//! - `catalog` - Filter presets and adjustment ranges for building the sidebar
//! - `encode` - Stand-alone PNG/JPEG encoding of RGBA buffers
//! - `types` - WASM-compatible wrapper types for pixel buffers and downloads
//!
//! # Usage
//!
//! ```typescript
//! import init, { EditorSession } from '@pixel-palette/wasm';
//!
//! await init();
//!
//! const session = new EditorSession();
//! session.load_image(new Uint8Array(await file.arrayBuffer()), file.type);
//! session.select_filter('bw');
//! session.set_adjustment('brightness', 120);
//! session.rotate_right();
//!
//! const frame = session.render();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(frame.pixels()), frame.width), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod catalog;
mod encode;
mod session;
mod types;

pub use catalog::{adjustment_ranges, filter_catalog, filter_names};
pub use encode::{encode_jpeg, encode_png};
pub use session::EditorSession;
pub use types::{JsExportedImage, JsPixelBuffer};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert an error into a JS exception value, logging it to the console.
pub(crate) fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::warn_1(&JsValue::from_str(&format!("{context}: {message}")));
    JsValue::from_str(&message)
}
