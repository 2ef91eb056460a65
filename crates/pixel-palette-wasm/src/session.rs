//! Edit session bindings.
//!
//! `EditorSession` wraps the core session one-to-one. Every UI control maps
//! to a method here, or alternatively to a `{ type: ... }` command object
//! passed to `dispatch`.
//!
//! # Example
//!
//! ```typescript
//! const session = EditorSession.with_config({ export: { format: 'jpeg', quality: 85 } });
//! session.load_image(bytes, file.type);
//! session.dispatch({ type: 'selectFilter', filter: 'amber' });
//! session.dispatch({ type: 'rotateLeft' });
//!
//! const download = session.download();
//! const url = URL.createObjectURL(new Blob([download.bytes()], { type: download.mime_type }));
//! ```

use pixel_palette_core::{Command, EditSession, EditState, FilterId, SessionConfig};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::types::{JsExportedImage, JsPixelBuffer};

/// The editor's session: source image, edit state and latest render.
#[wasm_bindgen]
pub struct EditorSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl EditorSession {
    /// Create a session with default limits and PNG export.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(),
        }
    }

    /// Create a session from a partial configuration object.
    ///
    /// Missing fields take their defaults, so `{}` is valid.
    pub fn with_config(config: JsValue) -> Result<EditorSession, JsValue> {
        let config: SessionConfig =
            serde_wasm_bindgen::from_value(config).map_err(|e| js_error("Invalid config", e))?;
        Ok(Self {
            inner: EditSession::with_config(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Incremented by every edit; useful for skipping redundant redraws.
    #[wasm_bindgen(getter)]
    pub fn revision(&self) -> u64 {
        self.inner.revision()
    }

    /// Name of the selected filter (`"none"` when unfiltered).
    #[wasm_bindgen(getter)]
    pub fn filter(&self) -> String {
        self.inner.state().filter.name().to_string()
    }

    /// Current clockwise rotation in degrees (0, 90, 180 or 270).
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> u16 {
        self.inner.state().transform.rotation.degrees()
    }

    /// Decode an uploaded file and reset all edits.
    ///
    /// On failure the previous image and edits are kept.
    pub fn load_image(&mut self, bytes: &[u8], mime_type: &str) -> Result<(), JsValue> {
        self.inner
            .load_image(bytes, mime_type)
            .map_err(|e| js_error("Upload rejected", e))
    }

    /// Select a filter by name. Unknown names select no filter.
    ///
    /// Returns the name actually selected.
    pub fn select_filter(&mut self, name: &str) -> String {
        let filter = FilterId::from_name(name);
        self.inner.select_filter(filter);
        filter.name().to_string()
    }

    /// Set an adjustment slider. Returns the value stored after clamping.
    pub fn set_adjustment(&mut self, name: &str, value: f32) -> Result<f32, JsValue> {
        self.inner
            .set_adjustment_by_name(name, value)
            .map_err(|e| js_error("Adjustment ignored", e))
    }

    /// Current value of an adjustment slider.
    pub fn adjustment(&self, name: &str) -> Option<f32> {
        pixel_palette_core::AdjustmentKind::from_name(name)
            .map(|kind| self.inner.state().adjustments.get(kind))
    }

    pub fn rotate_left(&mut self) {
        self.inner.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.inner.rotate_right();
    }

    pub fn flip_horizontal(&mut self) {
        self.inner.flip_horizontal();
    }

    pub fn flip_vertical(&mut self) {
        self.inner.flip_vertical();
    }

    /// Apply a command object such as `{ type: 'rotateRight' }`.
    ///
    /// Returns the encoded file for `{ type: 'download' }`, otherwise `undefined`.
    pub fn dispatch(&mut self, command: JsValue) -> Result<Option<JsExportedImage>, JsValue> {
        let command: Command =
            serde_wasm_bindgen::from_value(command).map_err(|e| js_error("Invalid command", e))?;
        self.inner
            .dispatch(command)
            .map(|exported| exported.map(JsExportedImage::from))
            .map_err(|e| js_error("Command failed", e))
    }

    /// Render the current edits (cached until the next edit).
    pub fn render(&mut self) -> Result<JsPixelBuffer, JsValue> {
        self.inner
            .render()
            .map(|buffer| JsPixelBuffer::from(buffer.clone()))
            .map_err(|e| js_error("Render failed", e))
    }

    /// Encode the latest render for download.
    pub fn download(&mut self) -> Result<JsExportedImage, JsValue> {
        self.inner
            .export()
            .map(JsExportedImage::from)
            .map_err(|e| js_error("Download failed", e))
    }

    /// Current edit state as `{ filter, adjustments, transform }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.state()).map_err(|e| js_error("State export", e))
    }

    /// Restore a state previously returned by `state()`.
    pub fn restore_state(&mut self, state: JsValue) -> Result<(), JsValue> {
        let state: EditState =
            serde_wasm_bindgen::from_value(state).map_err(|e| js_error("Invalid state", e))?;
        self.inner.restore_state(state);
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Access the wrapped core session.
    pub fn inner(&self) -> &EditSession {
        &self.inner
    }
}
