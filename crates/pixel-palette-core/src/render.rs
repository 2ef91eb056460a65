//! Compositor: renders a snapshot of the edit state against a source image.
//!
//! ## Render Order
//! 1. Geometric transform (mirror in source frame, then rotate clockwise)
//! 2. Filter preset operations, in catalog order
//! 3. Brightness, contrast, saturation adjustments
//!
//! Channels are clamped after every operation and rounded to `u8` once at
//! the end. Alpha is carried through unchanged.

use crate::adjustments::adjustment_ops;
use crate::decode::SourceImage;
use crate::filter::{ColorPipeline, FilterId};
use crate::transform::{apply_transform, TransformState};
use crate::Adjustments;

/// A rendered RGBA image (4 bytes per pixel, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Copy a source image verbatim.
    pub fn from_source(image: &SourceImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().to_vec(),
        }
    }

    /// Assemble a buffer from raw parts.
    ///
    /// Callers must pass `width * height * 4` bytes; the encoders re-check
    /// the length before writing anything out.
    pub fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(Some(pixels.len()), crate::rgba_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Everything one render pass reads, taken at a single point in time.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub source: &'a SourceImage,
    pub filter: FilterId,
    pub adjustments: Adjustments,
    pub transform: TransformState,
}

/// Build the full color pipeline for a filter and adjustment set.
pub fn build_pipeline(filter: FilterId, adjustments: &Adjustments) -> ColorPipeline {
    ColorPipeline::new()
        .then(filter.ops().iter().copied())
        .then(adjustment_ops(adjustments))
}

/// Render a snapshot into a new buffer.
///
/// Pure: the same snapshot always yields a bit-identical buffer, and the
/// source image is never modified.
pub fn render(snapshot: &RenderSnapshot<'_>) -> PixelBuffer {
    let mut buffer = apply_transform(snapshot.source, &snapshot.transform);

    let pipeline = build_pipeline(snapshot.filter, &snapshot.adjustments);
    pipeline.apply_rgba(&mut buffer.pixels);

    tracing::debug!(
        filter = snapshot.filter.name(),
        rotation = snapshot.transform.rotation.degrees(),
        flip_h = snapshot.transform.flip_horizontal,
        flip_v = snapshot.transform.flip_vertical,
        ops = pipeline.ops().len(),
        width = buffer.width,
        height = buffer.height,
        "rendered"
    );

    buffer
}
