//! Ordered chain of color operations applied to RGBA pixel data.

use super::ops::{ColorOp, MAX_CHANNEL};

/// An ordered list of non-identity color operations.
///
/// Identity operations are dropped on construction, so an empty pipeline
/// is an exact no-op and leaves the buffer untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPipeline {
    ops: Vec<ColorOp>,
}

impl ColorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append operations in order, skipping identities.
    pub fn extend<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = ColorOp>,
    {
        self.ops
            .extend(ops.into_iter().filter(|op| !op.is_identity()));
    }

    /// Builder-style variant of [`ColorPipeline::extend`].
    pub fn then<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = ColorOp>,
    {
        self.extend(ops);
        self
    }

    pub fn ops(&self) -> &[ColorOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply the pipeline to RGBA pixel data in place.
    ///
    /// Alpha is never touched. Trailing bytes that do not form a whole
    /// pixel are ignored.
    pub fn apply_rgba(&self, pixels: &mut [u8]) {
        if self.is_identity() {
            return;
        }

        for px in pixels.chunks_exact_mut(4) {
            let mut rgb = [px[0] as f32, px[1] as f32, px[2] as f32];
            for op in &self.ops {
                rgb = op.apply(rgb);
            }
            px[0] = to_channel(rgb[0]);
            px[1] = to_channel(rgb[1]);
            px[2] = to_channel(rgb[2]);
        }
    }
}

#[inline]
fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, MAX_CHANNEL).round() as u8
}
