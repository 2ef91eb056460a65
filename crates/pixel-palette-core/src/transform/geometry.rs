//! Exact pixel remapping for quarter-turn rotations and flips.
//!
//! The transform reproduces the canvas sequence
//! `translate(center) → rotate(θ) → scale(±1, ±1) → draw`. Because the
//! scale comes after the rotate in context order, the mirror happens in the
//! image's own frame: a source pixel is mirrored first, then rotated
//! clockwise onto the output canvas.
//!
//! Quarter turns map pixel centers onto pixel centers, so no resampling is
//! involved and every output pixel is an exact copy of one source pixel.
//!
//! # Algorithm
//!
//! Inverse mapping, as for arbitrary-angle rotation: for each output pixel
//! `(dx, dy)` find the mirrored coordinate `(fx, fy)` it came from, then undo
//! the mirror to get the source pixel `(sx, sy)`.
//!
//! ```text
//!   0°: fx = dx,         fy = dy
//!  90°: fx = dy,         fy = h - 1 - dx
//! 180°: fx = w - 1 - dx, fy = h - 1 - dy
//! 270°: fx = w - 1 - dy, fy = dx
//! ```

use super::{Rotation, TransformState};
use crate::decode::SourceImage;
use crate::render::PixelBuffer;

const CHANNELS: usize = 4;

/// Apply a transform to a source image, producing a new RGBA buffer.
///
/// The source is never modified.
pub fn apply_transform(image: &SourceImage, transform: &TransformState) -> PixelBuffer {
    if transform.is_identity() {
        return PixelBuffer::from_source(image);
    }

    let (w, h) = (image.width() as usize, image.height() as usize);
    let (out_w, out_h) = transform.output_dimensions(image.width(), image.height());
    let src = image.pixels();
    let mut output = vec![0u8; out_w as usize * out_h as usize * CHANNELS];

    for (dst_idx, px) in output.chunks_exact_mut(CHANNELS).enumerate() {
        let dx = dst_idx % out_w as usize;
        let dy = dst_idx / out_w as usize;
        let (sx, sy) = source_coords(dx, dy, w, h, transform);
        let src_idx = (sy * w + sx) * CHANNELS;
        px.copy_from_slice(&src[src_idx..src_idx + CHANNELS]);
    }

    PixelBuffer::from_parts(out_w, out_h, output)
}

/// Map an output pixel back to the source pixel it copies.
#[inline]
fn source_coords(
    dx: usize,
    dy: usize,
    w: usize,
    h: usize,
    transform: &TransformState,
) -> (usize, usize) {
    let (fx, fy) = match transform.rotation {
        Rotation::Deg0 => (dx, dy),
        Rotation::Deg90 => (dy, h - 1 - dx),
        Rotation::Deg180 => (w - 1 - dx, h - 1 - dy),
        Rotation::Deg270 => (w - 1 - dy, dx),
    };
    let sx = if transform.flip_horizontal { w - 1 - fx } else { fx };
    let sy = if transform.flip_vertical { h - 1 - fy } else { fy };
    (sx, sy)
}
