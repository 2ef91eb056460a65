//! Elementary per-pixel color operations.
//!
//! Channels are processed as `f32` on the 0-255 scale and clamped back into
//! that range after every operation, so overflow from one stage never leaks
//! into the next.
//!
//! The formulas follow the W3C Filter Effects definitions of the CSS
//! `grayscale()`, `sepia()`, `saturate()`, `hue-rotate()`, `invert()`,
//! `brightness()` and `contrast()` functions, except that contrast pivots on
//! mid-gray 128.

use serde::{Deserialize, Serialize};

use crate::luminance::{calculate_luminance, matrix_luminance, MATRIX_B, MATRIX_G, MATRIX_R};

/// One pixel's RGB channels on the 0-255 scale.
pub type Rgb = [f32; 3];

/// Upper bound of an 8-bit channel.
pub const MAX_CHANNEL: f32 = 255.0;

/// Pivot for contrast scaling.
pub const MID_GRAY: f32 = 128.0;

type Matrix = [[f32; 3]; 3];

/// A single deterministic RGB transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum ColorOp {
    /// Blend toward luminance gray (0.0 to 1.0).
    Grayscale(f32),
    /// Blend toward the channel negative (0.0 to 1.0).
    Invert(f32),
    /// Blend toward the sepia matrix (0.0 to 1.0).
    Sepia(f32),
    /// Saturation factor (1.0 = unchanged, 0.0 = gray).
    Saturate(f32),
    /// Hue rotation in degrees.
    HueRotate(f32),
    /// Linear brightness multiplier (1.0 = unchanged).
    Brightness(f32),
    /// Contrast factor around mid-gray (1.0 = unchanged).
    Contrast(f32),
}

impl ColorOp {
    /// Check whether this operation leaves every pixel unchanged.
    ///
    /// Identity operations are skipped by the pipeline so a neutral render
    /// reproduces its input bit for bit.
    pub fn is_identity(self) -> bool {
        match self {
            ColorOp::Grayscale(amount) | ColorOp::Invert(amount) | ColorOp::Sepia(amount) => {
                amount <= 0.0
            }
            ColorOp::Saturate(factor) | ColorOp::Brightness(factor) | ColorOp::Contrast(factor) => {
                factor == 1.0
            }
            ColorOp::HueRotate(degrees) => degrees.rem_euclid(360.0) == 0.0,
        }
    }

    /// Apply this operation to one pixel, clamping the result to [0, 255].
    pub fn apply(self, rgb: Rgb) -> Rgb {
        let [r, g, b] = rgb;
        let out = match self {
            ColorOp::Grayscale(amount) => {
                let a = amount.clamp(0.0, 1.0);
                let lum = calculate_luminance(r, g, b);
                rgb.map(|c| lum * a + c * (1.0 - a))
            }
            ColorOp::Invert(amount) => {
                let a = amount.clamp(0.0, 1.0);
                rgb.map(|c| c * (1.0 - a) + (MAX_CHANNEL - c) * a)
            }
            ColorOp::Sepia(amount) => multiply(&sepia_matrix(amount.clamp(0.0, 1.0)), rgb),
            ColorOp::Saturate(factor) => {
                let s = factor.max(0.0);
                let lum = matrix_luminance(r, g, b);
                rgb.map(|c| lum * (1.0 - s) + c * s)
            }
            ColorOp::HueRotate(degrees) => multiply(&hue_rotate_matrix(degrees), rgb),
            ColorOp::Brightness(factor) => rgb.map(|c| c * factor),
            ColorOp::Contrast(factor) => rgb.map(|c| (c - MID_GRAY) * factor + MID_GRAY),
        };
        out.map(|c| c.clamp(0.0, MAX_CHANNEL))
    }
}

#[inline]
fn multiply(m: &Matrix, [r, g, b]: Rgb) -> Rgb {
    [
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    ]
}

fn sepia_matrix(amount: f32) -> Matrix {
    let k = 1.0 - amount;
    [
        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
    ]
}

fn hue_rotate_matrix(degrees: f32) -> Matrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            MATRIX_R + cos * (1.0 - MATRIX_R) - sin * MATRIX_R,
            MATRIX_G - cos * MATRIX_G - sin * MATRIX_G,
            MATRIX_B - cos * MATRIX_B + sin * (1.0 - MATRIX_B),
        ],
        [
            MATRIX_R - cos * MATRIX_R + sin * 0.143,
            MATRIX_G + cos * (1.0 - MATRIX_G) + sin * 0.140,
            MATRIX_B - cos * MATRIX_B - sin * 0.283,
        ],
        [
            MATRIX_R - cos * MATRIX_R - sin * (1.0 - MATRIX_R),
            MATRIX_G - cos * MATRIX_G + sin * MATRIX_G,
            MATRIX_B + cos * (1.0 - MATRIX_B) + sin * MATRIX_B,
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        [r as f32, g as f32, b as f32]
    }

    fn close(a: Rgb, b: Rgb, tolerance: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_detection() {
        assert!(ColorOp::Grayscale(0.0).is_identity());
        assert!(ColorOp::Invert(0.0).is_identity());
        assert!(ColorOp::Sepia(0.0).is_identity());
        assert!(ColorOp::Saturate(1.0).is_identity());
        assert!(ColorOp::Brightness(1.0).is_identity());
        assert!(ColorOp::Contrast(1.0).is_identity());
        assert!(ColorOp::HueRotate(0.0).is_identity());
        assert!(ColorOp::HueRotate(360.0).is_identity());
        assert!(ColorOp::HueRotate(-720.0).is_identity());

        assert!(!ColorOp::Grayscale(1.0).is_identity());
        assert!(!ColorOp::Saturate(1.5).is_identity());
        assert!(!ColorOp::HueRotate(330.0).is_identity());
    }

    // ===== Grayscale Tests =====

    #[test]
    fn test_grayscale_full_equalizes_channels() {
        let out = ColorOp::Grayscale(1.0).apply(rgb(200, 100, 50));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
        let expected = calculate_luminance(200.0, 100.0, 50.0);
        assert!((out[0] - expected).abs() < 1e-3);
    }

    #[test]
    fn test_grayscale_partial_blends() {
        let input = rgb(200, 100, 50);
        let out = ColorOp::Grayscale(0.5).apply(input);
        let lum = calculate_luminance(200.0, 100.0, 50.0);
        assert!((out[0] - (200.0 + lum) / 2.0).abs() < 1e-3);
        assert!((out[2] - (50.0 + lum) / 2.0).abs() < 1e-3);
    }

    // ===== Invert Tests =====

    #[test]
    fn test_invert_full() {
        let out = ColorOp::Invert(1.0).apply(rgb(0, 100, 255));
        assert_eq!(out, [255.0, 155.0, 0.0]);
    }

    #[test]
    fn test_invert_half_is_mid_gray() {
        let out = ColorOp::Invert(0.5).apply(rgb(0, 100, 255));
        assert!(close(out, [127.5, 127.5, 127.5], 1e-3));
    }

    // ===== Sepia Tests =====

    #[test]
    fn test_sepia_full_warms_gray() {
        let out = ColorOp::Sepia(1.0).apply(rgb(100, 100, 100));
        assert!(out[0] > out[1], "Red should exceed green");
        assert!(out[1] > out[2], "Green should exceed blue");
    }

    #[test]
    fn test_sepia_matches_reference_values() {
        let out = ColorOp::Sepia(1.0).apply(rgb(100, 100, 100));
        assert!(close(out, [135.1, 120.3, 93.7], 0.01), "got {:?}", out);

        // Half amount lands halfway between the input and full sepia
        let out = ColorOp::Sepia(0.5).apply(rgb(100, 100, 100));
        assert!(close(out, [117.55, 110.15, 96.85], 0.01), "got {:?}", out);
    }

    #[test]
    fn test_sepia_clamps_white() {
        let out = ColorOp::Sepia(1.0).apply(rgb(255, 255, 255));
        assert_eq!(out[0], 255.0);
        assert!(out.iter().all(|&c| (0.0..=255.0).contains(&c)));
    }

    // ===== Saturate Tests =====

    #[test]
    fn test_saturate_zero_is_gray() {
        let out = ColorOp::Saturate(0.0).apply(rgb(200, 100, 50));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn test_saturate_boost_spreads_channels() {
        let out = ColorOp::Saturate(1.5).apply(rgb(160, 128, 100));
        assert!(out[0] - out[2] > 60.0);
    }

    #[test]
    fn test_saturate_matches_reference_values() {
        // lum = 0.213 * 200 + 0.715 * 80 + 0.072 * 30 = 101.96
        let out = ColorOp::Saturate(0.5).apply(rgb(200, 80, 30));
        assert!(close(out, [150.98, 90.98, 65.98], 0.01), "got {:?}", out);
    }

    #[test]
    fn test_saturate_leaves_gray_alone() {
        let out = ColorOp::Saturate(2.0).apply(rgb(90, 90, 90));
        assert!(close(out, [90.0, 90.0, 90.0], 1e-3));
    }

    // ===== Hue Rotate Tests =====

    #[test]
    fn test_hue_rotate_matches_reference_values() {
        let out = ColorOp::HueRotate(330.0).apply(rgb(200, 80, 30));
        assert!(close(out, [222.845, 67.287, 88.661], 0.01), "got {:?}", out);

        let out = ColorOp::HueRotate(90.0).apply(rgb(200, 80, 30));
        assert!(close(out, [30.0, 133.27, 3.92], 0.01), "got {:?}", out);
    }

    #[test]
    fn test_hue_rotate_leaves_gray_alone() {
        let out = ColorOp::HueRotate(330.0).apply(rgb(128, 128, 128));
        assert!(close(out, [128.0, 128.0, 128.0], 0.01));
    }

    #[test]
    fn test_hue_rotate_full_turn_is_noop() {
        let input = rgb(200, 80, 30);
        let out = ColorOp::HueRotate(360.0).apply(input);
        assert!(close(out, input, 0.01));
    }

    #[test]
    fn test_hue_rotate_moves_red_toward_green() {
        let out = ColorOp::HueRotate(120.0).apply(rgb(255, 0, 0));
        assert!(out[1] > out[0], "Red rotated by 120 degrees should lean green");
    }

    // ===== Brightness / Contrast Tests =====

    #[test]
    fn test_brightness_scales() {
        let out = ColorOp::Brightness(1.5).apply(rgb(100, 40, 200));
        assert_eq!(out, [150.0, 60.0, 255.0]);
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        let out = ColorOp::Contrast(2.0).apply(rgb(128, 100, 160));
        assert_eq!(out, [128.0, 72.0, 192.0]);
    }

    #[test]
    fn test_contrast_zero_collapses_to_mid_gray() {
        let out = ColorOp::Contrast(0.0).apply(rgb(0, 77, 255));
        assert_eq!(out, [128.0, 128.0, 128.0]);
    }

    // ===== Serialization =====

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(ColorOp::HueRotate(330.0)).unwrap();
        assert_eq!(json["op"], "hueRotate");
        assert_eq!(json["value"], 330.0);
    }
}
