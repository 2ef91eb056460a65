//! Luminance weights shared by the color matrix operations.
//!
//! Two sets of weights are in use. Grayscale uses the exact ITU-R BT.709
//! coefficients; saturate and hue-rotate use the rounded values from the W3C
//! Filter Effects matrices, so presets render the way the browser preview did.

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.0722;

/// Rounded red weight used by the saturate and hue-rotate matrices.
pub const MATRIX_R: f32 = 0.213;

/// Rounded green weight used by the saturate and hue-rotate matrices.
pub const MATRIX_G: f32 = 0.715;

/// Rounded blue weight used by the saturate and hue-rotate matrices.
pub const MATRIX_B: f32 = 0.072;

/// Calculate luminance from RGB channel values.
///
/// Works for any channel scale; output is on the same scale as the input.
#[inline]
pub fn calculate_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Luminance with the rounded matrix weights (saturate, hue-rotate).
#[inline]
pub fn matrix_luminance(r: f32, g: f32, b: f32) -> f32 {
    MATRIX_R * r + MATRIX_G * g + MATRIX_B * b
}
