//! Tonal adjustment stage of the render pipeline.
//!
//! Maps the sidebar [`Adjustments`] onto elementary color operations that
//! run after the filter preset.
//!
//! ## Adjustment Order
//! 1. Brightness (`brightness / 100`, linear scale)
//! 2. Contrast (`contrast / 100`, pivoted at mid-gray 128)
//! 3. Saturation (`saturation / 100`)
//!
//! Highlights and shadows are stored and range-checked but have no pixel
//! effect yet. No tone-curve shape has been settled for them, so they are
//! deliberately not mapped to an operation here.

use crate::filter::ColorOp;
use crate::Adjustments;

/// Convert adjustments into their ordered color operations.
pub fn adjustment_ops(adjustments: &Adjustments) -> [ColorOp; 3] {
    [
        ColorOp::Brightness(adjustments.brightness() / 100.0),
        ColorOp::Contrast(adjustments.contrast() / 100.0),
        ColorOp::Saturate(adjustments.saturation() / 100.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ColorPipeline;
    use crate::AdjustmentKind;

    /// Run the adjustment stage alone over RGBA pixel data.
    fn apply_adjustments(pixels: &mut [u8], adjustments: &Adjustments) {
        ColorPipeline::new()
            .then(adjustment_ops(adjustments))
            .apply_rgba(pixels);
    }

    /// Helper to create an opaque pixel from RGB values
    fn pixel(r: u8, g: u8, b: u8) -> Vec<u8> {
        vec![r, g, b, 255]
    }

    /// Helper to apply adjustments and return resulting pixel
    fn apply(pixels: &[u8], adj: &Adjustments) -> Vec<u8> {
        let mut result = pixels.to_vec();
        apply_adjustments(&mut result, adj);
        result
    }

    fn with(kind: AdjustmentKind, value: f32) -> Adjustments {
        Adjustments::new().with(kind, value)
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_no_adjustments() {
        let pixels = pixel(128, 64, 192);
        let result = apply(&pixels, &Adjustments::default());
        assert_eq!(result, pixels, "Neutral adjustments should not change pixels");
    }

    #[test]
    fn test_neutral_ops_are_identities() {
        for op in adjustment_ops(&Adjustments::default()) {
            assert!(op.is_identity(), "{:?} should be an identity", op);
        }
    }

    #[test]
    fn test_highlights_and_shadows_have_no_pixel_effect() {
        let pixels = pixel(30, 128, 220);
        let adj = Adjustments::new()
            .with(AdjustmentKind::Highlights, 80.0)
            .with(AdjustmentKind::Shadows, -60.0);
        assert_eq!(apply(&pixels, &adj), pixels);
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_increase() {
        let result = apply(&pixel(100, 50, 10), &with(AdjustmentKind::Brightness, 120.0));
        assert_eq!(result, pixel(120, 60, 12));
    }

    #[test]
    fn test_brightness_zero_is_black() {
        let result = apply(&pixel(100, 200, 255), &with(AdjustmentKind::Brightness, 0.0));
        assert_eq!(result, pixel(0, 0, 0));
    }

    #[test]
    fn test_brightness_clips_at_white() {
        let result = apply(&pixel(200, 200, 200), &with(AdjustmentKind::Brightness, 200.0));
        assert_eq!(result, pixel(255, 255, 255));
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_positive() {
        let result = apply(&pixel(64, 128, 192), &with(AdjustmentKind::Contrast, 200.0));
        assert_eq!(result, pixel(0, 128, 255));
    }

    #[test]
    fn test_contrast_negative() {
        let result = apply(&pixel(0, 128, 255), &with(AdjustmentKind::Contrast, 50.0));
        assert_eq!(result, pixel(64, 128, 192));
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_increase() {
        let result = apply(&pixel(200, 128, 100), &with(AdjustmentKind::Saturation, 150.0));
        let orig_diff = 200 - 100;
        let new_diff = result[0] as i32 - result[2] as i32;
        assert!(new_diff > orig_diff, "Color difference should increase");
    }

    #[test]
    fn test_saturation_zero_is_grayscale() {
        let result = apply(&pixel(200, 128, 100), &with(AdjustmentKind::Saturation, 0.0));
        assert_eq!(result[0], result[1]);
        assert_eq!(result[1], result[2]);
    }

    // ===== Ordering =====

    #[test]
    fn test_brightness_runs_before_contrast() {
        // brightness 50% then contrast 200%: 100 -> 50 -> (50 - 128) * 2 + 128 = -28 -> 0
        // the reverse order would give 72 -> 36
        let adj = Adjustments::new()
            .with(AdjustmentKind::Brightness, 50.0)
            .with(AdjustmentKind::Contrast, 200.0);
        let result = apply(&pixel(100, 100, 100), &adj);
        assert_eq!(result, pixel(0, 0, 0));
    }

    #[test]
    fn test_alpha_preserved() {
        let mut pixels = vec![10, 20, 30, 42];
        apply_adjustments(&mut pixels, &with(AdjustmentKind::Brightness, 200.0));
        assert_eq!(pixels[3], 42);
    }
}
