//! Pixel Palette Core - Image render pipeline
//!
//! This crate provides the render pipeline behind the Pixel Palette editor:
//! a catalog of named color filters, five tonal adjustments, quarter-turn
//! rotation with flips, and lossless export of the rendered result.
//!
//! The browser front end talks to [`session::EditSession`], which owns the
//! source image and the edit state and renders through [`render::render`].

pub mod adjustments;
pub mod config;
pub mod decode;
pub mod encode;
pub mod filter;
pub mod luminance;
pub mod render;
pub mod session;
pub mod transform;

pub use config::{ExportFormat, ExportOptions, IngestLimits, SessionConfig};
pub use decode::{decode_upload, validate_upload, DecodeError, MimeType, SourceImage};
pub use encode::{export, EncodeError, ExportedImage};
pub use filter::{resolve, ColorOp, FilterGroup, FilterId};
pub use render::{render, PixelBuffer, RenderSnapshot};
pub use session::{Command, EditSession, EditState, RenderJob, SessionError};
pub use transform::{Rotation, TransformState};

use serde::{Deserialize, Serialize};

/// Byte length of a `width` x `height` RGBA buffer, or `None` if it does not
/// fit in `usize`.
pub(crate) fn rgba_len(width: u32, height: u32) -> Option<usize> {
    let len = u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(4)?;
    usize::try_from(len).ok()
}

/// The five tonal adjustments exposed by the editor sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdjustmentKind {
    /// Brightness percentage (0 to 200, 100 = neutral)
    Brightness,
    /// Contrast percentage (0 to 200, 100 = neutral)
    Contrast,
    /// Saturation percentage (0 to 200, 100 = neutral)
    Saturation,
    /// Highlights (-100 to 100, 0 = neutral)
    Highlights,
    /// Shadows (-100 to 100, 0 = neutral)
    Shadows,
}

impl AdjustmentKind {
    /// All adjustments in sidebar order.
    pub const ALL: [AdjustmentKind; 5] = [
        AdjustmentKind::Brightness,
        AdjustmentKind::Contrast,
        AdjustmentKind::Saturation,
        AdjustmentKind::Highlights,
        AdjustmentKind::Shadows,
    ];

    /// Look up an adjustment by its control name (e.g. `"brightness"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "brightness" => Some(AdjustmentKind::Brightness),
            "contrast" => Some(AdjustmentKind::Contrast),
            "saturation" => Some(AdjustmentKind::Saturation),
            "highlights" => Some(AdjustmentKind::Highlights),
            "shadows" => Some(AdjustmentKind::Shadows),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AdjustmentKind::Brightness => "brightness",
            AdjustmentKind::Contrast => "contrast",
            AdjustmentKind::Saturation => "saturation",
            AdjustmentKind::Highlights => "highlights",
            AdjustmentKind::Shadows => "shadows",
        }
    }

    /// Slider caption.
    pub fn label(self) -> &'static str {
        match self {
            AdjustmentKind::Brightness => "Brightness",
            AdjustmentKind::Contrast => "Contrast",
            AdjustmentKind::Saturation => "Saturation",
            AdjustmentKind::Highlights => "Highlights",
            AdjustmentKind::Shadows => "Shadows",
        }
    }

    /// Inclusive `(min, max)` range accepted for this adjustment.
    pub fn range(self) -> (f32, f32) {
        match self {
            AdjustmentKind::Brightness | AdjustmentKind::Contrast | AdjustmentKind::Saturation => {
                (0.0, 200.0)
            }
            AdjustmentKind::Highlights | AdjustmentKind::Shadows => (-100.0, 100.0),
        }
    }

    /// Value at which this adjustment has no effect.
    pub fn neutral(self) -> f32 {
        match self {
            AdjustmentKind::Brightness | AdjustmentKind::Contrast | AdjustmentKind::Saturation => {
                100.0
            }
            AdjustmentKind::Highlights | AdjustmentKind::Shadows => 0.0,
        }
    }

    /// Clamp a value into this adjustment's range.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// Tonal adjustment values.
///
/// Every field is kept inside its declared range: writes go through
/// [`Adjustments::set`], and deserialized values are clamped on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAdjustments")]
pub struct Adjustments {
    brightness: f32,
    contrast: f32,
    saturation: f32,
    highlights: f32,
    shadows: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            highlights: 0.0,
            shadows: 0.0,
        }
    }
}

impl Adjustments {
    /// Create a new Adjustments with neutral values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their neutral defaults
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn highlights(&self) -> f32 {
        self.highlights
    }

    pub fn shadows(&self) -> f32 {
        self.shadows
    }

    /// Read a single adjustment.
    pub fn get(&self, kind: AdjustmentKind) -> f32 {
        match kind {
            AdjustmentKind::Brightness => self.brightness,
            AdjustmentKind::Contrast => self.contrast,
            AdjustmentKind::Saturation => self.saturation,
            AdjustmentKind::Highlights => self.highlights,
            AdjustmentKind::Shadows => self.shadows,
        }
    }

    /// Write a single adjustment, clamped to its range.
    ///
    /// NaN is rejected and leaves the stored value untouched. Returns the
    /// value actually stored.
    pub fn set(&mut self, kind: AdjustmentKind, value: f32) -> f32 {
        if value.is_nan() {
            return self.get(kind);
        }
        let value = kind.clamp(value);
        let slot = match kind {
            AdjustmentKind::Brightness => &mut self.brightness,
            AdjustmentKind::Contrast => &mut self.contrast,
            AdjustmentKind::Saturation => &mut self.saturation,
            AdjustmentKind::Highlights => &mut self.highlights,
            AdjustmentKind::Shadows => &mut self.shadows,
        };
        *slot = value;
        value
    }

    /// Builder-style variant of [`Adjustments::set`].
    pub fn with(mut self, kind: AdjustmentKind, value: f32) -> Self {
        self.set(kind, value);
        self
    }
}

/// Unchecked wire form of [`Adjustments`]; missing fields take neutral values.
#[derive(Deserialize)]
#[serde(default)]
struct RawAdjustments {
    brightness: f32,
    contrast: f32,
    saturation: f32,
    highlights: f32,
    shadows: f32,
}

impl Default for RawAdjustments {
    fn default() -> Self {
        let neutral = Adjustments::default();
        Self {
            brightness: neutral.brightness,
            contrast: neutral.contrast,
            saturation: neutral.saturation,
            highlights: neutral.highlights,
            shadows: neutral.shadows,
        }
    }
}

impl From<RawAdjustments> for Adjustments {
    fn from(raw: RawAdjustments) -> Self {
        Adjustments::default()
            .with(AdjustmentKind::Brightness, raw.brightness)
            .with(AdjustmentKind::Contrast, raw.contrast)
            .with(AdjustmentKind::Saturation, raw.saturation)
            .with(AdjustmentKind::Highlights, raw.highlights)
            .with(AdjustmentKind::Shadows, raw.shadows)
    }
}
