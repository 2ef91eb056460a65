//! Filter catalog: named presets built from elementary color operations.
//!
//! Each preset is a fixed, ordered list of [`ColorOp`]s applied in catalog
//! order. The table is static; resolving the same [`FilterId`] always yields
//! the same sequence.
//!
//! # Presets
//!
//! | Filter   | Sequence                                         |
//! |----------|--------------------------------------------------|
//! | none     | (identity)                                       |
//! | vibrant  | saturate 1.5, contrast 1.1                       |
//! | negative | invert 1.0                                       |
//! | natural  | brightness 1.05, saturate 1.05                   |
//! | luminous | brightness 1.15, contrast 1.05                   |
//! | dramatic | contrast 1.25, saturate 1.1, brightness 0.95     |
//! | quiet    | saturate 0.9, brightness 0.95                    |
//! | cosy     | sepia 0.25, saturate 1.15, brightness 1.0        |
//! | ethereal | brightness 1.1, contrast 0.9, saturate 0.9       |
//! | bw       | grayscale 1.0                                    |
//! | binary   | contrast 2.0, grayscale 1.0, brightness 1.5      |
//! | amber    | sepia 0.6                                        |
//! | gold     | sepia 0.5, saturate 1.5, brightness 1.05         |
//! | rosegold | sepia 0.3, saturate 1.3, hue-rotate 330°         |
//! | neutral  | saturate 0.8, brightness 1.0                     |
//! | coolrose | saturate 0.9, hue-rotate 330°                    |

mod ops;
mod pipeline;

pub use ops::{ColorOp, Rgb, MAX_CHANNEL, MID_GRAY};
pub use pipeline::ColorPipeline;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifier of a filter preset.
///
/// Serialized as its lowercase name. Unknown names deserialize (and parse)
/// as [`FilterId::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterId {
    /// Identity: no color change.
    #[default]
    None,
    Vibrant,
    Negative,
    Natural,
    Luminous,
    Dramatic,
    Quiet,
    Cosy,
    Ethereal,
    Bw,
    Binary,
    Amber,
    Gold,
    RoseGold,
    Neutral,
    CoolRose,
}

/// Sidebar section a filter is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterGroup {
    /// "Color Filters", led by the unfiltered original.
    Color,
    /// "Monochrome": grayscale, sepia and tinted presets.
    Monochrome,
}

impl FilterGroup {
    pub fn label(self) -> &'static str {
        match self {
            FilterGroup::Color => "Color Filters",
            FilterGroup::Monochrome => "Monochrome",
        }
    }
}

const VIBRANT: &[ColorOp] = &[ColorOp::Saturate(1.5), ColorOp::Contrast(1.1)];
const NEGATIVE: &[ColorOp] = &[ColorOp::Invert(1.0)];
const NATURAL: &[ColorOp] = &[ColorOp::Brightness(1.05), ColorOp::Saturate(1.05)];
const LUMINOUS: &[ColorOp] = &[ColorOp::Brightness(1.15), ColorOp::Contrast(1.05)];
const DRAMATIC: &[ColorOp] = &[
    ColorOp::Contrast(1.25),
    ColorOp::Saturate(1.1),
    ColorOp::Brightness(0.95),
];
const QUIET: &[ColorOp] = &[ColorOp::Saturate(0.9), ColorOp::Brightness(0.95)];
const COSY: &[ColorOp] = &[
    ColorOp::Sepia(0.25),
    ColorOp::Saturate(1.15),
    ColorOp::Brightness(1.0),
];
const ETHEREAL: &[ColorOp] = &[
    ColorOp::Brightness(1.1),
    ColorOp::Contrast(0.9),
    ColorOp::Saturate(0.9),
];
const BW: &[ColorOp] = &[ColorOp::Grayscale(1.0)];
const BINARY: &[ColorOp] = &[
    ColorOp::Contrast(2.0),
    ColorOp::Grayscale(1.0),
    ColorOp::Brightness(1.5),
];
const AMBER: &[ColorOp] = &[ColorOp::Sepia(0.6)];
const GOLD: &[ColorOp] = &[
    ColorOp::Sepia(0.5),
    ColorOp::Saturate(1.5),
    ColorOp::Brightness(1.05),
];
const ROSE_GOLD: &[ColorOp] = &[
    ColorOp::Sepia(0.3),
    ColorOp::Saturate(1.3),
    ColorOp::HueRotate(330.0),
];
const NEUTRAL: &[ColorOp] = &[ColorOp::Saturate(0.8), ColorOp::Brightness(1.0)];
const COOL_ROSE: &[ColorOp] = &[ColorOp::Saturate(0.9), ColorOp::HueRotate(330.0)];

impl FilterId {
    /// The 15 presets in sidebar order (excludes [`FilterId::None`]).
    pub const PRESETS: [FilterId; 15] = [
        FilterId::Vibrant,
        FilterId::Negative,
        FilterId::Natural,
        FilterId::Luminous,
        FilterId::Dramatic,
        FilterId::Quiet,
        FilterId::Cosy,
        FilterId::Ethereal,
        FilterId::Bw,
        FilterId::Binary,
        FilterId::Amber,
        FilterId::Gold,
        FilterId::RoseGold,
        FilterId::Neutral,
        FilterId::CoolRose,
    ];

    /// Parse a filter name, failing closed to [`FilterId::None`].
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => FilterId::None,
            "vibrant" => FilterId::Vibrant,
            "negative" => FilterId::Negative,
            "natural" => FilterId::Natural,
            "luminous" => FilterId::Luminous,
            "dramatic" => FilterId::Dramatic,
            "quiet" => FilterId::Quiet,
            "cosy" => FilterId::Cosy,
            "ethereal" => FilterId::Ethereal,
            "bw" => FilterId::Bw,
            "binary" => FilterId::Binary,
            "amber" => FilterId::Amber,
            "gold" => FilterId::Gold,
            "rosegold" => FilterId::RoseGold,
            "neutral" => FilterId::Neutral,
            "coolrose" => FilterId::CoolRose,
            _ => {
                debug!(name, "unknown filter, falling back to none");
                FilterId::None
            }
        }
    }

    /// Stable lowercase name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            FilterId::None => "none",
            FilterId::Vibrant => "vibrant",
            FilterId::Negative => "negative",
            FilterId::Natural => "natural",
            FilterId::Luminous => "luminous",
            FilterId::Dramatic => "dramatic",
            FilterId::Quiet => "quiet",
            FilterId::Cosy => "cosy",
            FilterId::Ethereal => "ethereal",
            FilterId::Bw => "bw",
            FilterId::Binary => "binary",
            FilterId::Amber => "amber",
            FilterId::Gold => "gold",
            FilterId::RoseGold => "rosegold",
            FilterId::Neutral => "neutral",
            FilterId::CoolRose => "coolrose",
        }
    }

    /// Human-readable label for the filter grid.
    pub fn label(self) -> &'static str {
        match self {
            FilterId::None => "Original",
            FilterId::Vibrant => "Vibrant",
            FilterId::Negative => "Negative",
            FilterId::Natural => "Natural",
            FilterId::Luminous => "Luminous",
            FilterId::Dramatic => "Dramatic",
            FilterId::Quiet => "Quiet",
            FilterId::Cosy => "Cosy",
            FilterId::Ethereal => "Ethereal",
            FilterId::Bw => "B&W",
            FilterId::Binary => "Binary",
            FilterId::Amber => "Amber",
            FilterId::Gold => "Gold",
            FilterId::RoseGold => "Rose Gold",
            FilterId::Neutral => "Neutral",
            FilterId::CoolRose => "Cool Rose",
        }
    }

    /// Sidebar section this filter belongs to.
    pub fn group(self) -> FilterGroup {
        match self {
            FilterId::None
            | FilterId::Vibrant
            | FilterId::Negative
            | FilterId::Natural
            | FilterId::Luminous
            | FilterId::Dramatic
            | FilterId::Quiet
            | FilterId::Cosy
            | FilterId::Ethereal => FilterGroup::Color,
            FilterId::Bw
            | FilterId::Binary
            | FilterId::Amber
            | FilterId::Gold
            | FilterId::RoseGold
            | FilterId::Neutral
            | FilterId::CoolRose => FilterGroup::Monochrome,
        }
    }

    /// The ordered color operations of this preset.
    pub fn ops(self) -> &'static [ColorOp] {
        match self {
            FilterId::None => &[],
            FilterId::Vibrant => VIBRANT,
            FilterId::Negative => NEGATIVE,
            FilterId::Natural => NATURAL,
            FilterId::Luminous => LUMINOUS,
            FilterId::Dramatic => DRAMATIC,
            FilterId::Quiet => QUIET,
            FilterId::Cosy => COSY,
            FilterId::Ethereal => ETHEREAL,
            FilterId::Bw => BW,
            FilterId::Binary => BINARY,
            FilterId::Amber => AMBER,
            FilterId::Gold => GOLD,
            FilterId::RoseGold => ROSE_GOLD,
            FilterId::Neutral => NEUTRAL,
            FilterId::CoolRose => COOL_ROSE,
        }
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for FilterId {
    fn from(name: String) -> Self {
        FilterId::from_name(&name)
    }
}

impl From<FilterId> for String {
    fn from(id: FilterId) -> Self {
        id.name().to_string()
    }
}

/// Resolve a filter to its ordered operation sequence.
pub fn resolve(filter: FilterId) -> &'static [ColorOp] {
    filter.ops()
}
