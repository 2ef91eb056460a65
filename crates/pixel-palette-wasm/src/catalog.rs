//! Catalog bindings used to build the editor sidebar.

use pixel_palette_core::{AdjustmentKind, FilterGroup, FilterId};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::js_error;

/// Slider increment shown in the UI. The core does not quantize to it.
const SLIDER_STEP: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterEntry {
    name: &'static str,
    label: &'static str,
    group: FilterGroup,
    group_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AdjustmentEntry {
    name: &'static str,
    label: &'static str,
    min: f32,
    max: f32,
    neutral: f32,
    step: f32,
}

/// The "Original" tile first, then every preset in sidebar order.
fn filter_entries() -> Vec<FilterEntry> {
    std::iter::once(FilterId::None)
        .chain(FilterId::PRESETS)
        .map(|f| FilterEntry {
            name: f.name(),
            label: f.label(),
            group: f.group(),
            group_label: f.group().label(),
        })
        .collect()
}

fn adjustment_entries() -> Vec<AdjustmentEntry> {
    AdjustmentKind::ALL
        .iter()
        .map(|&kind| {
            let (min, max) = kind.range();
            AdjustmentEntry {
                name: kind.name(),
                label: kind.label(),
                min,
                max,
                neutral: kind.neutral(),
                step: SLIDER_STEP,
            }
        })
        .collect()
}

/// Preset names in sidebar order, e.g. `["vibrant", "negative", ...]`.
#[wasm_bindgen]
pub fn filter_names() -> js_sys::Array {
    FilterId::PRESETS
        .iter()
        .map(|f| JsValue::from_str(f.name()))
        .collect()
}

/// Filter tiles as `[{ name, label, group, groupLabel }]` in sidebar order,
/// starting with the unfiltered "Original" tile.
#[wasm_bindgen]
pub fn filter_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&filter_entries()).map_err(|e| js_error("filter catalog", e))
}

/// Adjustment sliders as `[{ name, label, min, max, neutral, step }]`.
#[wasm_bindgen]
pub fn adjustment_ranges() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&adjustment_entries())
        .map_err(|e| js_error("adjustment ranges", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_entries_order() {
        let entries = filter_entries();
        assert_eq!(entries.len(), 16);
        assert_eq!(
            entries[0],
            FilterEntry {
                name: "none",
                label: "Original",
                group: FilterGroup::Color,
                group_label: "Color Filters",
            }
        );
        assert_eq!(entries[1].name, "vibrant");
        assert!(entries.iter().any(|e| e.name == "bw" && e.label == "B&W"));
        assert_eq!(entries[15].name, "coolrose");
    }

    #[test]
    fn test_filter_entries_grouped() {
        let entries = filter_entries();
        let split = entries
            .iter()
            .position(|e| e.group == FilterGroup::Monochrome)
            .unwrap();
        assert_eq!(entries[split].name, "bw");
        assert!(entries[..split].iter().all(|e| e.group == FilterGroup::Color));
        assert!(entries[split..]
            .iter()
            .all(|e| e.group == FilterGroup::Monochrome && e.group_label == "Monochrome"));
        assert_eq!(entries.len() - split, 7);
    }

    #[test]
    fn test_filter_entry_wire_shape() {
        let json = serde_json::to_value(&filter_entries()[9]).unwrap();
        assert_eq!(json["name"], "bw");
        assert_eq!(json["group"], "monochrome");
        assert_eq!(json["groupLabel"], "Monochrome");
    }

    #[test]
    fn test_adjustment_entries() {
        let entries = adjustment_entries();
        assert_eq!(entries.len(), 5);

        let brightness = &entries[0];
        assert_eq!(brightness.name, "brightness");
        assert_eq!(brightness.label, "Brightness");
        assert_eq!((brightness.min, brightness.max), (0.0, 200.0));
        assert_eq!(brightness.neutral, 100.0);

        let shadows = entries.iter().find(|e| e.name == "shadows").unwrap();
        assert_eq!((shadows.min, shadows.max), (-100.0, 100.0));
        assert_eq!(shadows.neutral, 0.0);
        assert!(entries.iter().all(|e| e.step == SLIDER_STEP));
    }
}
