//! Labels and the default palette seeded on board creation.

use super::ids::LabelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed palette seeded into every new board, keyed `koan-lbl-0`..`koan-lbl-5`.
const DEFAULT_PALETTE: [&str; 6] = [
    "#578f36", // green
    "#c2ab00", // yellow
    "#bc6d00", // orange
    "#9d2211", // red
    "#611c7b", // purple
    "#006199", // blue
];

/// A label that can be attached to cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub properties: LabelProperties,
}

impl Label {
    /// Create a label with the given color and empty text.
    pub fn new(id: LabelId, color: impl Into<String>) -> Self {
        Self {
            id,
            properties: LabelProperties {
                color: color.into(),
                text: String::new(),
            },
        }
    }

    /// The six default labels every new board starts with.
    pub fn default_labels() -> BTreeMap<LabelId, Label> {
        DEFAULT_PALETTE
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let id = LabelId::from_string(format!("koan-lbl-{i}"));
                (id.clone(), Label::new(id, *color))
            })
            .collect()
    }
}

/// Properties of a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelProperties {
    /// Hex color string, format `#rrggbb`
    pub color: String,
    /// User-defined text shown on the label
    #[serde(default)]
    pub text: String,
}
