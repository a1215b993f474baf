//! Palette value types and their wire shapes.
//!
//! Key names are part of the contract with template renderers: base fields
//! are kebab-case (`section-bg-1`), derived foregrounds are camelCase
//! (`onBg1`), and the legacy aliases keep their original kebab-case names
//! (`button-text`, `text-primary`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PaletteError;
use crate::color::parse_color;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// The base palette a user picks or generates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorPalette {
    pub brand: String,
    pub accent: String,
    pub highlight: String,
    pub button_primary: String,
    pub button_secondary: String,
    pub section_bg_1: String,
    pub section_bg_2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_bg_3: Option<String>,
    pub border: String,
    pub input_bg: String,
}

impl ColorPalette {
    /// Base fields in wire order, skipping an absent `section-bg-3`.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            ("brand", self.brand.as_str()),
            ("accent", self.accent.as_str()),
            ("highlight", self.highlight.as_str()),
            ("button-primary", self.button_primary.as_str()),
            ("button-secondary", self.button_secondary.as_str()),
            ("section-bg-1", self.section_bg_1.as_str()),
            ("section-bg-2", self.section_bg_2.as_str()),
        ];
        if let Some(bg3) = &self.section_bg_3 {
            out.push(("section-bg-3", bg3.as_str()));
        }
        out.push(("border", self.border.as_str()));
        out.push(("input-bg", self.input_bg.as_str()));
        out
    }

    /// Check that every field parses as hex or HSL.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (field, value) in self.entries() {
            if parse_color(value).is_none() {
                return Err(PaletteError::InvalidColor { field, value: value.to_owned() });
            }
        }
        Ok(())
    }
}

// =============================================================================
// COLOR ROLES
// =============================================================================

/// A palette plus every derived foreground and the legacy aliases.
///
/// Built by [`crate::roles::map_palette_to_roles`]; serializes to one flat
/// object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRoles {
    #[serde(flatten)]
    pub palette: ColorPalette,

    #[serde(rename = "onBrand")]
    pub on_brand: String,
    #[serde(rename = "onAccent")]
    pub on_accent: String,
    #[serde(rename = "onHighlight")]
    pub on_highlight: String,
    #[serde(rename = "onPrimary")]
    pub on_primary: String,
    #[serde(rename = "onSecondary")]
    pub on_secondary: String,
    #[serde(rename = "onBg1")]
    pub on_bg_1: String,
    #[serde(rename = "onBg2")]
    pub on_bg_2: String,
    #[serde(rename = "onBg3")]
    pub on_bg_3: String,
    #[serde(rename = "onInput")]
    pub on_input: String,

    // Legacy aliases read by older templates.
    #[serde(rename = "button-text")]
    pub button_text: String,
    #[serde(rename = "button-secondary-text")]
    pub button_secondary_text: String,
    #[serde(rename = "text-primary")]
    pub text_primary: String,
    #[serde(rename = "text-secondary")]
    pub text_secondary: String,
    #[serde(rename = "input-text")]
    pub input_text: String,
}

impl ColorRoles {
    /// Derived fields (foregrounds, then legacy aliases) in wire order.
    #[must_use]
    pub fn derived_entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("onBrand", self.on_brand.as_str()),
            ("onAccent", self.on_accent.as_str()),
            ("onHighlight", self.on_highlight.as_str()),
            ("onPrimary", self.on_primary.as_str()),
            ("onSecondary", self.on_secondary.as_str()),
            ("onBg1", self.on_bg_1.as_str()),
            ("onBg2", self.on_bg_2.as_str()),
            ("onBg3", self.on_bg_3.as_str()),
            ("onInput", self.on_input.as_str()),
            ("button-text", self.button_text.as_str()),
            ("button-secondary-text", self.button_secondary_text.as_str()),
            ("text-primary", self.text_primary.as_str()),
            ("text-secondary", self.text_secondary.as_str()),
            ("input-text", self.input_text.as_str()),
        ]
    }

    /// Base and derived fields in wire order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = self.palette.entries();
        out.extend(self.derived_entries());
        out
    }

    /// Flat key to color map, the shape template renderers consume.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.entries().into_iter().map(|(k, v)| (k, v.to_owned())).collect()
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
