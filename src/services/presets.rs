//! Preset service: built-in seed list and admin create/delete.

use axum::http::StatusCode;
use palette::generate::now_ms;
use palette::{ColorPalette, PaletteError};
use tracing::info;
use uuid::Uuid;

use super::store::{PaletteStore, Preset, StoreError};
use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("preset name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for PresetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "E_INVALID_NAME",
            Self::Palette(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Palette(e) => e.status(),
            Self::Store(e) => e.status(),
        }
    }
}

struct BuiltinPreset {
    name: &'static str,
    // brand, accent, highlight, button-primary, button-secondary,
    // section-bg-1, section-bg-2, section-bg-3, border, input-bg
    colors: [&'static str; 10],
}

const BUILTIN: &[BuiltinPreset] = &[
    BuiltinPreset {
        name: "Ocean Breeze",
        colors: [
            "#0EA5E9", "#14B8A6", "#F97316", "#0284C7", "#E0F2FE", "#FFFFFF", "#F0F9FF", "#0C4A6E", "#BAE6FD",
            "#FFFFFF",
        ],
    },
    BuiltinPreset {
        name: "Midnight",
        colors: [
            "#6366F1", "#EC4899", "#FACC15", "#4F46E5", "#312E81", "#0F172A", "#1E293B", "#020617", "#334155",
            "#1E293B",
        ],
    },
    BuiltinPreset {
        name: "Forest Floor",
        colors: [
            "#166534", "#CA8A04", "#84CC16", "#15803D", "#DCFCE7", "#FEFCE8", "#F7FEE7", "#14532D", "#D9F99D",
            "#FFFFFF",
        ],
    },
    BuiltinPreset {
        name: "Sunset Pastel",
        colors: [
            "hsl(12, 80%, 72%)",
            "hsl(280, 60%, 78%)",
            "hsl(48, 90%, 70%)",
            "hsl(12, 70%, 60%)",
            "hsl(280, 40%, 90%)",
            "hsl(30, 100%, 98%)",
            "hsl(12, 60%, 95%)",
            "hsl(280, 30%, 25%)",
            "hsl(12, 30%, 85%)",
            "hsl(0, 0%, 100%)",
        ],
    },
];

impl BuiltinPreset {
    fn palette(&self) -> ColorPalette {
        let [brand, accent, highlight, primary, secondary, bg1, bg2, bg3, border, input] = self.colors;
        ColorPalette {
            brand: brand.to_owned(),
            accent: accent.to_owned(),
            highlight: highlight.to_owned(),
            button_primary: primary.to_owned(),
            button_secondary: secondary.to_owned(),
            section_bg_1: bg1.to_owned(),
            section_bg_2: bg2.to_owned(),
            section_bg_3: Some(bg3.to_owned()),
            border: border.to_owned(),
            input_bg: input.to_owned(),
        }
    }
}

/// Built-in presets, stamped from `created_at` upward to keep their order.
#[must_use]
pub fn builtin_presets(created_at: i64) -> Vec<Preset> {
    BUILTIN
        .iter()
        .zip(created_at..)
        .map(|(preset, ts)| Preset { id: Uuid::new_v4(), name: preset.name.to_owned(), palette: preset.palette(), created_at: ts })
        .collect()
}

/// Insert the built-in presets when the store has none. Returns how many
/// were written.
///
/// # Errors
///
/// Returns a store error if listing or saving fails.
pub async fn seed_if_empty(store: &dyn PaletteStore) -> Result<usize, StoreError> {
    if !store.list_presets().await?.is_empty() {
        return Ok(0);
    }
    let presets = builtin_presets(now_ms());
    for preset in &presets {
        store.save_preset(preset).await?;
    }
    info!(count = presets.len(), "seeded built-in presets");
    Ok(presets.len())
}

/// Validate and store a new preset.
///
/// # Errors
///
/// Returns [`PresetError::EmptyName`] for a blank name, a palette error for
/// unparseable colors, or a store error.
pub async fn create_preset(store: &dyn PaletteStore, name: &str, palette: ColorPalette) -> Result<Preset, PresetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PresetError::EmptyName);
    }
    palette.validate()?;

    let preset = Preset { id: Uuid::new_v4(), name: name.to_owned(), palette, created_at: now_ms() };
    store.save_preset(&preset).await?;
    info!(preset_id = %preset.id, name = %preset.name, "preset created");
    Ok(preset)
}

/// # Errors
///
/// Returns a store error, including `NotFound` for an unknown id.
pub async fn delete_preset(store: &dyn PaletteStore, id: Uuid) -> Result<(), PresetError> {
    store.delete_preset(id).await?;
    info!(preset_id = %id, "preset deleted");
    Ok(())
}

#[cfg(test)]
#[path = "presets_test.rs"]
mod tests;
