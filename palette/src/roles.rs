//! Role mapping: base palette in, full role table out.
//!
//! Every background field gets its foreground from
//! [`crate::contrast::resolve_foreground`]. The legacy flat fields are then
//! overwritten from those computed values so older templates that still read
//! `button-text` or `text-primary` stay in step. The shim is one-way: nothing
//! reads the legacy fields back.

use crate::contrast::resolve_foreground;
use crate::model::{ColorPalette, ColorRoles};

/// Derive the role table for `palette`.
///
/// A palette without `section-bg-3` gets `onBg3` equal to `onBg2`.
#[must_use]
pub fn map_palette_to_roles(palette: &ColorPalette) -> ColorRoles {
    let on = |background: &str| resolve_foreground(background).to_owned();

    let on_primary = on(&palette.button_primary);
    let on_secondary = on(&palette.button_secondary);
    let on_bg_1 = on(&palette.section_bg_1);
    let on_bg_2 = on(&palette.section_bg_2);
    let on_bg_3 = palette.section_bg_3.as_deref().map_or_else(|| on_bg_2.clone(), on);
    let on_input = on(&palette.input_bg);

    ColorRoles {
        palette: palette.clone(),
        on_brand: on(&palette.brand),
        on_accent: on(&palette.accent),
        on_highlight: on(&palette.highlight),
        button_text: on_primary.clone(),
        button_secondary_text: on_secondary.clone(),
        text_primary: on_bg_1.clone(),
        text_secondary: on_bg_2.clone(),
        input_text: on_input.clone(),
        on_primary,
        on_secondary,
        on_bg_1,
        on_bg_2,
        on_bg_3,
        on_input,
    }
}

#[cfg(test)]
#[path = "roles_test.rs"]
mod tests;
