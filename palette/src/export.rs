//! Export renderers and the versioned JSON document.
//!
//! Every export carries the base palette, the derived roles, and a muted
//! text variant for the first section, so consumers never compute contrast
//! on their own.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PaletteError;
use crate::contrast::classify;
use crate::model::{ColorPalette, ColorRoles};
use crate::roles::map_palette_to_roles;

/// Schema version written into JSON exports.
pub const EXPORT_SCHEMA_VERSION: u64 = 1;

/// Opacity of the muted text variant.
const MUTED_ALPHA: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Tailwind, Self::Json];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "js",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Css => "text/css; charset=utf-8",
            Self::Scss => "text/x-scss; charset=utf-8",
            Self::Tailwind => "text/javascript; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaletteError::UnknownExportFormat(s.to_owned()))
    }
}

/// Render `palette` in `format`.
#[must_use]
pub fn export_palette(palette: &ColorPalette, format: ExportFormat) -> String {
    let roles = map_palette_to_roles(palette);
    match format {
        ExportFormat::Css => render_css(&roles),
        ExportFormat::Scss => render_scss(&roles),
        ExportFormat::Tailwind => render_tailwind(&roles),
        ExportFormat::Json => render_json(&roles),
    }
}

/// Variable names in kebab-case, with derived roles flattened (`onBg1` -> `on-bg-1`).
fn variables(roles: &ColorRoles) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = roles
        .entries()
        .into_iter()
        .map(|(key, value)| (kebab(key), value.to_owned()))
        .collect();
    vars.push(("text-muted".to_owned(), muted_text(roles)));
    vars
}

fn muted_text(roles: &ColorRoles) -> String {
    classify(&roles.palette.section_bg_1).with_alpha(MUTED_ALPHA)
}

fn kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_alpha = false;
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_digit() && prev_alpha {
            out.push('-');
            out.push(c);
        } else {
            out.push(c);
        }
        prev_alpha = c.is_ascii_alphabetic();
    }
    out
}

fn render_css(roles: &ColorRoles) -> String {
    let mut out = String::from(":root {\n");
    for (name, value) in variables(roles) {
        // Writing to a String cannot fail.
        writeln!(out, "  --{name}: {value};").unwrap_or_default();
    }
    out.push_str("}\n");
    out
}

fn render_scss(roles: &ColorRoles) -> String {
    let mut out = String::new();
    for (name, value) in variables(roles) {
        writeln!(out, "${name}: {value};").unwrap_or_default();
    }
    out
}

fn render_tailwind(roles: &ColorRoles) -> String {
    let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    for (name, value) in variables(roles) {
        writeln!(out, "        '{name}': '{value}',").unwrap_or_default();
    }
    out.push_str("      },\n    },\n  },\n};\n");
    out
}

fn render_json(roles: &ColorRoles) -> String {
    let doc = serde_json::json!({
        "version": EXPORT_SCHEMA_VERSION,
        "palette": roles.palette,
        "roles": roles,
        "textMuted": muted_text(roles),
    });
    format!("{doc:#}\n")
}

/// Read a palette from a JSON export document or a bare palette object.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidDocument`] for malformed JSON or a missing
/// field, [`PaletteError::UnsupportedVersion`] for documents from another
/// schema version, and [`PaletteError::InvalidColor`] when a color fails to
/// parse.
pub fn import_palette_json(input: &str) -> Result<ColorPalette, PaletteError> {
    let value: Value = serde_json::from_str(input)?;
    let palette_value = match value.get("version") {
        Some(version) => {
            let version = version.as_u64().unwrap_or(0);
            if version != EXPORT_SCHEMA_VERSION {
                return Err(PaletteError::UnsupportedVersion(version));
            }
            value.get("palette").cloned().unwrap_or(Value::Null)
        }
        None => value,
    };

    let palette: ColorPalette = serde_json::from_value(palette_value)?;
    palette.validate()?;
    Ok(palette)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
