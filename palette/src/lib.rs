//! Color core for Palette Painter.
//!
//! This crate owns the color math shared by the HTTP service and the CLI:
//! parsing and converting color strings, picking readable text colors,
//! deriving the full role table for a palette, generating random palettes
//! in batches, and rendering palettes to export formats.
//!
//! Everything here is synchronous and pure apart from the batch generator,
//! which draws from an RNG and stamps the wall clock. Nothing touches
//! storage; callers serialize the plain values however they like.

pub mod color;
pub mod contrast;
pub mod export;
pub mod generate;
pub mod model;
pub mod roles;

pub use color::{Hsl, Rgb, hex_to_rgb, hsl_string_to_hex, parse_color};
pub use contrast::{DARK_FOREGROUND, Foreground, LIGHT_FOREGROUND, resolve_foreground};
pub use export::{ExportFormat, export_palette, import_palette_json};
pub use generate::{GeneratedPalette, GenerationConstraints, GenerationMode, Harmony, ThemeMode, generate_batch};
pub use model::{ColorPalette, ColorRoles};
pub use roles::map_palette_to_roles;

/// Errors returned by the strict (non-rendering) entry points of this crate.
///
/// The hot rendering paths (`resolve_foreground`, `hsl_string_to_hex`,
/// `map_palette_to_roles`) never return these; they fall back instead.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// A palette field holds a string that is neither hex nor HSL.
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    /// The export format name is not one of `css`, `scss`, `tailwind`, `json`.
    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),
    /// The generation mode or theme name is not recognized.
    #[error("unknown generation mode: {0}")]
    UnknownMode(String),
    /// The harmony name is not recognized.
    #[error("unknown harmony: {0}")]
    UnknownHarmony(String),
    /// An export document carries a schema version this build cannot read.
    #[error("unsupported export document version: {0}")]
    UnsupportedVersion(u64),
    /// The export document is not valid JSON or has the wrong shape.
    #[error("invalid palette document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
