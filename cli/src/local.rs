//! Offline commands backed directly by the `palette` crate.

use std::io::{self, Read};

use palette::contrast::{brightness, classify};
use palette::generate::generate_batch_with_rng;
use palette::{
    ColorPalette, ExportFormat, GeneratedPalette, GenerationConstraints, export_palette, import_palette_json,
    parse_color,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

use crate::CliError;

/// Palette JSON from an argument: inline JSON, or `-` for stdin.
///
/// # Errors
///
/// Returns [`CliError::Io`] if stdin cannot be read.
pub fn read_palette_arg(arg: &str) -> Result<String, CliError> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parse and validate palette JSON (bare palette or export document).
///
/// # Errors
///
/// Returns [`CliError::Palette`] for malformed JSON, unsupported versions or
/// invalid colors.
pub fn parse_palette(input: &str) -> Result<ColorPalette, CliError> {
    Ok(import_palette_json(input)?)
}

#[must_use]
pub fn contrast_report(color: &str) -> Value {
    json!({
        "background": color,
        "foreground": classify(color).hex(),
        "brightness": parse_color(color).map(brightness),
    })
}

/// # Errors
///
/// Returns [`CliError::InvalidColor`] if `color` is neither hex nor HSL.
pub fn convert_color(color: &str) -> Result<Value, CliError> {
    let rgb = parse_color(color).ok_or_else(|| CliError::InvalidColor(color.to_owned()))?;
    Ok(json!({ "hex": rgb.to_hex(), "hsl": rgb.to_hsl().to_string() }))
}

/// Generation flags as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub count: i64,
    pub mode: Option<String>,
    pub theme: Option<String>,
    pub base_hue: Option<f64>,
    pub harmony: Option<String>,
    pub seed: Option<u64>,
}

/// Largest batch `generate` builds locally; the Team plan's server cap.
pub const MAX_LOCAL_BATCH: i64 = 50;

/// # Errors
///
/// Returns [`CliError::BatchTooLarge`] above [`MAX_LOCAL_BATCH`], or
/// [`CliError::Palette`] for an unknown mode, theme or harmony.
pub fn generate(options: &GenerateOptions) -> Result<Vec<GeneratedPalette>, CliError> {
    if options.count > MAX_LOCAL_BATCH {
        return Err(CliError::BatchTooLarge { requested: options.count, max: MAX_LOCAL_BATCH });
    }
    let constraints = GenerationConstraints::from_names(
        options.mode.as_deref(),
        options.theme.as_deref(),
        options.base_hue,
        options.harmony.as_deref(),
    )?;
    let batch = match options.seed {
        Some(seed) => generate_batch_with_rng(options.count, &constraints, &mut StdRng::seed_from_u64(seed)),
        None => generate_batch_with_rng(options.count, &constraints, &mut rand::rng()),
    };
    Ok(batch)
}

/// # Errors
///
/// Returns [`CliError::Palette`] for an unknown format or a bad palette.
pub fn export(input: &str, format: &str) -> Result<String, CliError> {
    let format = format.parse::<ExportFormat>()?;
    let palette = parse_palette(input)?;
    Ok(export_palette(&palette, format))
}

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;
