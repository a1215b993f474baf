//! Batch palette generation.
//!
//! DESIGN
//! ======
//! A palette is grown from one brand hue. Accent and highlight hues are
//! offset from it by a [`Harmony`]; saturation and lightness come from the
//! bands of the requested [`GenerationMode`]. Section backgrounds share the
//! brand hue family with low saturation so text contrast stays predictable.
//!
//! The generator is template-agnostic and never persists anything. Callers
//! attach templates with [`assign_templates`] and store the results
//! themselves. A non-positive `count` yields an empty batch.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::PaletteError;
use crate::color::Hsl;
use crate::model::ColorPalette;

// =============================================================================
// MODES
// =============================================================================

/// Named theme with a fixed saturation/lightness band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Pastel,
    Vibrant,
    Muted,
    Neon,
    Earth,
    Monochrome,
}

impl ThemeMode {
    pub const ALL: [Self; 6] = [Self::Pastel, Self::Vibrant, Self::Muted, Self::Neon, Self::Earth, Self::Monochrome];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
            Self::Neon => "neon",
            Self::Earth => "earth",
            Self::Monochrome => "monochrome",
        }
    }

    fn bands(self) -> Bands {
        match self {
            Self::Pastel => Bands {
                hue: None,
                saturation: 0.45..=0.70,
                brand_lightness: 0.72..=0.82,
                background_saturation: 0.30..=0.50,
                background_lightness: 0.95..=0.98,
                monochrome: false,
            },
            Self::Vibrant => Bands {
                hue: None,
                saturation: 0.80..=1.0,
                brand_lightness: 0.45..=0.55,
                background_saturation: 0.10..=0.30,
                background_lightness: 0.96..=0.99,
                monochrome: false,
            },
            Self::Muted => Bands {
                hue: None,
                saturation: 0.15..=0.35,
                brand_lightness: 0.40..=0.55,
                background_saturation: 0.05..=0.15,
                background_lightness: 0.92..=0.96,
                monochrome: false,
            },
            Self::Neon => Bands {
                hue: None,
                saturation: 0.95..=1.0,
                brand_lightness: 0.50..=0.60,
                background_saturation: 0.20..=0.40,
                background_lightness: 0.04..=0.10,
                monochrome: false,
            },
            Self::Earth => Bands {
                hue: Some(15.0..=55.0),
                saturation: 0.25..=0.50,
                brand_lightness: 0.30..=0.45,
                background_saturation: 0.15..=0.30,
                background_lightness: 0.90..=0.95,
                monochrome: false,
            },
            Self::Monochrome => Bands {
                hue: None,
                saturation: 0.05..=0.20,
                brand_lightness: 0.25..=0.40,
                background_saturation: 0.0..=0.08,
                background_lightness: 0.94..=0.98,
                monochrome: true,
            },
        }
    }
}

impl FromStr for ThemeMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaletteError::UnknownMode(s.to_owned()))
    }
}

/// How section backgrounds and brand colors are banded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Light or dark, picked per palette.
    #[default]
    Random,
    Light,
    Dark,
    Theme(ThemeMode),
}

impl GenerationMode {
    fn bands<R: Rng>(self, rng: &mut R) -> Bands {
        match self {
            Self::Random => {
                if rng.random_bool(0.5) {
                    Self::Light.bands(rng)
                } else {
                    Self::Dark.bands(rng)
                }
            }
            Self::Light => Bands {
                hue: None,
                saturation: 0.55..=0.85,
                brand_lightness: 0.38..=0.52,
                background_saturation: 0.05..=0.25,
                background_lightness: 0.94..=0.99,
                monochrome: false,
            },
            Self::Dark => Bands {
                hue: None,
                saturation: 0.55..=0.85,
                brand_lightness: 0.55..=0.70,
                background_saturation: 0.10..=0.30,
                background_lightness: 0.06..=0.16,
                monochrome: false,
            },
            Self::Theme(theme) => theme.bands(),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
            Self::Theme(theme) => f.write_str(theme.as_str()),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = PaletteError;

    /// Accepts `random`, `light`, `dark`, or any [`ThemeMode`] name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "" => Ok(Self::Random),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => other.parse::<ThemeMode>().map(Self::Theme),
        }
    }
}

/// Hue relationship between brand, accent and highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
}

impl Harmony {
    pub const ALL: [Self; 4] = [Self::Complementary, Self::Analogous, Self::Triadic, Self::SplitComplementary];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Hue offsets in degrees for (accent, highlight).
    fn offsets(self) -> (f64, f64) {
        match self {
            Self::Complementary => (180.0, 30.0),
            Self::Analogous => (30.0, -30.0),
            Self::Triadic => (120.0, 240.0),
            Self::SplitComplementary => (150.0, 210.0),
        }
    }
}

impl FromStr for Harmony {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == normalized)
            .ok_or_else(|| PaletteError::UnknownHarmony(s.to_owned()))
    }
}

/// Optional knobs for a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenerationConstraints {
    pub mode: GenerationMode,
    /// Pin the brand hue (degrees, wrapped modulo 360).
    pub base_hue: Option<f64>,
    /// Pin the harmony; random per palette when `None`.
    pub harmony: Option<Harmony>,
}

impl GenerationConstraints {
    /// Build constraints from their text names. A `theme` wins over `mode`;
    /// with neither the mode is random.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownMode`] or [`PaletteError::UnknownHarmony`]
    /// for names that do not parse.
    pub fn from_names(
        mode: Option<&str>,
        theme: Option<&str>,
        base_hue: Option<f64>,
        harmony: Option<&str>,
    ) -> Result<Self, PaletteError> {
        let mode = match (theme, mode) {
            (Some(theme), _) => GenerationMode::Theme(theme.parse::<ThemeMode>()?),
            (None, Some(mode)) => mode.parse::<GenerationMode>()?,
            (None, None) => GenerationMode::Random,
        };
        let harmony = harmony.map(str::parse::<Harmony>).transpose()?;
        Ok(Self { mode, base_hue, harmony })
    }
}

struct Bands {
    hue: Option<RangeInclusive<f64>>,
    saturation: RangeInclusive<f64>,
    brand_lightness: RangeInclusive<f64>,
    background_saturation: RangeInclusive<f64>,
    background_lightness: RangeInclusive<f64>,
    monochrome: bool,
}

// =============================================================================
// GENERATED PALETTE
// =============================================================================

/// One batch item: a palette plus its id, creation time and template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    pub id: Uuid,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(rename = "templateId", default)]
    pub template_id: Option<String>,
    #[serde(rename = "templateName", default)]
    pub template_name: Option<String>,
    #[serde(flatten)]
    pub palette: ColorPalette,
}

impl GeneratedPalette {
    /// Whether this item is older than `retention` at `now_ms`.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64, retention: Duration) -> bool {
        let retention_ms = i64::try_from(retention.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(self.timestamp) > retention_ms
    }
}

/// Drop items older than `retention`.
#[must_use]
pub fn prune_expired(items: Vec<GeneratedPalette>, now_ms: i64, retention: Duration) -> Vec<GeneratedPalette> {
    items.into_iter().filter(|item| !item.is_expired(now_ms, retention)).collect()
}

/// Attach templates round-robin. An empty template list leaves items untouched.
pub fn assign_templates<S: AsRef<str>>(items: &mut [GeneratedPalette], templates: &[(S, S)]) {
    if templates.is_empty() {
        return;
    }
    for (item, (id, name)) in items.iter_mut().zip(templates.iter().cycle()) {
        item.template_id = Some(id.as_ref().to_owned());
        item.template_name = Some(name.as_ref().to_owned());
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generate `count` independent palettes using the thread-local RNG.
#[must_use]
pub fn generate_batch(count: i64, constraints: &GenerationConstraints) -> Vec<GeneratedPalette> {
    generate_batch_with_rng(count, constraints, &mut rand::rng())
}

/// Generate `count` independent palettes from `rng`.
///
/// `count <= 0` returns an empty vector.
pub fn generate_batch_with_rng<R: Rng>(
    count: i64,
    constraints: &GenerationConstraints,
    rng: &mut R,
) -> Vec<GeneratedPalette> {
    let Ok(count) = usize::try_from(count) else {
        return Vec::new();
    };

    let batch: Vec<GeneratedPalette> = (0..count)
        .map(|_| GeneratedPalette {
            id: Uuid::new_v4(),
            timestamp: now_ms(),
            template_id: None,
            template_name: None,
            palette: generate_palette(constraints, rng),
        })
        .collect();

    tracing::debug!(count = batch.len(), mode = %constraints.mode, "generated palette batch");
    batch
}

/// Generate one palette.
pub fn generate_palette<R: Rng>(constraints: &GenerationConstraints, rng: &mut R) -> ColorPalette {
    let bands = constraints.mode.bands(rng);

    let hue = match (constraints.base_hue, &bands.hue) {
        (Some(hue), _) if hue.is_finite() => hue,
        (_, Some(range)) => rng.random_range(range.clone()),
        _ => rng.random_range(0.0..360.0),
    };
    let harmony = constraints
        .harmony
        .unwrap_or_else(|| Harmony::ALL[rng.random_range(0..Harmony::ALL.len())]);
    let (accent_offset, highlight_offset) = if bands.monochrome { (0.0, 0.0) } else { harmony.offsets() };

    let saturation = rng.random_range(bands.saturation.clone());
    let brand_lightness = rng.random_range(bands.brand_lightness.clone());
    let bg_saturation = rng.random_range(bands.background_saturation.clone());
    let bg_lightness = rng.random_range(bands.background_lightness.clone());

    // Steps move toward mid-grey so dark themes get lighter and light themes darker.
    let dark_background = bg_lightness < 0.5;
    let step = if dark_background { 1.0 } else { -1.0 };

    let brand = Hsl::new(hue, saturation, brand_lightness);
    let accent = Hsl::new(hue + accent_offset, saturation * 0.9, brand_lightness + step * 0.08);
    let highlight = Hsl::new(hue + highlight_offset, saturation, brand_lightness + 0.15);
    let bg_1 = Hsl::new(hue, bg_saturation, bg_lightness);

    let hex = |hsl: Hsl| hsl.to_rgb().to_hex();

    ColorPalette {
        brand: hex(brand),
        accent: hex(accent),
        highlight: hex(highlight),
        button_primary: hex(brand.lighten(-0.06)),
        button_secondary: hex(accent),
        section_bg_1: hex(bg_1),
        section_bg_2: hex(Hsl::new(hue + accent_offset, bg_saturation, bg_lightness + step * 0.03)),
        section_bg_3: Some(hex(Hsl::new(hue + highlight_offset, bg_saturation, bg_lightness + step * 0.06))),
        border: hex(bg_1.lighten(step * 0.15)),
        input_bg: hex(if dark_background { bg_1.lighten(0.05) } else { bg_1.lighten(0.02) }),
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
