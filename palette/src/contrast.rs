//! Contrast resolution: the one place that decides text color for a background.
//!
//! DESIGN
//! ======
//! Perceived brightness is the weighted sum `Y = 0.299R + 0.587G + 0.114B`
//! on the 0-255 scale. Backgrounds with `Y > 128` get [`DARK_FOREGROUND`],
//! everything else gets [`LIGHT_FOREGROUND`]. Every caller in the workspace
//! goes through [`classify`] so a page never mixes thresholds.
//!
//! LIMITATIONS
//! ===========
//! This is a brightness heuristic, not a WCAG 2 contrast-ratio check.
//! Mid-tone backgrounds near the threshold can end up with text that passes
//! a casual glance but fails AA. Do not advertise results as accessible.
//!
//! Unparseable backgrounds are treated as dark and get the light foreground.

use crate::color::{Rgb, parse_color};

/// Foreground used on bright backgrounds.
pub const DARK_FOREGROUND: &str = "#000000";

/// Foreground used on dark backgrounds and on anything that fails to parse.
pub const LIGHT_FOREGROUND: &str = "#FFFFFF";

/// Brightness above which a background counts as light.
pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// One of the two foreground tones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Foreground {
    Dark,
    Light,
}

impl Foreground {
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Dark => DARK_FOREGROUND,
            Self::Light => LIGHT_FOREGROUND,
        }
    }

    #[must_use]
    pub fn rgb(self) -> Rgb {
        match self {
            Self::Dark => Rgb::BLACK,
            Self::Light => Rgb::WHITE,
        }
    }

    /// Alpha-blended variant for secondary text, e.g. `rgba(0, 0, 0, 0.7)`.
    ///
    /// `alpha` is clamped to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> String {
        let rgb = self.rgb();
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
        format!("rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b)
    }
}

/// Weighted perceptual brightness on the 0-255 scale.
#[must_use]
pub fn brightness(rgb: Rgb) -> f64 {
    0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)
}

#[must_use]
pub fn classify_rgb(rgb: Rgb) -> Foreground {
    if brightness(rgb) > BRIGHTNESS_THRESHOLD { Foreground::Dark } else { Foreground::Light }
}

/// Pick the foreground tone for a background color string (hex or HSL).
#[must_use]
pub fn classify(background: &str) -> Foreground {
    match parse_color(background) {
        Some(rgb) => classify_rgb(rgb),
        None => {
            tracing::debug!(background, "unparseable background, treating as dark");
            Foreground::Light
        }
    }
}

/// Readable text color for `background`: always [`DARK_FOREGROUND`] or [`LIGHT_FOREGROUND`].
#[must_use]
pub fn resolve_foreground(background: &str) -> &'static str {
    classify(background).hex()
}

#[cfg(test)]
#[path = "contrast_test.rs"]
mod tests;
