//! Color space conversion between hex strings, RGB and HSL.
//!
//! Palettes mix `#RRGGBB` strings with `hsl(h, s%, l%)` strings, so every
//! consumer funnels color strings through [`parse_color`]. Parsing is
//! lenient about whitespace, commas, `deg` and `%` suffixes, and returns
//! `None` instead of producing NaN channels.

use std::fmt;

/// An 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL with hue in degrees and saturation/lightness in `[0, 1]`.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 { delta / (2.0 - max - min) } else { delta / (max + min) };
        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl::new(h * 60.0, s, l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An HSL color. Hue is in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build a normalized HSL value: hue wraps modulo 360, the rest clamp to `[0, 1]`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h: h.rem_euclid(360.0), s: s.clamp(0.0, 1.0), l: l.clamp(0.0, 1.0) }
    }

    /// Standard piecewise HSL to RGB conversion.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            let v = unit_to_channel(self.l);
            return Rgb::new(v, v, v);
        }

        let q = if self.l < 0.5 { self.l * (1.0 + self.s) } else { self.l + self.s - self.l * self.s };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        Rgb::new(
            unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_channel(hue_to_channel(p, q, h)),
            unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Shift lightness by `delta`, clamped.
    #[must_use]
    pub fn lighten(self, delta: f64) -> Self {
        Self::new(self.h, self.s, self.l + delta)
    }

    /// Rotate hue by `degrees`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(v: f64) -> u8 {
    // Clamped to [0, 255] before the cast.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
#[must_use]
pub fn hex_to_rgb(input: &str) -> Option<Rgb> {
    let hex = input.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            rgb_from_six(&expanded)
        }
        6 => rgb_from_six(hex),
        _ => None,
    }
}

fn rgb_from_six(hex: &str) -> Option<Rgb> {
    Some(Rgb::new(hex_pair(&hex[0..2])?, hex_pair(&hex[2..4])?, hex_pair(&hex[4..6])?))
}

fn hex_pair(pair: &str) -> Option<u8> {
    match u8::from_str_radix(pair, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Parse `hsl(H, S%, L%)`, `hsla(H, S%, L%, A)` or a bare `H S% L%` triplet.
///
/// Alpha, when present, is ignored. Components outside their ranges are
/// normalized by [`Hsl::new`].
#[must_use]
pub fn parse_hsl(input: &str) -> Option<Hsl> {
    let lowered = input.trim().to_ascii_lowercase();
    let body = if let Some(rest) = lowered.strip_prefix("hsla(").or_else(|| lowered.strip_prefix("hsl(")) {
        rest.strip_suffix(')')?
    } else {
        lowered.as_str()
    };

    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let h = parse_number(parts[0].trim_end_matches("deg"))?;
    let s = parse_number(parts[1].trim_end_matches('%'))?;
    let l = parse_number(parts[2].trim_end_matches('%'))?;

    Some(Hsl::new(h, s / 100.0, l / 100.0))
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse any supported color string (hex or HSL) into RGB.
#[must_use]
pub fn parse_color(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return hex_to_rgb(trimmed);
    }
    hex_to_rgb(trimmed).or_else(|| parse_hsl(trimmed).map(Hsl::to_rgb))
}

/// Convert an HSL string to `#RRGGBB`.
///
/// Input that does not parse as HSL yields `#000000`; the result always
/// matches `^#[0-9A-F]{6}$`.
#[must_use]
pub fn hsl_string_to_hex(input: &str) -> String {
    match parse_hsl(input) {
        Some(hsl) => hsl.to_rgb().to_hex(),
        None => {
            tracing::debug!(input, "unparseable hsl string, falling back to black");
            Rgb::BLACK.to_hex()
        }
    }
}

/// Convert a hex string to `hsl(h, s%, l%)`.
#[must_use]
pub fn hex_to_hsl_string(input: &str) -> Option<String> {
    hex_to_rgb(input).map(|rgb| rgb.to_hsl().to_string())
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
