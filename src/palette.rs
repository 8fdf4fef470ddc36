//! Colors used by the icon renderer
//!
//! [`Color`] is a plain 8-bit RGB triple and [`Palette`] is the fixed set of
//! named colors the compositor layers together. The default palette is a
//! constant; a run may override individual entries from a JSON file whose
//! values are CSS color strings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a CSS color string (`#0f172a`, `teal`, `rgb(1, 2, 3)`, ...)
    ///
    /// The alpha component, if any, is discarded.
    pub fn parse(value: &str) -> Result<Self> {
        let color = css_color::Srgb::from_str(value)
            .map_err(|_| anyhow::anyhow!("Invalid color: {}", value))?;
        Ok(Self {
            r: unit_to_channel(color.red),
            g: unit_to_channel(color.green),
            b: unit_to_channel(color.blue),
        })
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation from `self` toward `other`
    ///
    /// `t` is clamped to `[0, 1]`. Channels round half to even, so `t == 0.0`
    /// yields `self` and `t == 1.0` yields `other` exactly.
    pub fn mix(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t).round_ties_even().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The named colors of the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background_start: Color,
    pub background_end: Color,
    pub glow: Color,
    pub ring: Color,
    pub inner_ring: Color,
    pub stem_light: Color,
    pub stem_shadow: Color,
    pub accent: Color,
}

/// Slate background, teal glow and a gold glyph
pub const DEFAULT_PALETTE: Palette = Palette {
    background_start: Color::rgb(0x0f, 0x17, 0x2a),
    background_end: Color::rgb(0x1e, 0x1b, 0x4b),
    glow: Color::rgb(0x2d, 0xd4, 0xbf),
    ring: Color::rgb(0xfa, 0xcc, 0x15),
    inner_ring: Color::rgb(0xa1, 0x62, 0x07),
    stem_light: Color::rgb(0xfe, 0xf3, 0xc7),
    stem_shadow: Color::rgb(0xca, 0x8a, 0x04),
    accent: Color::rgb(0x34, 0xd3, 0x99),
};

/// Palette overrides as read from a JSON file
///
/// Every entry is optional; missing entries keep the default color.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PaletteFile {
    pub background_start: Option<String>,
    pub background_end: Option<String>,
    pub glow: Option<String>,
    pub ring: Option<String>,
    pub inner_ring: Option<String>,
    pub stem_light: Option<String>,
    pub stem_shadow: Option<String>,
    pub accent: Option<String>,
}

impl PaletteFile {
    /// Applies the overrides on top of `base`
    ///
    /// # Errors
    /// Returns an error naming the offending key if a value is not a valid CSS color
    pub fn apply(&self, base: Palette) -> Result<Palette> {
        fn pick(name: &str, value: &Option<String>, fallback: Color) -> Result<Color> {
            match value {
                Some(value) => Color::parse(value)
                    .with_context(|| format!("Invalid palette entry '{}'", name)),
                None => Ok(fallback),
            }
        }

        Ok(Palette {
            background_start: pick(
                "background_start",
                &self.background_start,
                base.background_start,
            )?,
            background_end: pick("background_end", &self.background_end, base.background_end)?,
            glow: pick("glow", &self.glow, base.glow)?,
            ring: pick("ring", &self.ring, base.ring)?,
            inner_ring: pick("inner_ring", &self.inner_ring, base.inner_ring)?,
            stem_light: pick("stem_light", &self.stem_light, base.stem_light)?,
            stem_shadow: pick("stem_shadow", &self.stem_shadow, base.stem_shadow)?,
            accent: pick("accent", &self.accent, base.accent)?,
        })
    }
}

impl Palette {
    /// Parses palette overrides from a JSON string on top of the default palette
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PaletteFile =
            serde_json::from_str(json).context("Failed to parse palette JSON")?;
        file.apply(DEFAULT_PALETTE)
    }

    /// Loads palette overrides from a JSON file on top of the default palette
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Bad palette file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgb(15, 23, 42);
    const B: Color = Color::rgb(254, 243, 199);

    #[test]
    fn test_mix_extremes_are_exact() {
        assert_eq!(A.mix(B, 0.0), A);
        assert_eq!(A.mix(B, 1.0), B);
        assert_eq!(B.mix(A, 0.0), B);
        assert_eq!(B.mix(A, 1.0), A);
    }

    #[test]
    fn test_mix_clamps_weight() {
        assert_eq!(A.mix(B, -3.0), A);
        assert_eq!(A.mix(B, 7.5), B);
    }

    #[test]
    fn test_mix_rounds_half_to_even() {
        // 0 + 5 * 0.5 = 2.5 -> 2, 0 + 7 * 0.5 = 3.5 -> 4
        let mixed = Color::rgb(0, 0, 0).mix(Color::rgb(5, 7, 255), 0.5);
        assert_eq!(mixed, Color::rgb(2, 4, 128));
    }

    #[test]
    fn test_mix_midpoint() {
        let mixed = Color::rgb(0, 100, 200).mix(Color::rgb(100, 0, 200), 0.25);
        assert_eq!(mixed, Color::rgb(25, 75, 200));
    }

    #[test]
    fn test_parse_hex_matches_default() {
        assert_eq!(Color::parse("#0f172a").unwrap(), DEFAULT_PALETTE.background_start);
        assert_eq!(Color::parse("#fef3c7").unwrap(), DEFAULT_PALETTE.stem_light);
        assert_eq!(Color::parse("#ca8a04").unwrap(), DEFAULT_PALETTE.stem_shadow);
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(Color::parse("not-a-color").is_err());
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(DEFAULT_PALETTE.glow.to_string(), "#2dd4bf");
    }

    #[test]
    fn test_palette_override_changes_only_named_entry() {
        let palette = Palette::from_json(r##"{ "glow": "#ff0000" }"##).unwrap();
        assert_eq!(palette.glow, Color::rgb(255, 0, 0));
        assert_eq!(
            Palette {
                glow: DEFAULT_PALETTE.glow,
                ..palette
            },
            DEFAULT_PALETTE
        );
    }

    #[test]
    fn test_palette_rejects_unknown_key() {
        assert!(Palette::from_json(r#"{ "sparkle": "red" }"#).is_err());
    }

    #[test]
    fn test_palette_reports_bad_entry() {
        let err = Palette::from_json(r#"{ "accent": "blurple" }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("accent"));
    }

    #[test]
    fn test_empty_palette_file_is_default() {
        assert_eq!(Palette::from_json("{}").unwrap(), DEFAULT_PALETTE);
    }
}
