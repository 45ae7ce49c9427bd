//! Colour conversions between hex RGB and HSL, plus accent darkening.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Saturation boost applied when deriving the dark accent shade, in
/// percentage points.
pub const DARKEN_SATURATION_BOOST: f64 = 5.0;

/// Lightness drop applied when deriving the dark accent shade, in
/// percentage points.
pub const DARKEN_LIGHTNESS_DROP: f64 = 12.0;

/// Errors from parsing a hex colour string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was not a `#` followed by exactly six characters.
    #[error("expected \"#rrggbb\", got {0:?}")]
    Format(String),
    /// Input had the right shape but contained a non-hex digit.
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// A validated `#rrggbb` colour.
///
/// Parsing accepts either letter case; the channels are stored numerically,
/// so equality between two parsed colours is case-insensitive by
/// construction. Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Create a colour from raw channel values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red/green/blue channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL.
    ///
    /// Lightness is the midpoint of the max and min channel; when all
    /// channels are equal the colour is achromatic (hue and saturation
    /// zero). Hue comes out in degrees in `[0, 360)`.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Derive the dark accent shade: saturation up by
    /// [`DARKEN_SATURATION_BOOST`] (capped at 100), lightness down by
    /// [`DARKEN_LIGHTNESS_DROP`] (floored at 0).
    pub fn darken(self) -> HexColor {
        let hsl = self.to_hsl();
        Hsl {
            h: hsl.h,
            s: (hsl.s + DARKEN_SATURATION_BOOST).min(100.0),
            l: (hsl.l - DARKEN_LIGHTNESS_DROP).max(0.0),
        }
        .to_hex()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.strip_prefix('#') {
            Some(d) if d.len() == 6 => d,
            _ => return Err(ColorParseError::Format(s.to_string())),
        };
        // The byte ranges below assume ASCII digits.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Digit(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Hue/saturation/lightness triple.
///
/// Hue is in degrees, saturation and lightness in percent. Transient
/// intermediate form for the darkening transform; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation in percent, `[0, 100]`
    pub s: f64,
    /// Lightness in percent, `[0, 100]`
    pub l: f64,
}

impl Hsl {
    /// Convert back to a hex colour using the closed-form inverse.
    ///
    /// Each channel blends lightness against an amplitude term clamped to
    /// `[-1, 1]`, with per-channel phases 0, 8 and 4 on the hue wheel.
    pub fn to_hex(self) -> HexColor {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| -> u8 {
            let k = (n + self.h / 30.0) % 12.0;
            let amplitude = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            ((l - a * amplitude) * 255.0).round() as u8
        };

        HexColor::from_rgb(channel(0.0), channel(8.0), channel(4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let color = hex("#c07d58");
        assert_eq!(color.channels(), (0xc0, 0x7d, 0x58));
        assert_eq!(color.to_string(), "#c07d58");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(hex("#8aA68d"), hex("#8AA68D"));
        assert_eq!(hex("#8aA68d").to_string(), "#8aa68d");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            "c07d58".parse::<HexColor>(),
            Err(ColorParseError::Format(_))
        ));
        assert!(matches!(
            "#c07d5".parse::<HexColor>(),
            Err(ColorParseError::Format(_))
        ));
        assert!(matches!(
            "#c07d588".parse::<HexColor>(),
            Err(ColorParseError::Format(_))
        ));
        assert!(matches!(
            "".parse::<HexColor>(),
            Err(ColorParseError::Format(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert!(matches!(
            "#c07d5g".parse::<HexColor>(),
            Err(ColorParseError::Digit(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<HexColor>(),
            Err(ColorParseError::Digit(_))
        ));
        // Multibyte input must error, not panic on a byte boundary.
        assert!(matches!(
            "#¢¢¢".parse::<HexColor>(),
            Err(ColorParseError::Digit(_))
        ));
    }

    #[test]
    fn test_hsl_round_trip() {
        for input in [
            "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000", "#c07d58",
            "#8aa68d", "#c9a84c", "#7fa3b8", "#123456",
        ] {
            let color = hex(input);
            assert_eq!(color.to_hsl().to_hex(), color, "round trip of {input}");
        }
    }

    #[test]
    fn test_hsl_of_primaries() {
        let red = hex("#ff0000").to_hsl();
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 100.0);
        assert_eq!(red.l, 50.0);

        let white = hex("#ffffff").to_hsl();
        assert_eq!(white.h, 0.0);
        assert_eq!(white.s, 0.0);
        assert_eq!(white.l, 100.0);

        let black = hex("#000000").to_hsl();
        assert_eq!(black.s, 0.0);
        assert_eq!(black.l, 0.0);
    }

    #[test]
    fn test_darken_is_deterministic() {
        let copper = hex("#c07d58");
        assert_eq!(copper.darken(), copper.darken());
        assert_ne!(copper.darken(), hex("#8aA68d").darken());
    }

    #[test]
    fn test_darken_lowers_lightness() {
        let before = hex("#c9a84c").to_hsl();
        let after = hex("#c9a84c").darken().to_hsl();
        assert!(after.l < before.l);
    }

    #[test]
    fn test_darken_clamps_saturation() {
        // Fully saturated red stays at 100% saturation, lightness 50 -> 38.
        assert_eq!(hex("#ff0000").darken(), hex("#c20000"));
    }

    #[test]
    fn test_darken_clamps_lightness_at_black() {
        assert_eq!(hex("#000000").darken(), hex("#000000"));
        assert_eq!(hex("#050505").darken(), hex("#000000"));
    }

    #[test]
    fn test_serde_round_trip() {
        let color = hex("#c9a84c");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#c9a84c\"");
        assert_eq!(serde_json::from_str::<HexColor>(&json).unwrap(), color);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<HexColor>("\"not a colour\"").is_err());
    }
}
