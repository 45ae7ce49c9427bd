//! The curated preset palette and the documented default accent.

use serde::Serialize;

use crate::color::HexColor;

/// Fallback accent used when the host page defines no accent property
/// (Copper).
pub const DEFAULT_ACCENT: HexColor = HexColor::from_rgb(0xc0, 0x7d, 0x58);

/// A named colour offered for one-click selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Display name shown under the swatch
    pub name: &'static str,
    /// The fixed colour this swatch applies
    pub color: HexColor,
}

impl Preset {
    /// Create a preset from a name and raw channel values.
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: HexColor::from_rgb(r, g, b),
        }
    }
}

/// The fixed, ordered preset list. Never mutated; swatch identity is the
/// position in this array.
pub const PRESETS: &[Preset] = &[
    Preset::new("Sage", 0x8a, 0xa6, 0x8d),
    Preset::new("Gold", 0xc9, 0xa8, 0x4c),
    Preset::new("Copper", 0xc0, 0x7d, 0x58),
    Preset::new("Steel", 0x7f, 0xa3, 0xb8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accent_is_copper() {
        assert_eq!(DEFAULT_ACCENT.to_string(), "#c07d58");
        assert_eq!(PRESETS[2].color, DEFAULT_ACCENT);
    }

    #[test]
    fn test_preset_colors_are_distinct() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.color, b.color, "{} and {}", a.name, b.name);
            }
        }
    }
}
