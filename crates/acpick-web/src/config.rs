//! Mount-time configuration for the picker.

use acpick_core::{PRESETS, Preset};

/// Configuration for a mounted picker.
///
/// The defaults reproduce the drop-in behaviour: the host page themes
/// itself with `--gold` and `--gold-2` and the standard preset palette is
/// offered.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Root-scoped custom property holding the primary accent. Read once
    /// at mount, written on every colour change.
    pub primary_property: String,
    /// Root-scoped custom property for the derived dark shade. Write-only.
    pub derived_property: String,
    /// Presets offered in the swatch grid.
    pub presets: &'static [Preset],
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            primary_property: "--gold".to_string(),
            derived_property: "--gold-2".to_string(),
            presets: PRESETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_drop_in_contract() {
        let config = PickerConfig::default();
        assert_eq!(config.primary_property, "--gold");
        assert_eq!(config.derived_property, "--gold-2");
        assert_eq!(config.presets.len(), 4);
    }
}
