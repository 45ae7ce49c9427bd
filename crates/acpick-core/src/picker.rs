//! Picker state: the active accent colour and the panel state machine.

use crate::color::HexColor;
use crate::preset::{DEFAULT_ACCENT, PRESETS, Preset};

/// Visibility state of the picker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel hidden, toggle interactive.
    #[default]
    Closed,
    /// Panel and backdrop shown, toggle non-interactive.
    Open,
}

impl PanelState {
    /// Check whether the panel is open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// One projection of the picker state.
///
/// Every visible mirror of the accent (the two style properties, the
/// toggle background, the colour input value, the hex readout, the active
/// swatch highlight) is written from one of these, so the mirrors cannot
/// drift apart: `accent_dark` is always the darkened `accent`, and
/// `active_preset` matches at most one swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentUpdate {
    /// The active accent colour
    pub accent: HexColor,
    /// Derived dark shade, always `accent.darken()`
    pub accent_dark: HexColor,
    /// Index of the preset whose colour equals the accent, if any
    pub active_preset: Option<usize>,
}

/// The single source of truth for the widget.
///
/// Holds the active colour and the panel state; every DOM or style write
/// in the view layer is a projection of this struct via [`AccentUpdate`].
#[derive(Debug, Clone)]
pub struct AccentPicker {
    active: HexColor,
    panel: PanelState,
    presets: &'static [Preset],
}

impl AccentPicker {
    /// Create a picker with the given initial accent and the standard
    /// preset palette.
    pub fn new(initial: HexColor) -> Self {
        Self::with_presets(initial, PRESETS)
    }

    /// Create a picker matching against a custom preset palette.
    pub fn with_presets(initial: HexColor, presets: &'static [Preset]) -> Self {
        Self {
            active: initial,
            panel: PanelState::Closed,
            presets,
        }
    }

    /// Initialise from the raw computed value of the host page's accent
    /// property. Absent, empty or unparseable values fall back to
    /// [`DEFAULT_ACCENT`].
    pub fn from_css_value(raw: Option<&str>) -> Self {
        Self::from_css_value_with_presets(raw, PRESETS)
    }

    /// [`AccentPicker::from_css_value`] with a custom preset palette.
    pub fn from_css_value_with_presets(raw: Option<&str>, presets: &'static [Preset]) -> Self {
        let initial = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| match v.parse() {
                Ok(color) => Some(color),
                Err(err) => {
                    log::warn!("ignoring accent property value {v:?}: {err}");
                    None
                }
            })
            .unwrap_or(DEFAULT_ACCENT);
        Self::with_presets(initial, presets)
    }

    /// The active accent colour.
    pub fn active(&self) -> HexColor {
        self.active
    }

    /// The panel visibility state.
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// The preset palette this picker matches against.
    pub fn presets(&self) -> &'static [Preset] {
        self.presets
    }

    /// Apply a new accent colour. This is the only state transition that
    /// touches the colour; swatch clicks and colour-input events both end
    /// up here.
    pub fn apply(&mut self, color: HexColor) -> AccentUpdate {
        self.active = color;
        self.update()
    }

    /// Project the current state without changing it (used for the
    /// initial paint).
    pub fn update(&self) -> AccentUpdate {
        AccentUpdate {
            accent: self.active,
            accent_dark: self.active.darken(),
            active_preset: self
                .presets
                .iter()
                .position(|p| p.color == self.active),
        }
    }

    /// Open the panel. Returns whether a transition happened.
    pub fn open_panel(&mut self) -> bool {
        let was_closed = !self.panel.is_open();
        self.panel = PanelState::Open;
        was_closed
    }

    /// Close the panel. Returns whether a transition happened.
    pub fn close_panel(&mut self) -> bool {
        let was_open = self.panel.is_open();
        self.panel = PanelState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_fallback_when_property_missing() {
        assert_eq!(AccentPicker::from_css_value(None).active(), DEFAULT_ACCENT);
        assert_eq!(
            AccentPicker::from_css_value(Some("")).active(),
            DEFAULT_ACCENT
        );
        assert_eq!(
            AccentPicker::from_css_value(Some("   ")).active(),
            DEFAULT_ACCENT
        );
        assert_eq!(
            AccentPicker::from_css_value(Some("tomato")).active(),
            DEFAULT_ACCENT
        );
    }

    #[test]
    fn test_initial_value_is_trimmed() {
        let picker = AccentPicker::from_css_value(Some(" #c9a84c "));
        assert_eq!(picker.active(), hex("#c9a84c"));
    }

    #[test]
    fn test_apply_keeps_derived_shade_in_lockstep() {
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        for preset in PRESETS {
            let update = picker.apply(preset.color);
            assert_eq!(update.accent, preset.color);
            assert_eq!(update.accent_dark, preset.color.darken());
            assert_eq!(picker.active(), preset.color);
        }
    }

    #[test]
    fn test_apply_gold_marks_only_gold_active() {
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        let update = picker.apply(hex("#c9a84c"));
        assert_eq!(update.active_preset, Some(1));
        assert_eq!(PRESETS[1].name, "Gold");
    }

    #[test]
    fn test_active_preset_matches_case_insensitively() {
        // "#8aA68d" is Sage with mixed-case input.
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        let update = picker.apply(hex("#8aA68d"));
        assert_eq!(update.active_preset, Some(0));
    }

    #[test]
    fn test_custom_color_marks_no_preset_active() {
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        let update = picker.apply(hex("#123456"));
        assert_eq!(update.active_preset, None);
    }

    #[test]
    fn test_initial_update_is_consistent() {
        let picker = AccentPicker::from_css_value(None);
        let update = picker.update();
        assert_eq!(update.accent, DEFAULT_ACCENT);
        assert_eq!(update.accent_dark, DEFAULT_ACCENT.darken());
        // Copper is a preset, so the initial paint highlights it.
        assert_eq!(update.active_preset, Some(2));
    }

    #[test]
    fn test_panel_state_machine() {
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        assert_eq!(picker.panel(), PanelState::Closed);

        assert!(picker.open_panel());
        assert_eq!(picker.panel(), PanelState::Open);

        // open -> open is not a transition.
        assert!(!picker.open_panel());

        assert!(picker.close_panel());
        assert_eq!(picker.panel(), PanelState::Closed);
        assert!(!picker.close_panel());
    }
}
