//! Output seam between the picker state and whatever renders it.

use crate::picker::AccentUpdate;

/// Receiver for picker state projections.
///
/// The browser shell implements this against the live DOM; tests implement
/// it in memory. Implementations must treat each call as a full snapshot,
/// not a delta.
pub trait AccentSink {
    /// Mirror a colour projection into every visible reflection.
    fn apply_update(&mut self, update: &AccentUpdate);

    /// Mirror the panel visibility state.
    fn set_panel_open(&mut self, open: bool);
}

/// An [`AccentSink`] that just records what it was told.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// The most recent colour projection, if any
    pub last_update: Option<AccentUpdate>,
    /// Number of colour projections received
    pub updates: usize,
    /// Last panel visibility written
    pub panel_open: bool,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccentSink for MemorySink {
    fn apply_update(&mut self, update: &AccentUpdate) {
        self.last_update = Some(*update);
        self.updates += 1;
    }

    fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::AccentPicker;
    use crate::preset::{DEFAULT_ACCENT, PRESETS};

    #[test]
    fn test_memory_sink_records_last_projection() {
        let mut picker = AccentPicker::new(DEFAULT_ACCENT);
        let mut sink = MemorySink::new();

        sink.apply_update(&picker.update());
        sink.apply_update(&picker.apply(PRESETS[1].color));

        assert_eq!(sink.updates, 2);
        let last = sink.last_update.unwrap();
        assert_eq!(last.accent, PRESETS[1].color);
        assert_eq!(last.accent_dark, PRESETS[1].color.darken());
        assert_eq!(last.active_preset, Some(1));
    }

    #[test]
    fn test_memory_sink_tracks_panel_visibility() {
        let mut sink = MemorySink::new();
        assert!(!sink.panel_open);
        sink.set_panel_open(true);
        assert!(sink.panel_open);
        sink.set_panel_open(false);
        assert!(!sink.panel_open);
    }
}
