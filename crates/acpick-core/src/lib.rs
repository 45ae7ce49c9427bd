//! AcPick Core Library
//!
//! Platform-agnostic colour engine and state for the AcPick accent picker.
//! Nothing here touches the DOM; the browser shell in `acpick-web` drives
//! this state and projects it into the page.

pub mod color;
pub mod picker;
pub mod preset;
pub mod sink;

pub use color::{ColorParseError, HexColor, Hsl};
pub use picker::{AccentPicker, AccentUpdate, PanelState};
pub use preset::{DEFAULT_ACCENT, PRESETS, Preset};
pub use sink::{AccentSink, MemorySink};
