//! Markup builders for the panel interior.
//!
//! Pure string construction, shared between targets so the produced
//! surface is testable without a browser.

use acpick_core::{HexColor, Preset};

use crate::style;

/// Inline sun-gear icon shown on the toggle button.
pub const GEAR_ICON: &str = "<svg viewBox=\"0 0 24 24\"><circle cx=\"12\" cy=\"12\" r=\"5\"/><path d=\"M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42\"/></svg>";

/// Markup for a single preset swatch.
///
/// Carries the colour both as the inline background and as `data-color`
/// so host tooling can observe it; the display name doubles as tooltip
/// and caption.
pub fn swatch_markup(preset: &Preset) -> String {
    format!(
        "<div class=\"{swatch}\" data-color=\"{color}\" style=\"background:{color};\" \
         title=\"{name}\"><span class=\"{caption}\">{name}</span></div>",
        swatch = style::SWATCH_CLASS,
        caption = style::SWATCH_NAME_CLASS,
        color = preset.color,
        name = preset.name,
    )
}

/// Interior markup of the picker panel: close control, title, the preset
/// grid, the native colour input seeded with the initial accent, and the
/// hex readout.
pub fn panel_markup(presets: &[Preset], initial: HexColor) -> String {
    let swatches: String = presets.iter().map(swatch_markup).collect();
    format!(
        concat!(
            "<button class=\"{close_class}\" id=\"{close_id}\">&times;</button>",
            "<div class=\"acp-title\">Accent Colour</div>",
            "<div class=\"acp-label\">Recommended</div>",
            "<div class=\"{swatches_class}\" id=\"{swatches_id}\">{swatches}</div>",
            "<div class=\"acp-label\" style=\"margin-top:28px;\">Custom</div>",
            "<input type=\"color\" class=\"{wheel_class}\" id=\"{wheel_id}\" value=\"{initial}\">",
            "<div class=\"acp-hex\">",
            "<span class=\"acp-hex-label\">Active</span>",
            "<span class=\"{hex_class}\" id=\"{hex_id}\">{initial}</span>",
            "</div>",
        ),
        close_class = style::CLOSE_CLASS,
        close_id = style::CLOSE_ID,
        swatches_class = style::SWATCHES_CLASS,
        swatches_id = style::SWATCHES_ID,
        swatches = swatches,
        wheel_class = style::WHEEL_CLASS,
        wheel_id = style::WHEEL_ID,
        hex_class = style::HEX_VAL_CLASS,
        hex_id = style::HEX_VAL_ID,
        initial = initial,
    )
}
