//! The injected stylesheet and the identifiers of the produced DOM surface.
//!
//! The ids and classes below are part of the widget's external contract; a
//! host page must not already use them.

/// Id of the floating toggle button.
pub const TOGGLE_ID: &str = "acpToggle";
/// Id of the full-viewport backdrop.
pub const BACKDROP_ID: &str = "acpBackdrop";
/// Id of the picker panel.
pub const PANEL_ID: &str = "acpPanel";
/// Id of the panel close button.
pub const CLOSE_ID: &str = "acpClose";
/// Id of the preset swatch grid.
pub const SWATCHES_ID: &str = "acpSwatches";
/// Id of the native colour input.
pub const WHEEL_ID: &str = "acpWheel";
/// Id of the hex readout value.
pub const HEX_VAL_ID: &str = "acpHexVal";

/// Class of the floating toggle button.
pub const TOGGLE_CLASS: &str = "acp-toggle";
/// Class of the backdrop.
pub const BACKDROP_CLASS: &str = "acp-backdrop";
/// Class of the panel.
pub const PANEL_CLASS: &str = "acp-panel";
/// Class of the close button.
pub const CLOSE_CLASS: &str = "acp-close";
/// Class of the swatch grid.
pub const SWATCHES_CLASS: &str = "acp-swatches";
/// Class of a single preset swatch.
pub const SWATCH_CLASS: &str = "acp-swatch";
/// Class of the caption under a swatch.
pub const SWATCH_NAME_CLASS: &str = "acp-swatch-name";
/// Class of the native colour input.
pub const WHEEL_CLASS: &str = "acp-wheel-input";
/// Class of the hex readout value.
pub const HEX_VAL_CLASS: &str = "acp-hex-val";

/// Class toggled on the panel and backdrop while the picker is open.
pub const OPEN_CLASS: &str = "open";
/// Class toggled on the swatch matching the active accent.
pub const ACTIVE_CLASS: &str = "active";

/// Stylesheet template. `--acp-accent` is a placeholder for the host
/// page's primary accent property, substituted by [`stylesheet`].
const STYLESHEET_TEMPLATE: &str = "\
.acp-toggle{position:fixed;right:28px;top:50%;transform:translateY(-50%);z-index:10000;width:44px;height:44px;border-radius:50%;border:2px solid rgba(255,255,255,0.15);background:var(--acp-accent);cursor:pointer;transition:transform 0.3s,box-shadow 0.3s;box-shadow:0 4px 20px rgba(0,0,0,0.3);}
.acp-toggle:hover{transform:translateY(-50%) scale(1.1);box-shadow:0 6px 28px rgba(0,0,0,0.45);}
.acp-toggle svg{width:20px;height:20px;position:absolute;top:50%;left:50%;transform:translate(-50%,-50%);fill:none;stroke:#fff;stroke-width:2;stroke-linecap:round;stroke-linejoin:round;}
.acp-panel{position:fixed;right:28px;top:50%;transform:translateY(-50%) translateX(20px);z-index:10001;width:260px;background:#141418;border:1px solid rgba(255,255,255,0.08);border-radius:16px;padding:28px 24px;opacity:0;pointer-events:none;transition:opacity 0.3s,transform 0.3s;box-shadow:0 16px 48px rgba(0,0,0,0.5);}
.acp-panel.open{opacity:1;pointer-events:auto;transform:translateY(-50%) translateX(0);}
.acp-close{position:absolute;top:14px;right:16px;background:none;border:none;color:rgba(255,255,255,0.35);font-size:18px;cursor:pointer;padding:4px;line-height:1;transition:color 0.2s;}
.acp-close:hover{color:#fff;}
.acp-title{font-family:\"Barlow Condensed\",sans-serif;font-weight:600;font-size:11px;letter-spacing:0.22em;text-transform:uppercase;color:rgba(255,255,255,0.4);margin-bottom:20px;}
.acp-label{font-size:9px;letter-spacing:0.2em;text-transform:uppercase;color:rgba(255,255,255,0.3);margin-bottom:10px;font-weight:500;}
.acp-swatches{display:grid;grid-template-columns:repeat(4,1fr);gap:8px;margin-bottom:24px;}
.acp-swatch{width:100%;aspect-ratio:1;border-radius:10px;border:2px solid transparent;cursor:pointer;transition:border-color 0.2s,transform 0.2s;position:relative;}
.acp-swatch:hover{transform:scale(1.1);}
.acp-swatch.active{border-color:#fff;}
.acp-swatch-name{position:absolute;bottom:-16px;left:50%;transform:translateX(-50%);font-size:8px;letter-spacing:0.12em;text-transform:uppercase;color:rgba(255,255,255,0.35);white-space:nowrap;font-weight:500;}
.acp-wheel-input{-webkit-appearance:none;appearance:none;width:100%;height:40px;border:none;border-radius:8px;cursor:pointer;background:linear-gradient(to right,#ff0000,#ff8800,#ffff00,#00ff00,#00ffff,#0000ff,#ff00ff,#ff0000);outline:none;}
.acp-wheel-input::-webkit-color-swatch-wrapper{padding:0;}
.acp-wheel-input::-webkit-color-swatch{border:none;border-radius:8px;}
.acp-wheel-input::-moz-color-swatch{border:none;border-radius:8px;}
.acp-hex{display:flex;align-items:center;gap:8px;margin-top:14px;}
.acp-hex-label{font-size:9px;letter-spacing:0.15em;text-transform:uppercase;color:rgba(255,255,255,0.3);font-weight:500;}
.acp-hex-val{font-family:\"Barlow Condensed\",sans-serif;font-size:14px;color:rgba(255,255,255,0.7);letter-spacing:0.06em;font-weight:400;}
.acp-backdrop{position:fixed;inset:0;z-index:9999;display:none;}
.acp-backdrop.open{display:block;}
";

/// Build the stylesheet for the given primary accent property (the
/// toggle's resting background references it through `var()`).
pub fn stylesheet(primary_property: &str) -> String {
    STYLESHEET_TEMPLATE.replace("--acp-accent", primary_property)
}
