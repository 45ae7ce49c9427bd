//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

use crate::config::PickerConfig;

/// Mount the picker with the default configuration as soon as the module
/// loads, so importing the built package behaves like the original
/// drop-in script tag.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting AcPick (WASM)");

    if let Err(err) = crate::dom::mount(PickerConfig::default()) {
        log::error!("accent picker failed to mount: {err:?}");
    }
}
