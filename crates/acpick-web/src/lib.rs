//! AcPick Browser Shell
//!
//! Mounts the accent picker into a host page: injects the stylesheet,
//! builds the toggle/backdrop/panel DOM, wires user interaction to the
//! picker state in `acpick-core`, and projects every state change into
//! the page's accent custom properties.
//!
//! String-level view construction ([`style`], [`markup`]) is
//! target-independent; DOM access is confined to the wasm-only modules.

pub mod config;
pub mod markup;
pub mod style;

pub use config::PickerConfig;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::mount;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
