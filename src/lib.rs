//! Paxel Engine - layered pixel paint-and-simulate core in WASM
//!
//! The JS host owns the canvas, the shaders and the rAF loop; this crate
//! owns the data model and the simulation:
//! - core/       - Shared utilities (logging)
//! - domain/     - Particles, vectors, colors
//! - spatial/    - Grid options and the per-layer cell index
//! - layers/     - Layer container and the layer registry
//! - systems/    - Force / Collision / Loop
//! - simulation/ - Engine core, fixed-step driver, wasm facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod layers;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"🦀 Paxel WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{EngineConfig, EngineCore, PaxelEngine};
pub use spatial::grid::GridOptions;
