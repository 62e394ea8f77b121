//! Sandgarden Engine - falling-sand rules in WASM
//!
//! Architecture:
//! - core/       - logging macros, random source
//! - spatial/    - grid storage and move primitives
//! - domain/     - particle kinds, particle factory, manifest
//! - systems/    - per-kind update rules
//! - simulation/ - tick driver, commands, config, JS facade

// Macros must be declared before any module that uses them
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used throughout the crate
pub use spatial::grid;
pub use domain::elements;
pub use domain::particle;
pub use systems::behaviors;

#[doc(hidden)]
pub use web_sys as __web_sys;

use wasm_bindgen::prelude::*;

// Thread pool for the `parallel` feature's bulk grid passes
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

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

    console_log!("Sandgarden engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::random::{RandomSource, Xorshift32};
pub use domain::elements::ParticleKind;
pub use domain::particle::{check_particle_type, Particle};
pub use simulation::{ScanOrder, SimConfig, World, WorldCore};
pub use systems::behaviors::{swap_allowed, update};

// Export kind ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_stone() -> u8 { domain::elements::EL_STONE }
#[wasm_bindgen]
pub fn el_dirt() -> u8 { domain::elements::EL_DIRT }
#[wasm_bindgen]
pub fn el_cloud() -> u8 { domain::elements::EL_CLOUD }
#[wasm_bindgen]
pub fn el_grass() -> u8 { domain::elements::EL_GRASS }
