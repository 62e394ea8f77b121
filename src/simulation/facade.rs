use wasm_bindgen::prelude::*;

use super::config::ScanOrder;
use super::perf_stats::PerfStats;
use super::WorldCore;
use crate::domain::content;
use crate::elements::EL_EMPTY;

/// JS-facing handle around `WorldCore`
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<World, JsValue> {
        let core = WorldCore::new(rows, cols).map_err(|e| {
            console_warn!("rejected world size: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    /// Create a world from a JSON config (see `SimConfig`)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(|e| {
            console_warn!("rejected world config: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// "bottomUp" or "topDown"; false for anything else
    pub fn set_scan_order(&mut self, order: &str) -> bool {
        match ScanOrder::from_name(order) {
            Some(o) => {
                self.core.set_scan_order(o);
                true
            }
            None => false,
        }
    }

    pub fn set_alternate_direction(&mut self, enabled: bool) {
        self.core.set_alternate_direction(enabled);
    }

    pub fn set_color_variation(&mut self, enabled: bool) {
        self.core.set_color_variation(enabled);
    }

    /// Place a particle by dropdown name ("Sand", "Water", ...)
    pub fn add_particle(&mut self, row: i32, col: i32, name: &str) -> bool {
        self.core.add_particle(row, col, name)
    }

    /// Place a particle by kind id (see `el_*` exports)
    pub fn add_particle_kind(&mut self, row: i32, col: i32, id: u8) -> bool {
        self.core.add_particle_kind(row, col, id)
    }

    /// Add particles in radius (brush)
    pub fn add_particles_in_radius(&mut self, row: i32, col: i32, radius: i32, name: &str) -> u32 {
        self.core.add_particles_in_radius(row, col, radius, name)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, row: i32, col: i32) -> bool {
        self.core.remove_particle(row, col)
    }

    /// Remove particles in radius
    pub fn remove_particles_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        self.core.remove_particles_in_radius(row, col, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Kind id at a cell (0 = empty or out of bounds)
    pub fn kind_at(&self, row: i32, col: i32) -> u8 {
        self.core
            .get_particle(row, col)
            .map_or(EL_EMPTY, |p| p.kind.id())
    }

    pub fn is_wet(&self, row: i32, col: i32) -> bool {
        self.core.get_particle(row, col).is_some_and(|p| p.is_wet())
    }

    /// ABGR color at a cell, `None` (undefined) when empty
    pub fn color_at(&self, row: i32, col: i32) -> Option<u32> {
        self.core.get_particle(row, col).map(|p| p.color)
    }

    /// Get pointer to kinds array (for JS rendering)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.core.kinds_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    /// Cells in the grid (element length of both arrays)
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    pub fn kinds_byte_len(&self) -> usize {
        self.core.kinds_byte_len()
    }

    pub fn colors_byte_len(&self) -> usize {
        self.core.colors_byte_len()
    }

    /// Selector names, ids and colors for the particle dropdown
    #[wasm_bindgen(js_name = particleManifestJson)]
    pub fn particle_manifest_json(&self) -> Result<String, JsValue> {
        content::manifest_json().map_err(|e| JsValue::from_str(&e))
    }
}
