//! World - the tick driver
//!
//! WorldCore owns the grid, the rule registry and the random source, and
//! walks every occupied cell once per `step`. It only orchestrates:
//! particle rules live in behaviors/, cell storage in spatial/grid.
//!
//! Traversal policy: one pass per tick with "already updated" marking.
//! The mark is set before a particle's rule runs and travels with it on
//! moves and swaps, so a particle that moves into a not-yet-visited cell is
//! not updated a second time in the same tick.

use crate::behaviors::BehaviorRegistry;
use crate::core::random::Xorshift32;
use crate::grid::Grid;
use crate::particle::Particle;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use config::{ScanOrder, SimConfig};
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_stats::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: Xorshift32,

    // Settings
    scan_order: ScanOrder,
    alternate_direction: bool,
    color_variation: bool,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with default settings.
    /// Fails for an empty grid or one over the cell limit (see `SimConfig::validate`).
    pub fn new(rows: u32, cols: u32) -> Result<Self, String> {
        init::create_world_core(&SimConfig::new(rows, cols))
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, String> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Self::from_config(&config)
    }

    /// Current settings as a config (the seed is the live generator state)
    pub fn config(&self) -> SimConfig {
        settings::current_config(self)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn particle_count(&self) -> u32 { self.grid.particle_count() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn get_particle(&self, row: i32, col: i32) -> Option<Particle> {
        self.grid.get_particle(row, col)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Reseed the random source; 0 selects the default seed
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    pub fn set_scan_order(&mut self, order: ScanOrder) {
        settings::set_scan_order(self, order);
    }

    pub fn set_alternate_direction(&mut self, enabled: bool) {
        settings::set_alternate_direction(self, enabled);
    }

    pub fn set_color_variation(&mut self, enabled: bool) {
        settings::set_color_variation(self, enabled);
    }

    /// Place a particle by selector name ("Sand", "Water", ...)
    pub fn add_particle(&mut self, row: i32, col: i32, name: &str) -> bool {
        commands::add_particle(self, row, col, name)
    }

    /// Place a particle by kind id
    pub fn add_particle_kind(&mut self, row: i32, col: i32, id: u8) -> bool {
        commands::add_particle_kind(self, row, col, id)
    }

    /// Add particles in radius (brush). Returns how many were placed.
    pub fn add_particles_in_radius(&mut self, row: i32, col: i32, radius: i32, name: &str) -> u32 {
        commands::add_particles_in_radius(self, row, col, radius, name)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, row: i32, col: i32) -> bool {
        commands::remove_particle(self, row, col)
    }

    /// Remove particles in radius. Returns how many were removed.
    pub fn remove_particles_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        commands::remove_particles_in_radius(self, row, col, radius)
    }

    /// Clear all particles and rewind the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Get pointer to kinds array (for JS rendering)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.grid.kinds_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    /// Number of cells (elements in either array)
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    pub fn kinds_byte_len(&self) -> usize {
        self.grid.kinds_byte_len()
    }

    pub fn colors_byte_len(&self) -> usize {
        self.grid.colors_byte_len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private simulation methods
impl WorldCore {
    /// Run one particle's rule. `None` if the cell was empty or already updated,
    /// otherwise whether the cell's content changed.
    fn update_particle(&mut self, row: i32, col: i32) -> Option<bool> {
        update::update_particle(self, row, col)
    }

    /// Process one row in the given horizontal direction
    fn process_row(&mut self, row: i32, go_right: bool) -> (u32, u32) {
        step::process_row(self, row, go_right)
    }
}
