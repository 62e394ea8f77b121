use crate::core::random::Xorshift32;

use super::config::{ScanOrder, SimConfig};
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    world.rng = Xorshift32::new(seed);
}

pub(super) fn set_scan_order(world: &mut WorldCore, order: ScanOrder) {
    world.scan_order = order;
}

pub(super) fn set_alternate_direction(world: &mut WorldCore, enabled: bool) {
    world.alternate_direction = enabled;
}

pub(super) fn set_color_variation(world: &mut WorldCore, enabled: bool) {
    world.color_variation = enabled;
}

pub(super) fn current_config(world: &WorldCore) -> SimConfig {
    SimConfig {
        rows: world.grid.rows(),
        cols: world.grid.cols(),
        seed: world.rng.state(),
        scan_order: world.scan_order,
        alternate_direction: world.alternate_direction,
        color_variation: world.color_variation,
    }
}
