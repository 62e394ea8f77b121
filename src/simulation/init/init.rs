use crate::behaviors::BehaviorRegistry;
use crate::core::random::Xorshift32;
use crate::grid::Grid;

use super::config::SimConfig;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: &SimConfig) -> Result<WorldCore, String> {
    config.validate()?;

    console_log!(
        "world created: {}x{} (seed {}, scan {:?})",
        config.rows,
        config.cols,
        config.seed,
        config.scan_order
    );

    Ok(WorldCore {
        grid: Grid::new(config.rows, config.cols),
        behaviors: BehaviorRegistry::new(),
        rng: Xorshift32::new(config.seed),
        scan_order: config.scan_order,
        alternate_direction: config.alternate_direction,
        color_variation: config.color_variation,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
