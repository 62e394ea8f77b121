use super::{PerfTimer, ScanOrder, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Marks from the previous tick must not block this one
    world.grid.reset_updated();

    let go_right = !world.alternate_direction || (world.frame & 1) == 0;
    let rows = world.grid.rows() as i32;

    let mut processed = 0u32;
    let mut changed = 0u32;
    match world.scan_order {
        ScanOrder::BottomUp => {
            for row in (0..rows).rev() {
                let (p, c) = world.process_row(row, go_right);
                processed += p;
                changed += c;
            }
        }
        ScanOrder::TopDown => {
            for row in 0..rows {
                let (p, c) = world.process_row(row, go_right);
                processed += p;
                changed += c;
            }
        }
    }

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
        world.perf_stats.particles_processed = processed;
        world.perf_stats.cells_changed = changed;
        world.perf_stats.particle_count = world.grid.particle_count();
        world.perf_stats.grid_size = world.grid.size() as u32;
    }
}

pub(super) fn process_row(world: &mut WorldCore, row: i32, go_right: bool) -> (u32, u32) {
    let cols = world.grid.cols() as i32;
    let mut processed = 0u32;
    let mut changed = 0u32;

    let mut visit = |world: &mut WorldCore, col: i32| {
        if let Some(did_change) = world.update_particle(row, col) {
            processed += 1;
            if did_change {
                changed += 1;
            }
        }
    };

    if go_right {
        for col in 0..cols {
            visit(world, col);
        }
    } else {
        for col in (0..cols).rev() {
            visit(world, col);
        }
    }

    (processed, changed)
}
