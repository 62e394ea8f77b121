use crate::behaviors::UpdateContext;

use super::WorldCore;

pub(super) fn update_particle(world: &mut WorldCore, row: i32, col: i32) -> Option<bool> {
    let kind = world.grid.kind_at(row, col)?;
    let idx = world.grid.index(row, col);

    if world.grid.is_updated_idx(idx) {
        return None;
    }
    world.grid.updated[idx] = 1;

    let before = world.grid.kinds[idx];

    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        row,
        col,
        rng: &mut world.rng,
    };
    world.behaviors.update(kind, &mut ctx);

    // Moves only go into empty cells or swap unlike kinds, so a kind change
    // at this index covers moves, swaps, rain-out and grass formation.
    Some(world.grid.kinds[idx] != before)
}
