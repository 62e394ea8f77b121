//! Shared rain-out step for water and clouds

use super::UpdateContext;
use crate::elements::ParticleKind;

/// If dirt sits directly below, wet it and remove self.
/// Returns true when the particle was consumed.
pub(super) fn soak_dirt_below(ctx: &mut UpdateContext) -> bool {
    if ctx.grid.kind_at(ctx.row + 1, ctx.col) != Some(ParticleKind::Dirt) {
        return false;
    }
    ctx.grid.set_wet(ctx.row + 1, ctx.col);
    ctx.grid.set_particle(ctx.row, ctx.col, None);
    true
}
