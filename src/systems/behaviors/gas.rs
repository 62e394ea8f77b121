//! GasBehavior - clouds
//!
//! A cloud over dirt rains out: the dirt gets wet and the cloud is gone.
//! Otherwise it may rise one row and may drift sideways, each on its own
//! coin flip, only ever into empty cells.

use super::wetting::soak_dirt_below;
use super::{Behavior, UpdateContext};

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GasBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if soak_dirt_below(ctx) {
            return;
        }

        if ctx.rng.coin() && ctx.is_empty_at(-1, 0) {
            ctx.try_move(-1, 0, None);
        }

        if ctx.rng.coin() && ctx.is_empty_at(0, -1) {
            ctx.try_move(0, -1, None);
        } else if ctx.is_empty_at(0, 1) {
            ctx.try_move(0, 1, None);
        }
    }
}
