//! LiquidBehavior - water
//!
//! Water soaks into dirt directly below it. Otherwise it may drop one row
//! and then drift sideways, each on a coin flip, and only ever into empty
//! cells. The sideways attempt is made from the cell the update started
//! in, so after a drop it finds that cell vacated and does nothing.

use super::wetting::soak_dirt_below;
use super::{swap_allowed, Behavior, UpdateContext};

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiquidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if soak_dirt_below(ctx) {
            return;
        }

        if ctx.rng.coin() && ctx.is_empty_at(1, 0) {
            ctx.try_move(1, 0, Some(swap_allowed));
        }

        if ctx.rng.coin() && ctx.is_empty_at(0, 1) {
            ctx.try_move(0, 1, Some(swap_allowed));
        } else if ctx.is_empty_at(0, -1) {
            ctx.try_move(0, -1, Some(swap_allowed));
        }
    }
}
