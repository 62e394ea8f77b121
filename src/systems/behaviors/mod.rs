//! Behaviors - per-kind update rules
//!
//! One behavior per family of particles; the registry maps a kind to its
//! rule with a plain `match`, so adding a kind without a rule is a compile
//! error rather than a silent fallthrough.
//!
//! Every rule works only through the grid primitives (`move_particle`,
//! `get_particle`/`set_particle`, `set_wet`) and draws all randomness from
//! the context's `RandomSource`.

mod powder;
mod liquid;
mod gas;
mod wetting;

pub use powder::{fall_and_slide, PowderBehavior};
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;

use crate::core::random::RandomSource;
use crate::elements::ParticleKind;
use crate::grid::Grid;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub row: i32,
    pub col: i32,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn kind(&self) -> Option<ParticleKind> {
        self.grid.kind_at(self.row, self.col)
    }

    /// Move self by (d_row, d_col)
    #[inline]
    pub fn try_move(&mut self, d_row: i32, d_col: i32, swap: Option<crate::grid::SwapRule>) -> bool {
        self.grid
            .move_particle(self.row, self.col, self.row + d_row, self.col + d_col, swap)
    }

    #[inline]
    pub fn is_empty_at(&self, d_row: i32, d_col: i32) -> bool {
        self.grid.is_empty(self.row + d_row, self.col + d_col)
    }
}

/// Behavior trait - each particle family implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// May `moving` trade places with `occupant`?
///
/// Sand sinks through water; everything else is rigid.
#[inline]
pub fn swap_allowed(moving: ParticleKind, occupant: ParticleKind) -> bool {
    matches!((moving, occupant), (ParticleKind::Sand, ParticleKind::Water))
}

/// Behavior registry - dispatch by kind
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to the rule for `kind`
    pub fn update(&self, kind: ParticleKind, ctx: &mut UpdateContext) {
        match kind {
            ParticleKind::Sand | ParticleKind::Dirt => self.powder.update(ctx),
            ParticleKind::Water => self.liquid.update(ctx),
            ParticleKind::Cloud => self.gas.update(ctx),
            // Inert: stone never moves, grass is terminal
            ParticleKind::Stone | ParticleKind::Grass => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the rule for whatever occupies (row, col). Empty cells are a no-op.
pub fn update(grid: &mut Grid, row: i32, col: i32, rng: &mut dyn RandomSource) {
    let Some(kind) = grid.kind_at(row, col) else {
        return;
    };
    let mut ctx = UpdateContext { grid, row, col, rng };
    BehaviorRegistry::new().update(kind, &mut ctx);
}
