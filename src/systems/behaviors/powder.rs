//! PowderBehavior - sand and dirt
//!
//! Sand falls straight down and sinks through water.
//! Dirt falls only into empty space; wet dirt turns into grass in place.

use super::{swap_allowed, Behavior, UpdateContext};
use crate::elements::ParticleKind;
use crate::grid::SwapRule;
use crate::particle::Particle;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    fn update_sand(&self, ctx: &mut UpdateContext) {
        ctx.try_move(1, 0, Some(swap_allowed));
    }

    fn update_dirt(&self, ctx: &mut UpdateContext) {
        let wet = ctx
            .grid
            .get_particle(ctx.row, ctx.col)
            .is_some_and(|p| p.is_wet());

        if wet {
            ctx.grid
                .set_particle(ctx.row, ctx.col, Some(Particle::new(ParticleKind::Grass)));
            return;
        }

        if ctx.is_empty_at(1, 0) {
            ctx.try_move(1, 0, None);
        }
    }
}

impl Default for PowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.kind() {
            Some(ParticleKind::Sand) => self.update_sand(ctx),
            Some(ParticleKind::Dirt) => self.update_dirt(ctx),
            _ => {}
        }
    }
}

/// Generic granular fall: straight down into empty space, otherwise
/// down-left, otherwise down-right. The diagonals may swap per `swap`.
///
/// No kind is wired to this rule today; it is the fallback for a kind
/// that has no rule of its own.
pub fn fall_and_slide(ctx: &mut UpdateContext, swap: Option<SwapRule>) -> bool {
    ctx.try_move(1, 0, None) || ctx.try_move(1, -1, swap) || ctx.try_move(1, 1, swap)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Scripted;
    use super::super::update;
    use super::*;
    use crate::grid::Grid;

    fn place(grid: &mut Grid, row: i32, col: i32, kind: ParticleKind) {
        grid.set_particle(row, col, Some(Particle::new(kind)));
    }

    #[test]
    fn sand_falls_one_row() {
        let mut grid = Grid::new(3, 1);
        place(&mut grid, 0, 0, ParticleKind::Sand);
        update(&mut grid, 0, 0, &mut Scripted::new(&[0]));
        assert!(grid.is_empty(0, 0));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Sand));
    }

    #[test]
    fn sand_sinks_through_water() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 0, 1, ParticleKind::Sand);
        place(&mut grid, 1, 1, ParticleKind::Water);
        place(&mut grid, 1, 0, ParticleKind::Stone);

        update(&mut grid, 0, 1, &mut Scripted::new(&[0]));

        assert_eq!(grid.kind_at(0, 1), Some(ParticleKind::Water));
        assert_eq!(grid.kind_at(1, 1), Some(ParticleKind::Sand));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Stone));
        assert_eq!(grid.particle_count(), 3);
    }

    #[test]
    fn sand_does_not_slide_diagonally() {
        let mut grid = Grid::new(2, 3);
        place(&mut grid, 0, 1, ParticleKind::Sand);
        place(&mut grid, 1, 1, ParticleKind::Stone);

        update(&mut grid, 0, 1, &mut Scripted::new(&[1]));

        assert_eq!(grid.kind_at(0, 1), Some(ParticleKind::Sand));
        assert!(grid.is_empty(1, 0));
        assert!(grid.is_empty(1, 2));
    }

    #[test]
    fn sand_rests_on_bottom_row() {
        let mut grid = Grid::new(2, 1);
        place(&mut grid, 1, 0, ParticleKind::Sand);
        update(&mut grid, 1, 0, &mut Scripted::new(&[0]));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Sand));
    }

    #[test]
    fn dry_dirt_falls_only_into_empty() {
        let mut grid = Grid::new(3, 1);
        place(&mut grid, 0, 0, ParticleKind::Dirt);
        place(&mut grid, 2, 0, ParticleKind::Water);

        update(&mut grid, 0, 0, &mut Scripted::new(&[0]));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Dirt));

        // Water below: no swap
        update(&mut grid, 1, 0, &mut Scripted::new(&[0]));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Dirt));
        assert_eq!(grid.kind_at(2, 0), Some(ParticleKind::Water));
    }

    #[test]
    fn wet_dirt_becomes_grass_in_place() {
        let mut grid = Grid::new(2, 1);
        grid.set_particle(0, 0, Some(Particle::new(ParticleKind::Dirt).with_wet(true)));

        update(&mut grid, 0, 0, &mut Scripted::new(&[0]));

        let p = grid.get_particle(0, 0).expect("grass");
        assert_eq!(p.kind, ParticleKind::Grass);
        assert!(!p.is_wet());
        assert!(grid.is_empty(1, 0));
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn fall_and_slide_prefers_down_then_left_then_right() {
        let mut grid = Grid::new(2, 3);
        place(&mut grid, 0, 1, ParticleKind::Stone);
        place(&mut grid, 1, 1, ParticleKind::Stone);
        let mut rng = Scripted::new(&[0]);

        let mut ctx = UpdateContext { grid: &mut grid, row: 0, col: 1, rng: &mut rng };
        assert!(fall_and_slide(&mut ctx, None));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Stone));

        // Left is now taken; next one goes right
        place(&mut grid, 0, 1, ParticleKind::Stone);
        let mut ctx = UpdateContext { grid: &mut grid, row: 0, col: 1, rng: &mut rng };
        assert!(fall_and_slide(&mut ctx, None));
        assert_eq!(grid.kind_at(1, 2), Some(ParticleKind::Stone));

        // Fully blocked
        place(&mut grid, 0, 1, ParticleKind::Stone);
        let mut ctx = UpdateContext { grid: &mut grid, row: 0, col: 1, rng: &mut rng };
        assert!(!fall_and_slide(&mut ctx, None));
    }

    #[test]
    fn fall_and_slide_swaps_only_on_diagonals() {
        let mut grid = Grid::new(2, 3);
        place(&mut grid, 0, 1, ParticleKind::Sand);
        place(&mut grid, 1, 0, ParticleKind::Water);
        place(&mut grid, 1, 1, ParticleKind::Water);
        place(&mut grid, 1, 2, ParticleKind::Water);
        let mut rng = Scripted::new(&[0]);

        let mut ctx = UpdateContext { grid: &mut grid, row: 0, col: 1, rng: &mut rng };
        assert!(fall_and_slide(&mut ctx, Some(swap_allowed)));

        // Straight down is never a swap, so sand took the down-left water's place
        assert_eq!(grid.kind_at(1, 1), Some(ParticleKind::Water));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Sand));
        assert_eq!(grid.kind_at(0, 1), Some(ParticleKind::Water));
    }
}
