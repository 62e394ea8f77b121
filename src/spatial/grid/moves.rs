use super::*;

use crate::elements::ParticleKind;

/// Decides whether a moving particle may trade places with the occupant of
/// its destination: `(moving, occupant) -> allowed`
pub type SwapRule = fn(ParticleKind, ParticleKind) -> bool;

impl Grid {
    /// Move the particle at `from` to `to`.
    ///
    /// - destination out of bounds: no-op, `false`
    /// - source empty or out of bounds: no-op, `false`
    /// - destination empty: the particle moves, `true`
    /// - destination occupied: the two particles swap if `swap` allows it
    ///   for (mover, occupant), `true`; otherwise `false`
    ///
    /// Ownership of a cell is only ever transferred, never duplicated.
    pub fn move_particle(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        swap: Option<SwapRule>,
    ) -> bool {
        if !self.check_bounds(to_row, to_col) || !self.check_bounds(from_row, from_col) {
            return false;
        }

        let from = self.index(from_row, from_col);
        let to = self.index(to_row, to_col);
        if from == to {
            return false;
        }

        let Some(mover) = ParticleKind::from_id(self.kinds[from]) else {
            return false;
        };

        match ParticleKind::from_id(self.kinds[to]) {
            None => {
                self.swap_idx(from, to);
                true
            }
            Some(occupant) => match swap {
                Some(rule) if rule(mover, occupant) => {
                    self.swap_idx(from, to);
                    true
                }
                _ => false,
            },
        }
    }

    /// Exchange all per-cell data between two cells
    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.kinds.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.wet.swap(idx1, idx2);
        self.updated.swap(idx1, idx2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn always(_: ParticleKind, _: ParticleKind) -> bool {
        true
    }

    fn place(grid: &mut Grid, row: i32, col: i32, kind: ParticleKind) {
        grid.set_particle(row, col, Some(Particle::new(kind)));
    }

    #[test]
    fn moves_into_empty_cell() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 0, 1, ParticleKind::Sand);

        assert!(grid.move_particle(0, 1, 1, 1, None));
        assert!(grid.get_particle(0, 1).is_none());
        assert_eq!(grid.kind_at(1, 1), Some(ParticleKind::Sand));
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn out_of_bounds_destination_changes_nothing() {
        let mut grid = Grid::new(2, 2);
        place(&mut grid, 1, 0, ParticleKind::Sand);
        let before = grid.kinds.clone();

        assert!(!grid.move_particle(1, 0, 2, 0, Some(always)));
        assert!(!grid.move_particle(1, 0, 1, -1, Some(always)));
        assert_eq!(grid.kinds, before);
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut grid = Grid::new(2, 2);
        place(&mut grid, 1, 1, ParticleKind::Stone);

        assert!(!grid.move_particle(0, 0, 1, 0, None));
        assert!(!grid.move_particle(0, 1, 1, 1, Some(always)));
        assert_eq!(grid.kind_at(1, 1), Some(ParticleKind::Stone));
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn occupied_destination_blocks_without_rule() {
        let mut grid = Grid::new(2, 1);
        place(&mut grid, 0, 0, ParticleKind::Sand);
        place(&mut grid, 1, 0, ParticleKind::Water);

        assert!(!grid.move_particle(0, 0, 1, 0, None));
        assert_eq!(grid.kind_at(0, 0), Some(ParticleKind::Sand));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Water));
    }

    #[test]
    fn rule_receives_mover_then_occupant() {
        fn sand_over_water(m: ParticleKind, o: ParticleKind) -> bool {
            m == ParticleKind::Sand && o == ParticleKind::Water
        }
        let mut grid = Grid::new(2, 1);
        place(&mut grid, 0, 0, ParticleKind::Water);
        place(&mut grid, 1, 0, ParticleKind::Sand);

        // Water moving onto sand: rule says no
        assert!(!grid.move_particle(0, 0, 1, 0, Some(sand_over_water)));
        // Sand moving onto water: allowed, positions exchange
        assert!(grid.move_particle(1, 0, 0, 0, Some(sand_over_water)));
        assert_eq!(grid.kind_at(0, 0), Some(ParticleKind::Sand));
        assert_eq!(grid.kind_at(1, 0), Some(ParticleKind::Water));
        assert_eq!(grid.particle_count(), 2);
    }

    #[test]
    fn wet_and_updated_travel_with_the_particle() {
        let mut grid = Grid::new(2, 1);
        grid.set_particle(0, 0, Some(Particle::new(ParticleKind::Dirt).with_wet(true)));
        grid.set_updated(0, 0, true);

        assert!(grid.move_particle(0, 0, 1, 0, None));
        assert!(grid.get_particle(1, 0).unwrap().is_wet());
        assert!(grid.is_updated(1, 0));
        assert!(!grid.is_updated(0, 0));
        assert_eq!(grid.wet[0], 0);
    }
}
