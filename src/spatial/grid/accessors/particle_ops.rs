use super::super::*;

use crate::elements::{ParticleKind, EL_DIRT};
use crate::particle::Particle;

impl Grid {
    // === Read a cell as a particle value ===
    // None for empty cells and anything out of bounds
    pub fn get_particle(&self, row: i32, col: i32) -> Option<Particle> {
        if !self.check_bounds(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        let kind = ParticleKind::from_id(self.kinds[idx])?;
        Some(
            Particle::new(kind)
                .with_color(self.colors[idx])
                .with_wet(self.wet[idx] != 0),
        )
    }

    /// Kind at a cell without building a `Particle`
    #[inline]
    pub fn kind_at(&self, row: i32, col: i32) -> Option<ParticleKind> {
        if !self.check_bounds(row, col) {
            return None;
        }
        ParticleKind::from_id(self.kinds[self.index(row, col)])
    }

    // === Overwrite a cell ===
    // New particles are NOT marked updated. Out-of-bounds writes are dropped.
    pub fn set_particle(&mut self, row: i32, col: i32, particle: Option<Particle>) {
        if !self.check_bounds(row, col) {
            return;
        }
        let idx = self.index(row, col);
        let was_occupied = self.kinds[idx] != EL_EMPTY;

        match particle {
            Some(p) => {
                self.kinds[idx] = p.kind.id();
                self.colors[idx] = p.color;
                self.wet[idx] = if p.is_wet() { 1 } else { 0 };
                if !was_occupied {
                    self.particle_count += 1;
                }
            }
            None => {
                self.kinds[idx] = EL_EMPTY;
                self.colors[idx] = BG_COLOR;
                self.wet[idx] = 0;
                if was_occupied {
                    self.particle_count -= 1;
                }
            }
        }
        self.updated[idx] = 0;
    }

    /// Mark the dirt at (row, col) as wet. False if the cell is not dirt.
    pub fn set_wet(&mut self, row: i32, col: i32) -> bool {
        if !self.check_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        if self.kinds[idx] != EL_DIRT {
            return false;
        }
        self.wet[idx] = 1;
        true
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.kinds.fill(EL_EMPTY);
        self.colors.fill(BG_COLOR);
        self.wet.fill(0);
        self.updated.fill(0);
        self.particle_count = 0;
    }
}
