//! Grid - Structure of Arrays (SoA) storage for the particle field
//!
//! Instead of: Vec<Option<Particle>>
//! We have:    kinds[], colors[], wet[], updated[]  (linear memory, JS can view kinds/colors directly)
//!
//! Coordinates are (row, col) with row 0 at the top. Everything outside the
//! grid reads as blocked: never empty, never a move target.

use crate::elements::{ElementId, EL_EMPTY};

// Background color in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
// RGB(10,10,10) with alpha=255 -> 0xFF0A0A0A in ABGR
pub(crate) const BG_COLOR: u32 = 0xFF0A0A0A;

mod indexing;
mod accessors;
mod moves;

pub use moves::SwapRule;

/// SoA Grid - all particle data in separate arrays
pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    pub kinds: Vec<ElementId>,   // Particle kind id (0 = empty)
    pub colors: Vec<u32>,        // ABGR packed color
    pub wet: Vec<u8>,            // 1 = wet dirt, always 0 for other kinds
    pub updated: Vec<u8>,        // 0 = not updated, 1 = updated this tick

    particle_count: u32,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = (rows as usize) * (cols as usize);

        Self {
            rows,
            cols,
            size,
            kinds: vec![EL_EMPTY; size],
            colors: vec![BG_COLOR; size],
            wet: vec![0; size],
            updated: vec![0; size],
            particle_count: 0,
        }
    }

    /// Occupied cells, kept in step with every write
    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    /// Recount occupancy from the kinds array
    pub fn count_particles(&self) -> u32 {
        self.kinds.iter().filter(|&&k| k != EL_EMPTY).count() as u32
    }
}
