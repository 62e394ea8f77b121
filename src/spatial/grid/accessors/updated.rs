use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Updated flag ===
    // Out-of-bounds cells are never updated and ignore writes
    #[inline]
    pub fn is_updated(&self, row: i32, col: i32) -> bool {
        self.check_bounds(row, col) && self.updated[self.index(row, col)] == 1
    }

    #[inline]
    pub fn is_updated_idx(&self, idx: usize) -> bool {
        self.updated[idx] == 1
    }

    #[inline]
    pub fn set_updated(&mut self, row: i32, col: i32, u: bool) {
        if !self.check_bounds(row, col) {
            return;
        }
        let idx = self.index(row, col);
        self.updated[idx] = if u { 1 } else { 0 };
    }

    /// Reset updated flags for all cells
    /// Parallel fill with Rayon when the feature is enabled
    #[inline]
    pub fn reset_updated(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.updated.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.updated.fill(0);
        }
    }
}
