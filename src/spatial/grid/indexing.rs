use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    // Callers must have checked bounds first
    #[inline]
    pub fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(
            self.check_bounds(row, col),
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (i32, i32) {
        let row = idx / (self.cols as usize);
        let col = idx % (self.cols as usize);
        (row as i32, col as i32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn check_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    /// Empty and in bounds
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        if !self.check_bounds(row, col) { return false; }
        self.kinds[self.index(row, col)] == EL_EMPTY
    }
}
