use crate::constants::MAX_COLUMNS;

/// Set of occupied columns within the current overlap cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMask(u64);

impl ColumnMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest free column, or `None` when all 64 are taken.
    pub fn first_free(self) -> Option<usize> {
        let col = self.0.trailing_ones() as usize;
        (col < MAX_COLUMNS).then_some(col)
    }

    pub fn occupy(&mut self, col: usize) {
        self.0 |= 1u64 << col;
    }

    pub fn release(&mut self, col: usize) {
        self.0 &= !(1u64 << col);
    }

    #[cfg(test)]
    fn is_occupied(self, col: usize) -> bool {
        self.0 & (1u64 << col) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[cfg(test)]
    fn is_empty(self) -> bool {
        self.0 == 0
    }
}
