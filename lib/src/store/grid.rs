//! Dense storage.

use crate::store::Store;

/// Dense storage: one `bool` per cell.
///
/// O(1) read and write, O(area) iteration and memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
}

impl Store for Grid {
    const SPARSE: bool = false;

    fn with_capacity(cells: usize) -> Self {
        Self {
            cells: vec![false; cells],
        }
    }

    #[inline]
    fn get(&self, index: usize) -> bool {
        self.cells[index]
    }

    #[inline]
    fn set(&mut self, index: usize, alive: bool) {
        self.cells[index] = alive;
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn live_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &alive)| alive.then_some(index))
            .collect()
    }
}
