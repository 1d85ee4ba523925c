//! Cell storage strategies.
//!
//! Both storages hold the same information, a boolean per cell keyed by
//! the linear index `y * width + x`, and are interchangeable behind the
//! [`Store`] trait. [`Grid`] keeps one `bool` per cell regardless of how
//! many are alive; [`LiveSet`] keeps an ordered set of the live indices,
//! so its memory and iteration cost are proportional to the population.

mod grid;
mod live_set;

pub use grid::Grid;
pub use live_set::{Iter, LiveSet};

/// A storage of cell states, addressed by linear index.
///
/// Indices are dense in `[0, cells)`; the store itself knows nothing
/// about board dimensions.
pub trait Store {
    /// Whether the generation scan should visit only the live cells and
    /// their neighbors, instead of the whole board.
    const SPARSE: bool;

    /// Creates a storage of `cells` cells, all dead.
    fn with_capacity(cells: usize) -> Self;

    /// Whether the cell at `index` is alive.
    fn get(&self, index: usize) -> bool;

    /// Sets the state of the cell at `index`.
    ///
    /// Idempotent: writing the state a cell already has is a no-op.
    fn set(&mut self, index: usize, alive: bool);

    /// Sets every cell to dead.
    fn clear(&mut self);

    /// The number of living cells.
    fn population(&self) -> usize;

    /// The indices of the living cells, in ascending order.
    fn live_indices(&self) -> Vec<usize>;
}
