//! Sparse storage.

use crate::store::Store;
use std::collections::{btree_set, BTreeSet};

/// Sparse storage: an ordered set of the live cell indices.
///
/// Absence means dead. Membership, insertion and removal are O(log n) in
/// the population; iteration yields the live indices in ascending order
/// and costs nothing for the dead cells. The sortedness is maintained
/// incrementally by the backing [`BTreeSet`], never by re-sorting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    live: BTreeSet<usize>,
}

impl LiveSet {
    /// Creates an empty set: every cell dead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `index` is in the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.live.contains(&index)
    }

    /// Adds `index` to the set.
    ///
    /// Returns whether the index was newly inserted; inserting an index
    /// already present is a no-op, not an error.
    pub fn insert(&mut self, index: usize) -> bool {
        self.live.insert(index)
    }

    /// Removes `index` from the set.
    ///
    /// Returns whether the index was present; removing an absent index
    /// is a no-op, not an error.
    pub fn remove(&mut self, index: usize) -> bool {
        self.live.remove(&index)
    }

    /// An iterator over the live indices, in ascending order.
    ///
    /// The iterator is lazy and restartable: calling `iter` again starts
    /// over from the smallest index.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.live.iter())
    }

    /// The number of live indices.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Removes every index from the set.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

/// An ascending iterator over the live indices of a [`LiveSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a>(btree_set::Iter<'a, usize>);

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Store for LiveSet {
    const SPARSE: bool = true;

    fn with_capacity(_cells: usize) -> Self {
        Self::new()
    }

    #[inline]
    fn get(&self, index: usize) -> bool {
        self.contains(index)
    }

    #[inline]
    fn set(&mut self, index: usize, alive: bool) {
        if alive {
            self.insert(index);
        } else {
            self.remove(index);
        }
    }

    fn clear(&mut self) {
        self.live.clear();
    }

    fn population(&self) -> usize {
        self.len()
    }

    fn live_indices(&self) -> Vec<usize> {
        self.iter().collect()
    }
}
