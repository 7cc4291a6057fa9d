//! Minimum-oriented priority queue backing the search frontier.
//!
//! `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
//! least element first. There is no decrease-key: the search loop inserts
//! duplicates and discards stale ones on pop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::SearchError;

/// Binary-heap minimum priority queue over any totally ordered entry type.
///
/// Ties between equal entries are broken arbitrarily.
#[derive(Debug, Clone)]
pub struct PriorityQueue<E: Ord> {
    heap: BinaryHeap<Reverse<E>>,
    high_water: usize,
}

impl<E: Ord> PriorityQueue<E> {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Insert an entry. O(log n).
    pub fn add(&mut self, entry: E) {
        self.heap.push(Reverse(entry));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the least entry.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQueue`] if the queue has no elements.
    pub fn remove_min(&mut self) -> Result<E, SearchError> {
        self.heap
            .pop()
            .map(|Reverse(e)| e)
            .ok_or(SearchError::EmptyQueue)
    }

    /// The least entry, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQueue`] if the queue has no elements.
    pub fn peek_min(&self) -> Result<&E, SearchError> {
        self.heap
            .peek()
            .map(|Reverse(e)| e)
            .ok_or(SearchError::EmptyQueue)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the queue ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<E: Ord> Default for PriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
