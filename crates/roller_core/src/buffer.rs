//! Max-heap priority buffer for rolls.

use std::collections::BinaryHeap;

use crate::roll::Roll;

/// A container that always exposes its maximum element for removal.
///
/// Thin wrapper over `std::collections::BinaryHeap`, kept as a named type so
/// the session code reads in terms of the domain. Push and pop are
/// O(log n); peek, length and emptiness checks are O(1).
///
/// Popping an empty buffer returns `None`; there are no panicking paths.
#[derive(Clone, Debug, Default)]
pub struct PriorityBuffer {
    heap: BinaryHeap<Roll>,
}

impl PriorityBuffer {
    /// Creates an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` rolls.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Inserts a roll.
    #[inline]
    pub fn push(&mut self, roll: Roll) {
        self.heap.push(roll);
    }

    /// Removes and returns the largest remaining roll.
    #[inline]
    pub fn pop_max(&mut self) -> Option<Roll> {
        self.heap.pop()
    }

    /// Returns the largest remaining roll without removing it.
    #[inline]
    pub fn peek_max(&self) -> Option<Roll> {
        self.heap.peek().copied()
    }

    /// Returns the number of buffered rolls.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no rolls are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Roll> for PriorityBuffer {
    fn extend<I: IntoIterator<Item = Roll>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}
