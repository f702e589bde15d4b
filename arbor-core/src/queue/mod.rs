//! Indexed binary min-heap keyed by dense values.
//!
//! The heap stores `(value, priority)` entries and a position index from
//! value to heap slot, which gives constant-time membership tests and a true
//! in-place decrease-key. Entries with equal priority leave the heap in the
//! order they were pushed.

use std::cmp::Ordering;

use crate::error::QueueError;

#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    value: usize,
    priority: f64,
    sequence: u64,
}

impl HeapEntry {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue over `usize` values with decrease-key support.
///
/// # Examples
/// ```
/// use arbor_core::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::with_capacity(4);
/// heap.push(2, 5.0)?;
/// heap.push(3, 1.0)?;
/// heap.decrease_priority(2, 0.5)?;
/// assert_eq!(heap.peek_min()?, 2);
/// assert_eq!(heap.pop_min()?, 2);
/// assert_eq!(heap.pop_min()?, 3);
/// assert!(heap.is_empty());
/// # Ok::<(), arbor_core::QueueError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    /// `positions[value]` is the slot of `value` in `entries`, if queued.
    positions: Vec<Option<usize>>,
    next_sequence: u64,
}

impl IndexedMinHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap sized for values in `[0, capacity)`.
    ///
    /// Larger values are still accepted; the position index grows on demand
    /// and reports [`QueueError::CapacityExceeded`] if it cannot.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            next_sequence: 0,
        }
    }

    /// Returns the number of queued values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `value` is queued.
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.slot_of(value).is_some()
    }

    /// Returns the priority currently stored for `value`.
    #[must_use]
    pub fn priority(&self, value: usize) -> Option<f64> {
        self.slot_of(value)
            .and_then(|slot| self.entries.get(slot))
            .map(|entry| entry.priority)
    }

    /// Queues `value` with `priority`.
    ///
    /// # Errors
    /// - [`QueueError::DuplicateKey`] when `value` is already queued.
    /// - [`QueueError::CapacityExceeded`] when the position index cannot grow
    ///   to cover `value`.
    pub fn push(&mut self, value: usize, priority: f64) -> Result<(), QueueError> {
        if self.contains(value) {
            return Err(QueueError::DuplicateKey { value });
        }
        self.reserve_position(value)?;

        let slot = self.entries.len();
        self.entries.push(HeapEntry {
            value,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.positions[value] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the value with the smallest priority without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when nothing is queued.
    pub fn peek_min(&self) -> Result<usize, QueueError> {
        self.entries
            .first()
            .map(|entry| entry.value)
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the value with the smallest priority.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when nothing is queued.
    pub fn pop_min(&mut self) -> Result<usize, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        let last = self.entries.len() - 1;
        self.swap_slots(0, last);
        let entry = self.entries.pop().ok_or(QueueError::Empty)?;
        self.positions[entry.value] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.value)
    }

    /// Lowers the priority of a queued value and restores heap order.
    ///
    /// Passing the current priority is accepted and changes nothing.
    ///
    /// # Errors
    /// - [`QueueError::NotFound`] when `value` is not queued.
    /// - [`QueueError::PriorityIncrease`] when `priority` is greater than the
    ///   stored priority.
    pub fn decrease_priority(&mut self, value: usize, priority: f64) -> Result<(), QueueError> {
        let slot = self.slot_of(value).ok_or(QueueError::NotFound { value })?;
        let current = self.entries[slot].priority;
        if priority.total_cmp(&current) == Ordering::Greater {
            return Err(QueueError::PriorityIncrease {
                value,
                current,
                requested: priority,
            });
        }
        self.entries[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes every entry, keeping allocated capacity.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.positions[entry.value] = None;
        }
    }

    /// Grows the position index so that `positions[value]` exists.
    fn reserve_position(&mut self, value: usize) -> Result<(), QueueError> {
        let needed = value
            .checked_add(1)
            .ok_or(QueueError::CapacityExceeded { value })?;
        let Some(extra) = needed.checked_sub(self.positions.len()) else {
            return Ok(());
        };
        self.positions
            .try_reserve_exact(extra)
            .map_err(|_| QueueError::CapacityExceeded { value })?;
        self.positions.resize(needed, None);
        Ok(())
    }

    fn slot_of(&self, value: usize) -> Option<usize> {
        self.positions.get(value).copied().flatten()
    }

    fn less(&self, left: usize, right: usize) -> bool {
        self.entries[left].cmp_key(&self.entries[right]) == Ordering::Less
    }

    fn swap_slots(&mut self, left: usize, right: usize) {
        self.entries.swap(left, right);
        self.positions[self.entries[left].value] = Some(left);
        self.positions[self.entries[right].value] = Some(right);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }

    /// Checks the heap-order and position-index invariants.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len()).all(|slot| !self.less(slot, (slot - 1) / 2));
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, entry)| self.slot_of(entry.value) == Some(slot));
        let queued = self.positions.iter().flatten().count() == self.entries.len();
        ordered && indexed && queued
    }
}
