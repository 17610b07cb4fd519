use std::marker::PhantomData;

use crate::sift;
use crate::slots::HeapSlots;

/// A priority queue over a fixed universe of externally-owned values.
///
/// The queue never copies or owns values. It is built over a slice of `n`
/// values and from then on refers to them only by *original index* (their
/// position in that slice). The caller mutates a value in place, then calls
/// [`handle_update`](Self::handle_update) with its index; the queue finds the
/// element through the inverse permutation and restores heap order in
/// O(log n). The value slice is re-borrowed on every call, so the current
/// value is always the one compared; the slice must keep its length for the
/// queue's lifetime (asserted per call).
///
/// `compare` is a strict weak order read as "less-than": the top of the queue
/// is the **maximum** under `compare`. For a min-queue, flip the arguments.
/// A comparator that is not a strict weak order leaves the ordering undefined
/// (not detected at runtime). Binary heaps are not stable: the relative order
/// reported for equal-priority elements is arbitrary.
///
/// The type is move-only by construction (no `Clone`), so two instances can
/// never alias one permutation; transfer ownership by moving the value.
pub struct OrderedPriorityQueue<T, C> {
    slots: HeapSlots,
    compare: C,
    values: PhantomData<fn(&T, &T) -> bool>,
}

impl<T, C: Fn(&T, &T) -> bool> OrderedPriorityQueue<T, C> {
    /// Builds the queue over `values`: identity permutation, then a bottom-up
    /// heapify pass. O(n). An empty slice yields a valid empty queue.
    pub fn new(values: &[T], compare: C) -> Self {
        let mut slots = HeapSlots::identity(values.len());
        sift::heapify(&mut slots, &mut ranks_above(values, &compare));
        debug_assert!(slots.is_consistent());

        OrderedPriorityQueue {
            slots,
            compare,
            values: PhantomData,
        }
    }

    /// Returns the original index of the highest-priority value. O(1).
    ///
    /// # Panics
    /// Panics if the queue is empty. See [`try_top_index`](Self::try_top_index).
    pub fn top_index(&self) -> usize {
        assert!(!self.slots.is_empty(), "top_index on an empty queue");
        self.slots.id_at(0)
    }

    /// Returns the original index of the highest-priority value, or `None` if
    /// the queue is empty.
    pub fn try_top_index(&self) -> Option<usize> {
        (!self.slots.is_empty()).then(|| self.slots.id_at(0))
    }

    /// Restores heap order after the caller mutated `values[index]` in place.
    /// O(log n).
    ///
    /// The direction of the change is unknown to the queue, so the element is
    /// first offered toward the root and, failing that, toward the leaves.
    ///
    /// # Panics
    /// Panics if `index` is out of range or if `values` no longer has the
    /// length the queue was built over.
    pub fn handle_update(&mut self, values: &[T], index: usize) {
        assert!(
            values.len() == self.slots.len(),
            "value slice length changed: queue was built over {} values, got {}",
            self.slots.len(),
            values.len()
        );
        assert!(
            index < self.slots.len(),
            "original index {index} out of range for a queue over {} values",
            self.slots.len()
        );

        let slot = self.slots.slot_of(index);
        sift::restore(&mut self.slots, slot, &mut ranks_above(values, &self.compare));
        debug_assert!(self.slots.is_consistent());
    }

    /// Discards the current permutation and rebuilds the queue over `values`,
    /// which may have a different length than the original slice. O(n).
    pub fn rebuild(&mut self, values: &[T]) {
        self.slots = HeapSlots::identity(values.len());
        sift::heapify(&mut self.slots, &mut ranks_above(values, &self.compare));
        debug_assert!(self.slots.is_consistent());
    }

    /// The number of values the queue was built over.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The indirect comparator: ranks original indices by the values they name,
/// best first. `a` outranks `b` when `b`'s value is less than `a`'s.
fn ranks_above<'a, T, C: Fn(&T, &T) -> bool>(
    values: &'a [T],
    compare: &'a C,
) -> impl FnMut(usize, usize) -> bool + 'a {
    move |a, b| compare(&values[b], &values[a])
}
