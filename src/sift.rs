//! Update propagation: restores heap order after the priority of a single
//! element changed, keeping the inverse permutation in step with every move.
//!
//! All functions rank elements through a by-original-index predicate
//! `ranks_above(a, b)`: "the value named by `a` belongs strictly nearer the
//! root than the value named by `b`". Ties never trigger a move.

use crate::slots::HeapSlots;

#[inline(always)]
fn parent_of(slot: usize) -> usize {
    (slot - 1) >> 1
}

#[inline(always)]
fn left_child_of(slot: usize) -> usize {
    (slot << 1) + 1
}

/// Re-establishes heap order at `slot` after the element stored there changed
/// in an unknown direction.
///
/// Tries sift-up first; sift-down runs only if the element did not move toward
/// the root. Exactly one direction does work for a single-element change, but
/// the mutation happened externally, so the caller cannot tell us which. O(log n).
pub(crate) fn restore(
    slots: &mut HeapSlots,
    slot: usize,
    ranks_above: &mut impl FnMut(usize, usize) -> bool,
) {
    debug_assert!(slot < slots.len());

    if !sift_up(slots, slot, ranks_above) {
        sift_down(slots, slot, ranks_above);
    }
}

/// Bottom-up heapify: sift-down from the last internal node to the root. O(n).
pub(crate) fn heapify(slots: &mut HeapSlots, ranks_above: &mut impl FnMut(usize, usize) -> bool) {
    for slot in (0..slots.len() / 2).rev() {
        sift_down(slots, slot, ranks_above);
    }
}

/// Moves the element at `slot` toward the root while it outranks its parent.
/// Returns whether it moved at all.
fn sift_up(
    slots: &mut HeapSlots,
    mut slot: usize,
    ranks_above: &mut impl FnMut(usize, usize) -> bool,
) -> bool {
    let id = slots.id_at(slot);
    let start = slot;

    while slot > 0 {
        let parent_slot = parent_of(slot);
        let parent = slots.id_at(parent_slot);

        if !ranks_above(id, parent) {
            break;
        }

        // Pull the parent down into the hole; `id` is written once at the end.
        slots.place(slot, parent);
        slot = parent_slot;
    }

    if slot == start {
        return false;
    }
    slots.place(slot, id);
    true
}

/// Moves the element at `slot` toward the leaves while the better-ranked of
/// its children outranks it.
fn sift_down(
    slots: &mut HeapSlots,
    mut slot: usize,
    ranks_above: &mut impl FnMut(usize, usize) -> bool,
) {
    let id = slots.id_at(slot);
    let start = slot;

    loop {
        let left = left_child_of(slot);
        if left >= slots.len() {
            break; // No children.
        }
        let right = left + 1;

        let mut best_slot = left;
        if right < slots.len() && ranks_above(slots.id_at(right), slots.id_at(left)) {
            best_slot = right;
        }

        let best = slots.id_at(best_slot);
        if !ranks_above(best, id) {
            break;
        }

        slots.place(slot, best);
        slot = best_slot;
    }

    if slot != start {
        slots.place(slot, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Max-on-top ranking over a value slice, by original index.
    fn max_rank(values: &[i32]) -> impl FnMut(usize, usize) -> bool + '_ {
        move |a, b| values[b] < values[a]
    }

    fn assert_heap_ordered(slots: &HeapSlots, values: &[i32]) {
        for slot in 1..slots.len() {
            let parent = values[slots.id_at(parent_of(slot))];
            let child = values[slots.id_at(slot)];
            assert!(
                parent >= child,
                "slot {slot} (value {child}) outranks its parent (value {parent})"
            );
        }
    }

    #[test]
    fn heapify_orders_slots_and_keeps_inverse_consistent() {
        let values = [3, 9, -4, 7, 7, 0, 12, -1, 5];
        let mut slots = HeapSlots::identity(values.len());

        heapify(&mut slots, &mut max_rank(&values));

        assert!(slots.is_consistent());
        assert_heap_ordered(&slots, &values);
        assert_eq!(slots.id_at(0), 6, "root must hold the maximum (value 12)");
    }

    #[test]
    fn restore_carries_raised_leaf_to_root() {
        let mut values = vec![3, 9, -4, 7, 7, 0, 12, -1, 5];
        let mut slots = HeapSlots::identity(values.len());
        heapify(&mut slots, &mut max_rank(&values));

        values[2] = 100;
        let slot = slots.slot_of(2);
        restore(&mut slots, slot, &mut max_rank(&values));

        assert!(slots.is_consistent());
        assert_heap_ordered(&slots, &values);
        assert_eq!(slots.id_at(0), 2);
    }

    #[test]
    fn restore_sinks_lowered_root() {
        let mut values = vec![3, 9, -4, 7, 7, 0, 12, -1, 5];
        let mut slots = HeapSlots::identity(values.len());
        heapify(&mut slots, &mut max_rank(&values));

        let root_id = slots.id_at(0);
        values[root_id] = -100;
        restore(&mut slots, 0, &mut max_rank(&values));

        assert!(slots.is_consistent());
        assert_heap_ordered(&slots, &values);
        assert_eq!(slots.id_at(0), 1, "new root must hold the maximum (value 9)");
    }

    #[test]
    fn ties_never_move_anything() {
        let values = [7; 6];
        let mut slots = HeapSlots::identity(values.len());
        heapify(&mut slots, &mut max_rank(&values));

        let before: Vec<usize> = (0..slots.len()).map(|s| slots.id_at(s)).collect();
        for slot in 0..slots.len() {
            restore(&mut slots, slot, &mut max_rank(&values));
        }
        let after: Vec<usize> = (0..slots.len()).map(|s| slots.id_at(s)).collect();

        assert_eq!(before, after, "equal priorities must not be reordered");
        assert!(slots.is_consistent());
    }

    #[test]
    fn singleton_restore_is_a_noop() {
        let values = [42];
        let mut slots = HeapSlots::identity(1);
        heapify(&mut slots, &mut max_rank(&values));
        restore(&mut slots, 0, &mut max_rank(&values));

        assert_eq!(slots.id_at(0), 0);
        assert!(slots.is_consistent());
    }
}
