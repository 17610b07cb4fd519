//! An indexed, mutable-priority heap.
//!
//! [`OrderedPriorityQueue`] is a priority queue over a fixed universe of `n`
//! externally-owned values, each identified by its stable position in the
//! caller's slice (its *original index*). The caller mutates values in place
//! and tells the queue afterwards; the queue relocates the affected element in
//! O(log n) by tracking, next to the heap-order array, the inverse permutation
//! from original index to current heap slot.
//!
//! ```
//! use reheap::OrderedPriorityQueue;
//!
//! let mut values = vec![5, 3, 8, 1];
//! let mut queue = OrderedPriorityQueue::new(&values, |a, b| a < b);
//! assert_eq!(queue.top_index(), 2); // values[2] == 8
//!
//! values[2] = 0;
//! queue.handle_update(&values, 2);
//! assert_eq!(queue.top_index(), 0); // values[0] == 5
//! ```

mod queue;
mod sift;
mod slots;

pub use queue::OrderedPriorityQueue;
