/// The heap-order array together with its inverse permutation.
///
/// `heap[slot]` is the original index occupying `slot` (slot 0 is the root);
/// `slot_of[id]` is the slot currently holding original index `id`. Every
/// relocation goes through [`HeapSlots::place`], which writes both arrays in
/// lock-step, so they can never disagree.
#[derive(Debug)]
pub(crate) struct HeapSlots {
    /// Heap slot -> original index.
    heap: Vec<usize>,
    /// Original index -> heap slot.
    slot_of: Vec<usize>,
}

impl HeapSlots {
    /// Both arrays filled with the identity permutation `[0, 1, .., len)`.
    pub fn identity(len: usize) -> Self {
        HeapSlots {
            heap: (0..len).collect(),
            slot_of: (0..len).collect(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the original index occupying `slot`.
    #[inline(always)]
    pub fn id_at(&self, slot: usize) -> usize {
        self.heap[slot]
    }

    /// Returns the heap slot currently holding original index `id`.
    #[inline(always)]
    pub fn slot_of(&self, id: usize) -> usize {
        self.slot_of[id]
    }

    /// Puts `id` into `slot`, updating the inverse permutation in lock-step.
    #[inline(always)]
    pub fn place(&mut self, slot: usize, id: usize) {
        debug_assert!(slot < self.heap.len());
        debug_assert!(id < self.slot_of.len());
        self.heap[slot] = id;
        self.slot_of[id] = slot;
    }

    /// Checks `slot_of[heap[slot]] == slot` for every slot.
    pub fn is_consistent(&self) -> bool {
        self.heap.len() == self.slot_of.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, &id)| self.slot_of[id] == slot)
    }
}
