//! Open set: an indexed binary min-heap keyed by stack value.
//!
//! `BinaryHeap` has no way to find or re-key an arbitrary entry, so the heap
//! is kept by hand in a `Vec` alongside a `HashMap` from plate order to heap
//! slot. Every swap updates both sides. `contains` is O(1);
//! `insert`, `extract_best` and `replace_if_better` are O(log n).

use std::collections::HashMap;

use crate::error::OpenSetError;
use crate::node::{FrontierKey, SearchNode};

/// Outcome of [`OpenSet::replace_if_better`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// The resident node was replaced by the candidate.
    Replaced,
    /// The resident node's total cost was not worse; the candidate was dropped.
    Kept,
    /// No resident node has the candidate's state.
    Absent,
}

#[derive(Debug)]
struct HeapEntry {
    key: FrontierKey,
    node: SearchNode,
}

/// Priority structure over unexpanded nodes.
///
/// Invariants:
/// - `heap[i].key <= heap[2i+1].key` and `heap[i].key <= heap[2i+2].key`
/// - `slots[heap[i].node.stack.plates()] == i` for every `i`
/// - at most one resident node per stack value
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: Vec<HeapEntry>,
    slots: HashMap<Box<[u32]>, usize>,
    high_water: usize,
}

impl OpenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the set has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Key of the node [`extract_best`](Self::extract_best) would return.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.first().map(|e| e.key)
    }

    /// True iff a resident node has exactly these plates.
    #[must_use]
    pub fn contains(&self, plates: &[u32]) -> bool {
        self.slots.contains_key(plates)
    }

    /// Add a node whose state is not yet resident.
    ///
    /// # Errors
    ///
    /// Returns [`OpenSetError::DuplicateState`] if a node with the same
    /// stack is already resident; use [`replace_if_better`](Self::replace_if_better).
    pub fn insert(&mut self, node: SearchNode) -> Result<(), OpenSetError> {
        if self.contains(node.stack.plates()) {
            return Err(OpenSetError::DuplicateState);
        }
        let slot = self.heap.len();
        self.slots.insert(node.stack.plates().into(), slot);
        self.heap.push(HeapEntry {
            key: node.key(),
            node,
        });
        self.sift_up(slot);
        self.high_water = self.high_water.max(self.heap.len());
        Ok(())
    }

    /// Remove and return the node with the smallest [`FrontierKey`].
    ///
    /// # Errors
    ///
    /// Returns [`OpenSetError::Empty`] if there is nothing to extract.
    pub fn extract_best(&mut self) -> Result<SearchNode, OpenSetError> {
        if self.heap.is_empty() {
            return Err(OpenSetError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(best) = self.heap.pop() else {
            return Err(OpenSetError::Empty);
        };
        self.slots.remove(best.node.stack.plates());
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(best.node)
    }

    /// Replace the resident node with the same state if `candidate` is cheaper.
    ///
    /// "Cheaper" means strictly lower `f_cost`; on a tie the resident node
    /// stays. After a replacement the heap is re-ordered from the affected slot.
    pub fn replace_if_better(&mut self, candidate: SearchNode) -> Replacement {
        let Some(&slot) = self.slots.get(candidate.stack.plates()) else {
            return Replacement::Absent;
        };
        if self.heap[slot].node.f_cost() <= candidate.f_cost() {
            return Replacement::Kept;
        }
        self.heap[slot] = HeapEntry {
            key: candidate.key(),
            node: candidate,
        };
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        Replacement::Replaced
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for slot in [a, b] {
            if let Some(entry) = self.slots.get_mut(self.heap[slot].node.stack.plates()) {
                *entry = slot;
            }
        }
    }

    /// Move the entry at `slot` towards the root; returns its final slot.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].key >= self.heap[parent].key {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < len && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }
            if smallest == slot {
                return;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        for i in 1..self.heap.len() {
            let parent = (i - 1) / 2;
            assert!(
                self.heap[parent].key <= self.heap[i].key,
                "heap order violated at slot {i}"
            );
        }
        assert_eq!(self.slots.len(), self.heap.len());
        for (i, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.slots.get(entry.node.stack.plates()), Some(&i));
        }
    }
}
