//! Indexed binary min-heap with decrease-key.
//!
//! Items are dense `usize` ids (graph node indices). A position map from
//! item to heap slot makes `contains` O(1) and lets `decrease_priority`
//! sift an already-queued item in O(log n).
//!
//! Equal priorities pop in insertion order, so searches that tie on
//! priority stay deterministic.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
struct Entry {
    item: usize,
    priority: f32,
    /// Insertion sequence number; breaks priority ties.
    order: u64,
}

impl Entry {
    fn precedes(&self, other: &Entry) -> bool {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.order < other.order,
        }
    }
}

/// Min-priority queue over dense item ids.
#[derive(Clone, Debug, Default)]
pub struct IndexedPriorityQueue {
    heap: Vec<Entry>,
    /// `positions[item]` is the item's heap slot while it is queued.
    positions: Vec<Option<usize>>,
    next_order: u64,
}

impl IndexedPriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the position map for items `0..items`.
    pub fn with_capacity(items: usize) -> Self {
        Self {
            heap: Vec::with_capacity(items),
            positions: vec![None; items],
            next_order: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.slot(item).is_some()
    }

    pub fn priority(&self, item: usize) -> Option<f32> {
        self.slot(item).map(|slot| self.heap[slot].priority)
    }

    /// Lowest-priority item without removing it.
    pub fn peek(&self) -> Option<(usize, f32)> {
        self.heap.first().map(|entry| (entry.item, entry.priority))
    }

    /// Inserts `item`. An item that is already queued only has its
    /// priority lowered (see [`Self::decrease_priority`]).
    pub fn push(&mut self, item: usize, priority: f32) {
        if self.contains(item) {
            self.decrease_priority(item, priority);
            return;
        }
        if item >= self.positions.len() {
            self.positions.resize(item + 1, None);
        }

        let slot = self.heap.len();
        self.heap.push(Entry {
            item,
            priority,
            order: self.next_order,
        });
        self.next_order += 1;
        self.positions[item] = Some(slot);
        self.sift_up(slot);
    }

    /// Removes and returns the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(usize, f32)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.item] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Lowers the priority of a queued item, keeping its insertion order.
    ///
    /// Returns `false` (and changes nothing) if the item is not queued or
    /// `priority` is not lower than its current one.
    pub fn decrease_priority(&mut self, item: usize, priority: f32) -> bool {
        let Some(slot) = self.slot(item) else {
            return false;
        };
        if priority.total_cmp(&self.heap[slot].priority) != Ordering::Less {
            return false;
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        true
    }

    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.item] = None;
        }
        self.next_order = 0;
    }

    #[inline]
    fn slot(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;
            if left < len && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].item] = Some(a);
        self.positions[self.heap[b].item] = Some(b);
    }
}
