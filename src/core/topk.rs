// --- File: src/core/topk.rs
use crate::core::types::Suggestion;
use std::collections::BinaryHeap;

/// Bounded best-K selection over a stream of candidate suggestions.
///
/// Holds at most `capacity` candidates. Because [`Suggestion`]s order by rank
/// (`a < b` means a outranks b), the heap maximum is always the worst held
/// candidate, ready to be displaced. After any sequence of offers the
/// selector holds the best `min(capacity, seen)` candidates: nothing gets
/// discarded that outranks a survivor.
pub struct TopK {
    capacity: usize,
    heap: BinaryHeap<Suggestion>,
}

impl TopK {
    /// A selector that will retain at most `capacity` suggestions. Zero is
    /// legal and accepts nothing.
    pub fn new(capacity: usize) -> Self {
        Self { capacity, heap: BinaryHeap::with_capacity(capacity) }
    }

    /// Considers one candidate. Below capacity it is always kept; at capacity
    /// it replaces the worst survivor only when it strictly outranks it, so
    /// on a rank tie the incumbent stays. O(log capacity).
    pub fn offer(&mut self, candidate: Suggestion) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
            return;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the selector and returns its survivors in display order.
    /// Sorts at most `capacity` elements.
    pub fn into_ranked(self) -> Vec<Suggestion> {
        let capacity = self.capacity;
        rank(self.heap.into_vec(), capacity)
    }
}

/// Final display order for a candidate set: frequency descending, rank ties
/// broken by word ascending, truncated to at most `limit` entries. Works on
/// the full candidate set just as well as on an already-bounded one.
pub fn rank(mut candidates: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    candidates.sort_unstable();
    candidates.truncate(limit);
    candidates
}
