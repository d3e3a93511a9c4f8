use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Coordinate;

/// Candidate cell waiting to be expanded at a known tentative cost.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrontierEntry {
    pub coordinate: Coordinate,
    pub cost: u64,
}

impl FrontierEntry {
    pub fn new(coordinate: Coordinate, cost: u64) -> Self {
        Self { coordinate, cost }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.coordinate.cmp(&self.coordinate))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of frontier entries.
///
/// There is no decrease-key: a cheaper route to a cell is pushed as a new
/// entry and the older, more expensive one stays behind. Consumers must
/// compare popped costs against their own distance table and skip stale pops.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, coordinate: Coordinate, cost: u64) {
        self.heap.push(FrontierEntry::new(coordinate, cost));
    }

    /// Remove and return the lowest-cost entry.
    pub fn extract_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
