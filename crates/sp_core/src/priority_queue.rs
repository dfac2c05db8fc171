use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::Distance;
use crate::graph::NodeIndex;

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the candidate with the lowest distance
/// is always at the top. Equal distances pop the lower node index first.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Candidate>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: Candidate) {
        self.heap.push(item);
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node_idx: NodeIndex,
    pub distance: Distance,
}

impl Candidate {
    pub fn new(node_idx: NodeIndex, distance: Distance) -> Self {
        Self { node_idx, distance }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the smallest element is at the top of the heap.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}
