//! Best-first frontier with deterministic tie-breaking.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::puzzle::NodeId;

/// Heap key: priority first, then insertion sequence.
///
/// The sequence number makes the order total and pins the tie rule:
/// among equal priorities the earliest-pushed entry pops first, so runs
/// are reproducible across platforms and hash seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenKey {
    priority: u32,
    seq: u64,
}

#[derive(Debug)]
struct OpenEntry {
    key: OpenKey,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-ordered open list over arena node ids.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in [`Reverse`] to
/// pop the smallest key first.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<Reverse<OpenEntry>>,
    next_seq: u64,
    high_water: usize,
}

impl OpenList {
    pub fn new() -> Self {
        OpenList {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Pushes `node`, stamping the insertion sequence number that breaks
    /// priority ties first-in-first-out.
    pub fn push(&mut self, priority: u32, node: NodeId) {
        let key = OpenKey {
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(OpenEntry { key, node }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pops the lowest-priority entry.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
