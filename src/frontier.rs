//! Priority frontier for best-first search.
//!
//! Entries are ordered by `(priority, sequence)`: lowest priority first, and
//! among equal priorities the entry pushed earliest. The sequence number is
//! assigned here on push, so ties never depend on heap internals.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::node::NodeId;

/// The ordering key of a frontier entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierKey {
    /// `path_cost + heuristic`.
    pub priority: u32,
    /// Push order within one search, starting at 0.
    pub sequence: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // sequences are unique, so the key alone is a total order
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue of node ids with FIFO tie-breaking.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a node with the given priority.
    pub fn push(&mut self, node: NodeId, priority: u32) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
    }

    /// Removes the entry with the lowest key.
    pub fn pop(&mut self) -> Option<(FrontierKey, NodeId)> {
        self.heap.pop().map(|entry| (entry.key.0, entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::node::{Node, NodeArena};

    fn ids(count: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        (0..count).map(|_| arena.alloc(Node::root(board))).collect()
    }

    #[test]
    fn test_pop_returns_lowest_priority_first() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 10);
        frontier.push(ids[1], 5);
        frontier.push(ids[2], 15);

        let (key, node) = frontier.pop().unwrap();
        assert_eq!(key.priority, 5);
        assert_eq!(node, ids[1]);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let ids = ids(5);
        let mut frontier = Frontier::new();
        for &id in &ids {
            frontier.push(id, 7);
        }

        let popped: Vec<NodeId> = std::iter::from_fn(|| frontier.pop().map(|(_, id)| id)).collect();
        assert_eq!(popped, ids, "equal priorities should be first-in first-out");
    }

    #[test]
    fn test_ties_stay_fifo_across_interleaved_pushes() {
        let ids = ids(4);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 3);
        frontier.push(ids[1], 1);
        frontier.push(ids[2], 3);
        assert_eq!(frontier.pop().map(|(_, id)| id), Some(ids[1]));

        frontier.push(ids[3], 3);
        let rest: Vec<NodeId> = std::iter::from_fn(|| frontier.pop().map(|(_, id)| id)).collect();
        assert_eq!(rest, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_key_orders_priority_before_sequence() {
        let early_but_costly = FrontierKey {
            priority: 2,
            sequence: 0,
        };
        let late_but_cheap = FrontierKey {
            priority: 1,
            sequence: 9,
        };
        assert!(late_but_cheap < early_but_costly);
    }
}
