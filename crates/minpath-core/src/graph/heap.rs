use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::frontier::{FrontierQueue, ReachableNode};
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeId};

/// Wrapper for BinaryHeap to use as min-heap (ordered by path cost, then
/// by push order so equal costs pop first-in first-out)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub cost: f64,
    pub seq: u64,
    pub entry: ReachableNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Lazy decrease-key frontier.
///
/// Every improvement pushes a fresh entry and records the cost right away;
/// superseded entries stay in the heap and are skipped on pop once their
/// node is finalized or their cost no longer matches. `len` counts nodes
/// still waiting to be popped, not raw heap entries.
#[derive(Debug, Clone, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pending: HashSet<NodeId>,
    next_seq: u64,
}

impl FrontierQueue for HeapFrontier {
    fn clear(&mut self) {
        self.heap.clear();
        self.pending.clear();
        self.next_seq = 0;
    }

    fn offer(&mut self, entry: ReachableNode, state: &mut SearchState) {
        let Some(via_cost) = state.cost(entry.via).value() else {
            return;
        };
        let candidate = via_cost + entry.weight;
        let record = state.node_mut(entry.node);
        if !record.total_cost.improved_by(candidate) {
            return;
        }
        record.total_cost = Cost::Reached(candidate);
        self.pending.insert(entry.node);
        self.heap.push(Reverse(HeapEntry {
            cost: candidate,
            seq: self.next_seq,
            entry,
        }));
        self.next_seq += 1;
    }

    fn relax(&mut self, _state: &mut SearchState) {}

    fn pop_cheapest(&mut self, state: &SearchState) -> Option<ReachableNode> {
        while let Some(Reverse(top)) = self.heap.pop() {
            let node = top.entry.node;
            if state.is_visited(node) {
                continue;
            }
            if state.cost(node) != Cost::Reached(top.cost) {
                continue;
            }
            self.pending.remove(&node);
            return Some(top.entry);
        }
        None
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{EdgeId, NodeId};

    fn entry(node: usize, edge: usize, weight: f64, via: usize) -> ReachableNode {
        ReachableNode {
            node: NodeId(node),
            edge: EdgeId(edge),
            weight,
            via: NodeId(via),
        }
    }

    /// Test HeapEntry comparison ordering
    #[test]
    fn test_heap_entry_ordering() {
        let cheap = HeapEntry {
            cost: 1.0,
            seq: 5,
            entry: entry(1, 0, 1.0, 0),
        };
        let dear = HeapEntry {
            cost: 2.0,
            seq: 0,
            entry: entry(2, 1, 2.0, 0),
        };
        let cheap_later = HeapEntry {
            cost: 1.0,
            seq: 9,
            entry: entry(3, 2, 1.0, 0),
        };

        assert_eq!(cheap.cmp(&dear), std::cmp::Ordering::Less);
        assert_eq!(cheap.cmp(&cheap_later), std::cmp::Ordering::Less);
        assert_eq!(cheap, cheap.clone());
        assert_ne!(cheap, dear);
    }

    #[test]
    fn test_pop_skips_stale_entries() {
        let mut state = SearchState::new(3, 3);
        state.node_mut(NodeId(0)).total_cost = Cost::Reached(0.0);
        state.node_mut(NodeId(2)).total_cost = Cost::Reached(1.0);
        let mut frontier = HeapFrontier::default();

        frontier.offer(entry(1, 0, 5.0, 0), &mut state);
        frontier.offer(entry(1, 1, 1.0, 2), &mut state);
        assert_eq!(frontier.len(), 1);
        assert_eq!(state.cost(NodeId(1)), Cost::Reached(2.0));

        let popped = frontier.pop_cheapest(&state).unwrap();
        assert_eq!(popped.edge, EdgeId(1));
        state.node_mut(NodeId(1)).visited = true;

        assert!(frontier.is_empty());
        assert!(frontier.pop_cheapest(&state).is_none());
    }

    #[test]
    fn test_len_ignores_superseded_entries() {
        let mut state = SearchState::new(4, 4);
        state.node_mut(NodeId(0)).total_cost = Cost::Reached(0.0);
        let mut frontier = HeapFrontier::default();

        frontier.offer(entry(1, 0, 4.0, 0), &mut state);
        frontier.offer(entry(1, 1, 3.0, 0), &mut state);
        frontier.offer(entry(2, 2, 5.0, 0), &mut state);
        assert_eq!(frontier.len(), 2);

        let first = frontier.pop_cheapest(&state).unwrap();
        assert_eq!(first.node, NodeId(1));
        state.node_mut(NodeId(1)).visited = true;
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());

        assert_eq!(frontier.pop_cheapest(&state).unwrap().node, NodeId(2));
        state.node_mut(NodeId(2)).visited = true;
        assert!(frontier.is_empty());
        assert!(frontier.pop_cheapest(&state).is_none());
    }

    #[test]
    fn test_offer_ignores_worse_path() {
        let mut state = SearchState::new(2, 2);
        state.node_mut(NodeId(0)).total_cost = Cost::Reached(0.0);
        let mut frontier = HeapFrontier::default();

        frontier.offer(entry(1, 0, 2.0, 0), &mut state);
        frontier.offer(entry(1, 1, 2.0, 0), &mut state);
        frontier.offer(entry(1, 1, 3.0, 0), &mut state);

        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_cheapest(&state).unwrap().edge, EdgeId(0));
    }

    #[test]
    fn test_clear() {
        let mut state = SearchState::new(2, 1);
        state.node_mut(NodeId(0)).total_cost = Cost::Reached(0.0);
        let mut frontier = HeapFrontier::default();
        frontier.offer(entry(1, 0, 2.0, 0), &mut state);
        frontier.clear();
        assert!(frontier.is_empty());
    }
}
