//! The search frontier: nodes adjacent to the explored set
//!
//! [`ReachableNodeList`] keeps at most one [`ReachableNode`] per node,
//! indexed by node id for O(1) membership, and is re-ranked by tentative
//! cost with an explicit [`ReachableNodeList::sort_by_cost`]. The engine
//! talks to it through the [`FrontierQueue`] trait so the heap-backed
//! [`crate::graph::heap::HeapFrontier`] can stand in for it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::heap::HeapFrontier;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, EdgeId, NodeId};

/// A not-yet-finalized node with the cheapest edge known to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachableNode {
    pub node: NodeId,
    pub edge: EdgeId,
    /// Weight of `edge`
    pub weight: f64,
    /// Explored endpoint of `edge`
    pub via: NodeId,
}

#[derive(Debug, Clone, Default)]
pub struct ReachableNodeList {
    entries: Vec<ReachableNode>,
    index: HashMap<NodeId, usize>,
}

impl ReachableNodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, or tighten the existing entry for the same node when
    /// the offered edge is strictly lighter. Equal or heavier offers are
    /// ignored. Returns true when the frontier changed.
    pub fn add(&mut self, entry: ReachableNode) -> bool {
        match self.index.get(&entry.node) {
            Some(&pos) => {
                if entry.weight < self.entries[pos].weight {
                    self.entries[pos] = entry;
                    true
                } else {
                    false
                }
            }
            None => {
                self.index.insert(entry.node, self.entries.len());
                self.entries.push(entry);
                true
            }
        }
    }

    /// Replace the edge of an existing entry regardless of weight.
    ///
    /// Used when a cheaper path (rather than a lighter edge) to an already
    /// reachable node has been found. Inserts when the node is absent.
    pub fn relink(&mut self, entry: ReachableNode) {
        match self.index.get(&entry.node) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.node, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Remove the entry for `node`; absent nodes are a no-op
    pub fn remove(&mut self, node: NodeId) -> Option<ReachableNode> {
        let pos = self.index.remove(&node)?;
        let entry = self.entries.remove(pos);
        self.reindex_from(pos);
        Some(entry)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn get(&self, node: NodeId) -> Option<&ReachableNode> {
        self.index.get(&node).map(|&pos| &self.entries[pos])
    }

    /// Stable ascending sort by each node's tentative cost.
    ///
    /// Unreached nodes sort last; ties keep their current relative order.
    pub fn sort_by_cost(&mut self, state: &SearchState) {
        self.entries
            .sort_by(|a, b| state.cost(a.node).total_cmp(state.cost(b.node)));
        self.reindex_from(0);
    }

    /// Remove and return the first entry, the cheapest after `sort_by_cost`
    pub fn pop_cheapest(&mut self) -> Option<ReachableNode> {
        let first = self.entries.first()?.node;
        self.remove(first)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReachableNode> {
        self.entries.iter()
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, entry) in self.entries.iter().enumerate().skip(start) {
            self.index.insert(entry.node, pos);
        }
    }
}

/// Frontier operations the search engine relies on
pub trait FrontierQueue {
    /// Forget every entry
    fn clear(&mut self);

    /// Offer `entry` as a way to reach `entry.node` from the explored set
    fn offer(&mut self, entry: ReachableNode, state: &mut SearchState);

    /// Bring tentative costs up to date and order the queue by them
    fn relax(&mut self, state: &mut SearchState);

    /// Remove and return the cheapest live entry, `None` once exhausted
    fn pop_cheapest(&mut self, state: &SearchState) -> Option<ReachableNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Frontier implementation selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierStrategy {
    /// Identity-indexed list re-sorted after every relaxation
    #[default]
    Resort,
    /// Binary min-heap with lazy re-insertion
    Heap,
}

impl FrontierStrategy {
    pub fn build(self) -> Box<dyn FrontierQueue> {
        match self {
            FrontierStrategy::Resort => Box::new(ResortFrontier::default()),
            FrontierStrategy::Heap => Box::new(HeapFrontier::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrontierStrategy::Resort => "resort",
            FrontierStrategy::Heap => "heap",
        }
    }
}

impl std::fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of reaching `entry.node` through `entry.edge`
fn path_cost(entry: &ReachableNode, state: &SearchState) -> Option<f64> {
    state.cost(entry.via).value().map(|via| via + entry.weight)
}

/// [`FrontierQueue`] over a [`ReachableNodeList`]: discover, relax every
/// entry, re-sort, take the first
#[derive(Debug, Clone, Default)]
pub struct ResortFrontier {
    list: ReachableNodeList,
}

impl ResortFrontier {
    pub fn list(&self) -> &ReachableNodeList {
        &self.list
    }
}

impl FrontierQueue for ResortFrontier {
    fn clear(&mut self) {
        self.list.clear();
    }

    fn offer(&mut self, entry: ReachableNode, state: &mut SearchState) {
        let Some(existing) = self.list.get(entry.node) else {
            self.list.add(entry);
            return;
        };
        // Compare whole paths, not edge weights: the lighter edge may leave
        // from a more expensive explored node.
        let current = path_cost(existing, state).unwrap_or(f64::INFINITY);
        if path_cost(&entry, state).is_some_and(|candidate| candidate < current) {
            self.list.relink(entry);
        }
    }

    fn relax(&mut self, state: &mut SearchState) {
        for entry in self.list.iter() {
            let Some(candidate) = path_cost(entry, state) else {
                continue;
            };
            let record = state.node_mut(entry.node);
            if record.total_cost.improved_by(candidate) {
                record.total_cost = Cost::Reached(candidate);
            }
        }
        self.list.sort_by_cost(state);
    }

    fn pop_cheapest(&mut self, _state: &SearchState) -> Option<ReachableNode> {
        self.list.pop_cheapest()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}
