//! Per-search mutable state, kept apart from the graph
//!
//! A [`SearchState`] holds one record per node and per edge of the graph it
//! was sized for. Every search owns its own state, so a graph can be
//! searched repeatedly (or from several threads) without stale flags
//! leaking from one run into the next.

use crate::graph::types::{Cost, EdgeId, NodeId};

/// Search bookkeeping for a single node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeSearchState {
    /// Finalized: the node's cost is its true shortest distance
    pub visited: bool,
    pub total_cost: Cost,
    /// Last edge of the shortest path to this node (`None` for the start)
    pub incoming_edge: Option<EdgeId>,
}

impl NodeSearchState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Search bookkeeping for a single edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSearchState {
    /// Part of the discovered shortest-path tree
    pub visited: bool,
}

impl EdgeSearchState {
    pub fn reset(&mut self) {
        self.visited = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    nodes: Vec<NodeSearchState>,
    edges: Vec<EdgeSearchState>,
}

impl SearchState {
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: vec![NodeSearchState::default(); node_count],
            edges: vec![EdgeSearchState::default(); edge_count],
        }
    }

    /// Reset every node and edge record to its initial value
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(NodeSearchState::reset);
        self.edges.iter_mut().for_each(EdgeSearchState::reset);
    }

    pub fn node(&self, id: NodeId) -> &NodeSearchState {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut NodeSearchState {
        &mut self.nodes[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &EdgeSearchState {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut EdgeSearchState {
        &mut self.edges[id.0]
    }

    pub fn cost(&self, id: NodeId) -> Cost {
        self.nodes[id.0].total_cost
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.nodes[id.0].visited
    }

    /// Edges marked as part of the shortest-path tree, in id order
    pub fn tree_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visited)
            .map(|(i, _)| EdgeId(i))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
