//! Arena-backed undirected graph
//!
//! Nodes and edges are addressed by [`NodeId`] / [`EdgeId`] handles; each
//! node keeps the ids of its incident edges. The graph carries no search
//! state, so it can be shared immutably between searches.

use std::collections::HashMap;

use crate::error::{MinPathError, Result};
use crate::graph::types::{Edge, EdgeId, Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    labels: HashMap<String, NodeId>,
    next_auto_label: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node labelled with the next free number ("1", "2", ...)
    pub fn add_node(&mut self) -> NodeId {
        loop {
            self.next_auto_label += 1;
            let label = self.next_auto_label.to_string();
            if !self.labels.contains_key(&label) {
                return self.push_node(label);
            }
        }
    }

    /// Add a node with an explicit label
    pub fn add_labeled_node(&mut self, label: impl Into<String>) -> Result<NodeId> {
        let label = label.into();
        if self.labels.contains_key(&label) {
            return Err(MinPathError::DuplicateLabel { label });
        }
        Ok(self.push_node(label))
    }

    fn push_node(&mut self, label: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.labels.insert(label.clone(), id);
        self.nodes.push(Node {
            label,
            edges: Vec::new(),
        });
        tracing::trace!(node = %id, label = %self.nodes[id.0].label, "add_node");
        id
    }

    /// Connect two distinct nodes with an undirected edge.
    ///
    /// Parallel edges are allowed; the search collapses them to the
    /// lightest one. Negative, NaN and infinite weights are rejected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<EdgeId> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(MinPathError::SelfLoop {
                node: self.nodes[a.0].label.clone(),
            });
        }
        if !weight.is_finite() {
            crate::bail_weight!(weight, "weights must be finite");
        }
        if weight < 0.0 {
            crate::bail_weight!(weight, "weights must be non-negative");
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            endpoint_a: a,
            endpoint_b: b,
            weight,
        });
        self.nodes[a.0].edges.push(id);
        self.nodes[b.0].edges.push(id);
        tracing::trace!(edge = %id, from = %a, to = %b, weight, "add_edge");
        Ok(id)
    }

    /// Drop every node and edge
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.labels.clear();
        self.next_auto_label = 0;
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| MinPathError::node_not_found(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id.0).ok_or_else(|| MinPathError::EdgeNotFound {
            id: id.to_string(),
        })
    }

    pub fn check_node(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ())
    }

    /// Look a node up by its label
    pub fn find_node(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// Look a node up by label, failing with `NodeNotFound`
    pub fn resolve(&self, label: &str) -> Result<NodeId> {
        self.find_node(label)
            .ok_or_else(|| MinPathError::node_not_found(label))
    }

    /// Label of a node; falls back to the handle for foreign ids
    pub fn label(&self, id: NodeId) -> String {
        self.nodes
            .get(id.0)
            .map(|n| n.label.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Incident edges of `node` paired with the node on their far side
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = (EdgeId, &Edge)> + '_> {
        let edges = &self.node(node)?.edges;
        Ok(edges.iter().map(move |&id| (id, &self.edges[id.0])))
    }
}
