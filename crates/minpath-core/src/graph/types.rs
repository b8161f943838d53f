use serde::Serialize;
use std::fmt;

/// Handle to a node in a [`crate::graph::Graph`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle to an edge in a [`crate::graph::Graph`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Tentative cost of reaching a node from the search's start.
///
/// `Unset` means the node has not been reached yet; a reached cost of
/// zero is a real cost and is never treated as unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cost {
    #[default]
    Unset,
    Reached(f64),
}

impl Cost {
    pub fn value(self) -> Option<f64> {
        match self {
            Cost::Unset => None,
            Cost::Reached(cost) => Some(cost),
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Cost::Unset)
    }

    /// True when `candidate` should replace this cost during relaxation
    pub fn improved_by(self, candidate: f64) -> bool {
        match self {
            Cost::Unset => true,
            Cost::Reached(current) => candidate < current,
        }
    }

    /// Ascending order with `Unset` after every reached cost
    pub fn total_cmp(self, other: Cost) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Cost::Reached(a), Cost::Reached(b)) => a.total_cmp(&b),
            (Cost::Reached(_), Cost::Unset) => Ordering::Less,
            (Cost::Unset, Cost::Reached(_)) => Ordering::Greater,
            (Cost::Unset, Cost::Unset) => Ordering::Equal,
        }
    }
}

/// A graph vertex: a unique label plus the edges incident on it
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) edges: Vec<EdgeId>,
}

impl Node {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Incident edges in insertion order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// An undirected weighted edge between two distinct nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub(crate) endpoint_a: NodeId,
    pub(crate) endpoint_b: NodeId,
    pub(crate) weight: f64,
}

impl Edge {
    pub fn endpoint_a(&self) -> NodeId {
        self.endpoint_a
    }

    pub fn endpoint_b(&self) -> NodeId {
        self.endpoint_b
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The node on the other side of this edge from `node`
    pub fn neighbor(&self, node: NodeId) -> NodeId {
        if self.endpoint_a == node {
            self.endpoint_b
        } else {
            self.endpoint_a
        }
    }
}
