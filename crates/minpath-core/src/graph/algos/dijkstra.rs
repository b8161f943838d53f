use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::graph::frontier::{FrontierQueue, ReachableNode};
use crate::graph::model::Graph;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeId};

/// Terminal state of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    /// The target was finalized
    Succeeded,
    /// The frontier ran dry before the target was reached
    Disconnected,
}

/// Everything a finished search leaves behind
#[derive(Debug, Clone)]
pub struct SearchRun {
    pub start: NodeId,
    pub target: NodeId,
    pub outcome: SearchOutcome,
    /// Per-node cost / incoming edge and per-edge tree membership
    pub state: SearchState,
    /// Finalized nodes in finalization order
    pub cloud: Vec<NodeId>,
}

impl SearchRun {
    pub fn succeeded(&self) -> bool {
        self.outcome == SearchOutcome::Succeeded
    }
}

/// Explored set: finalization order plus O(1) membership
#[derive(Debug, Default)]
struct Cloud {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl Cloud {
    fn push(&mut self, node: NodeId) {
        self.members.insert(node);
        self.order.push(node);
    }

    fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }
}

/// Offer every edge leaving `current` to the frontier.
///
/// Skips the node `current` was reached from and any node already in the
/// cloud. The first check is subsumed by the second for a consistent
/// state; both are kept so a corrupted predecessor cannot walk an edge back.
fn discover_neighbors(
    graph: &Graph,
    current: NodeId,
    cloud: &Cloud,
    state: &mut SearchState,
    frontier: &mut dyn FrontierQueue,
) -> Result<()> {
    let came_from = match state.node(current).incoming_edge {
        Some(edge) => Some(graph.edge(edge)?.neighbor(current)),
        None => None,
    };

    for (edge_id, edge) in graph.neighbors(current)? {
        let neighbor = edge.neighbor(current);
        if came_from == Some(neighbor) || cloud.contains(neighbor) {
            continue;
        }
        frontier.offer(
            ReachableNode {
                node: neighbor,
                edge: edge_id,
                weight: edge.weight(),
                via: current,
            },
            state,
        );
    }
    Ok(())
}

/// Move `next` into the cloud: its cost is final and its edge joins the
/// shortest-path tree
fn finalize(next: ReachableNode, cloud: &mut Cloud, state: &mut SearchState) {
    let record = state.node_mut(next.node);
    record.visited = true;
    record.incoming_edge = Some(next.edge);
    state.edge_mut(next.edge).visited = true;
    cloud.push(next.node);
    tracing::trace!(node = %next.node, edge = %next.edge, cost = ?state.cost(next.node), "finalize");
}

/// Grow the explored set from `start` one node at a time until `target` is
/// finalized or no reachable node remains.
///
/// The graph is only read; all bookkeeping goes into a fresh
/// [`SearchState`] returned in the [`SearchRun`]. Weights are assumed
/// non-negative, which [`Graph::add_edge`] enforces.
#[tracing::instrument(skip(graph, frontier), fields(start = %start, target = %target, nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra_search(
    graph: &Graph,
    start: NodeId,
    target: NodeId,
    frontier: &mut dyn FrontierQueue,
) -> Result<SearchRun> {
    graph.check_node(start)?;
    graph.check_node(target)?;

    let mut state = SearchState::new(graph.node_count(), graph.edge_count());
    let mut cloud = Cloud::default();
    frontier.clear();

    let root = state.node_mut(start);
    root.visited = true;
    root.total_cost = Cost::Reached(0.0);
    cloud.push(start);

    let mut current = start;
    let mut outcome = SearchOutcome::Succeeded;

    while current != target {
        discover_neighbors(graph, current, &cloud, &mut state, frontier)?;
        frontier.relax(&mut state);

        let Some(next) = frontier.pop_cheapest(&state) else {
            outcome = SearchOutcome::Disconnected;
            break;
        };
        finalize(next, &mut cloud, &mut state);
        current = next.node;
    }

    tracing::debug!(outcome = ?outcome, finalized = cloud.order.len(), "dijkstra_search");

    Ok(SearchRun {
        start,
        target,
        outcome,
        state,
        cloud: cloud.order,
    })
}
