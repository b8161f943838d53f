//! Path reconstruction from a finished search

use serde::Serialize;

use crate::error::{MinPathError, Result};
use crate::graph::algos::dijkstra::SearchRun;
use crate::graph::model::Graph;
use crate::graph::types::{EdgeId, NodeId};

/// One node on a shortest path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathStep {
    pub node: NodeId,
    /// Edge used to arrive here; `None` for the start node
    pub incoming_edge: Option<EdgeId>,
    /// Cost from the start up to and including this node
    pub cumulative_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub steps: Vec<PathStep>,
    pub total_cost: f64,
}

impl Path {
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.steps.iter().map(|s| s.node)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.steps.iter().filter_map(|s| s.incoming_edge)
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Walk predecessor edges from the target back to the start.
///
/// Fails with `NoPath` unless the run succeeded. The walk is bounded by
/// the node count, so a malformed predecessor chain yields `BrokenPath`
/// instead of looping.
pub fn reconstruct_path(graph: &Graph, run: &SearchRun) -> Result<Path> {
    if !run.succeeded() {
        return Err(MinPathError::NoPath {
            start: graph.label(run.start),
            target: graph.label(run.target),
        });
    }

    let mut reversed: Vec<(NodeId, Option<EdgeId>, f64)> = Vec::new();
    let mut current = run.target;

    while current != run.start {
        if reversed.len() >= run.state.node_count() {
            return Err(MinPathError::BrokenPath {
                node: graph.label(current),
            });
        }
        let Some(edge_id) = run.state.node(current).incoming_edge else {
            return Err(MinPathError::BrokenPath {
                node: graph.label(current),
            });
        };
        let edge = graph.edge(edge_id)?;
        reversed.push((current, Some(edge_id), edge.weight()));
        current = edge.neighbor(current);
    }
    reversed.push((run.start, None, 0.0));

    // Sum from the start forward, the order the search accumulated costs in
    let mut cumulative_cost = 0.0;
    let steps: Vec<PathStep> = reversed
        .into_iter()
        .rev()
        .map(|(node, incoming_edge, weight)| {
            cumulative_cost += weight;
            PathStep {
                node,
                incoming_edge,
                cumulative_cost,
            }
        })
        .collect();
    let total_cost = steps.last().map_or(0.0, |s| s.cumulative_cost);

    Ok(Path { steps, total_cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::dijkstra::{dijkstra_search, SearchOutcome};
    use crate::graph::frontier::ResortFrontier;
    use crate::graph::types::Cost;

    #[test]
    fn test_reconstruct_line() {
        let mut graph = Graph::new();
        let a = graph.add_labeled_node("A").unwrap();
        let b = graph.add_labeled_node("B").unwrap();
        let c = graph.add_labeled_node("C").unwrap();
        let ab = graph.add_edge(a, b, 1.5).unwrap();
        let bc = graph.add_edge(b, c, 2.0).unwrap();

        let run = dijkstra_search(&graph, a, c, &mut ResortFrontier::default()).unwrap();
        let path = reconstruct_path(&graph, &run).unwrap();

        assert_eq!(path.nodes().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![ab, bc]);
        assert_eq!(path.total_cost, 3.5);
        assert_eq!(path.hops(), 2);
        let cumulative: Vec<f64> = path.steps.iter().map(|s| s.cumulative_cost).collect();
        assert_eq!(cumulative, vec![0.0, 1.5, 3.5]);
        assert_eq!(path.steps[0].incoming_edge, None);
    }

    #[test]
    fn test_total_cost_matches_last_step_with_fractional_weights() {
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = ["A", "B", "C", "D"]
            .iter()
            .map(|l| graph.add_labeled_node(*l).unwrap())
            .collect();
        graph.add_edge(ids[0], ids[1], 0.1).unwrap();
        graph.add_edge(ids[1], ids[2], 0.2).unwrap();
        graph.add_edge(ids[2], ids[3], 0.3).unwrap();

        let run = dijkstra_search(&graph, ids[0], ids[3], &mut ResortFrontier::default()).unwrap();
        let path = reconstruct_path(&graph, &run).unwrap();

        let last = path.steps.last().unwrap().cumulative_cost;
        assert_eq!(path.total_cost, last);
        assert_eq!(run.state.cost(ids[3]), Cost::Reached(path.total_cost));
    }

    #[test]
    fn test_reconstruct_rejects_disconnected_run() {
        let mut graph = Graph::new();
        let a = graph.add_labeled_node("A").unwrap();
        let b = graph.add_labeled_node("B").unwrap();

        let run = dijkstra_search(&graph, a, b, &mut ResortFrontier::default()).unwrap();
        assert_eq!(run.outcome, SearchOutcome::Disconnected);
        assert!(matches!(
            reconstruct_path(&graph, &run),
            Err(MinPathError::NoPath { .. })
        ));
    }

    #[test]
    fn test_reconstruct_detects_broken_chain() {
        let mut graph = Graph::new();
        let a = graph.add_labeled_node("A").unwrap();
        let b = graph.add_labeled_node("B").unwrap();
        graph.add_edge(a, b, 1.0).unwrap();

        let mut run = dijkstra_search(&graph, a, b, &mut ResortFrontier::default()).unwrap();
        run.state.node_mut(b).incoming_edge = None;

        assert!(matches!(
            reconstruct_path(&graph, &run),
            Err(MinPathError::BrokenPath { .. })
        ));
    }
}
