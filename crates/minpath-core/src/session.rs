//! Engine boundary for an interactive caller
//!
//! A [`Session`] owns the graph being built, runs searches over it and
//! keeps the most recent [`SearchRun`] so the caller can read back each
//! node's incoming edge and cumulative cost (e.g. to highlight the tree).

use crate::error::Result;
use crate::graph::{
    dijkstra_search, reconstruct_path, EdgeId, FrontierStrategy, Graph, NodeId, Path,
    SearchOutcome, SearchRun,
};

/// Outcome of [`Session::find_path`]
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    Connected { path: Path },
    /// Start and target lie in different components
    Disconnected,
}

impl PathResult {
    pub fn is_connected(&self) -> bool {
        matches!(self, PathResult::Connected { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Connected { path } => Some(path),
            PathResult::Disconnected => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    graph: Graph,
    strategy: FrontierStrategy,
    last: Option<SearchRun>,
}

impl Session {
    pub fn new(strategy: FrontierStrategy) -> Self {
        Self {
            graph: Graph::new(),
            strategy,
            last: None,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn strategy(&self) -> FrontierStrategy {
        self.strategy
    }

    pub fn add_node(&mut self) -> NodeId {
        self.graph.add_node()
    }

    pub fn add_labeled_node(&mut self, label: impl Into<String>) -> Result<NodeId> {
        self.graph.add_labeled_node(label)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<EdgeId> {
        self.graph.add_edge(a, b, weight)
    }

    /// Search for the cheapest path from `start` to `target`.
    ///
    /// Every call computes from scratch on fresh search state, so calling
    /// it again without [`Session::reset`] is safe; the previous run is
    /// replaced.
    pub fn find_path(&mut self, start: NodeId, target: NodeId) -> Result<PathResult> {
        self.last = None;
        let mut frontier = self.strategy.build();
        let run = dijkstra_search(&self.graph, start, target, frontier.as_mut())?;

        let result = match run.outcome {
            SearchOutcome::Succeeded => PathResult::Connected {
                path: reconstruct_path(&self.graph, &run)?,
            },
            SearchOutcome::Disconnected => {
                tracing::info!(
                    start = %self.graph.label(start),
                    target = %self.graph.label(target),
                    "graph is not connected"
                );
                PathResult::Disconnected
            }
        };
        self.last = Some(run);
        Ok(result)
    }

    /// The most recent search, until the next `reset` or `clear`
    pub fn last_search(&self) -> Option<&SearchRun> {
        self.last.as_ref()
    }

    /// Discard the retained search; the graph is untouched
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Drop the graph along with any search state
    pub fn clear(&mut self) {
        self.reset();
        self.graph.clear();
    }
}
