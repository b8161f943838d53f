//! Graph model and shortest-path search
//!
//! - `model`: arena of nodes and undirected weighted edges
//! - `state`: per-search bookkeeping kept outside the graph
//! - `frontier` / `heap`: the reachable-node frontier and its heap variant
//! - `algos`: Dijkstra search and path reconstruction

pub mod algos;
pub mod frontier;
pub mod heap;
pub mod model;
pub mod state;
pub mod types;

pub use algos::{dijkstra_search, reconstruct_path, Path, PathStep, SearchOutcome, SearchRun};
pub use frontier::{FrontierQueue, FrontierStrategy, ReachableNode, ReachableNodeList, ResortFrontier};
pub use heap::HeapFrontier;
pub use model::Graph;
pub use state::{EdgeSearchState, NodeSearchState, SearchState};
pub use types::{Cost, Edge, EdgeId, Node, NodeId};
