//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source, single-target shortest path search
//! - `path`: reconstruction of the found path from predecessor edges

pub mod dijkstra;
pub mod path;

pub use dijkstra::{dijkstra_search, SearchOutcome, SearchRun};
pub use path::{reconstruct_path, Path, PathStep};
