//! Minpath Core Library
//!
//! Shortest-path search over a graph built one node and edge at a time.
//! The engine grows an explored set from the start node, keeping the
//! cheapest known edge to every adjacent node in a reachable-node frontier,
//! and reports either the cheapest path or that the graph is disconnected.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod session;

pub use error::{MinPathError, Result};
pub use session::{PathResult, Session};
