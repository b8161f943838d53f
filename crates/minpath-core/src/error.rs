//! Error types and exit codes for minpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including a disconnected one-shot search)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, invalid weight, malformed script)
//!
//! A disconnected graph is not an error: the engine reports it as
//! [`crate::session::PathResult::Disconnected`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the minpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid weight, bad script (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or searching a graph
#[derive(Error, Debug)]
pub enum MinPathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("edge not found: {id}")]
    EdgeNotFound { id: String },

    #[error("node label already in use: {label}")]
    DuplicateLabel { label: String },

    #[error("an edge must connect two distinct nodes (got {node} twice)")]
    SelfLoop { node: String },

    #[error("invalid edge weight: {weight} ({reason})")]
    InvalidWeight { weight: f64, reason: String },

    #[error("line {line}: {reason}")]
    Script { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("no path from {start} to {target}: the search did not reach the target")]
    NoPath { start: String, target: String },

    #[error("predecessor chain broken at node {node}")]
    BrokenPath { node: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MinPathError {
    /// Create an error for a node id or label that is not in the graph
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        MinPathError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for an edge weight the engine cannot search over
    pub fn invalid_weight(weight: f64, reason: impl Into<String>) -> Self {
        MinPathError::InvalidWeight {
            weight,
            reason: reason.into(),
        }
    }

    /// Create an error for a malformed script line (1-based)
    pub fn script(line: usize, reason: impl std::fmt::Display) -> Self {
        MinPathError::Script {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MinPathError::UnknownFormat(_)
            | MinPathError::UsageError(_)
            | MinPathError::InvalidConfig { .. } => ExitCode::Usage,

            MinPathError::NodeNotFound { .. }
            | MinPathError::EdgeNotFound { .. }
            | MinPathError::DuplicateLabel { .. }
            | MinPathError::SelfLoop { .. }
            | MinPathError::InvalidWeight { .. }
            | MinPathError::Script { .. } => ExitCode::Data,

            MinPathError::NoPath { .. }
            | MinPathError::BrokenPath { .. }
            | MinPathError::Io(_)
            | MinPathError::Json(_)
            | MinPathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MinPathError::UnknownFormat(_) => "unknown_format",
            MinPathError::UsageError(_) => "usage_error",
            MinPathError::InvalidConfig { .. } => "invalid_config",
            MinPathError::NodeNotFound { .. } => "node_not_found",
            MinPathError::EdgeNotFound { .. } => "edge_not_found",
            MinPathError::DuplicateLabel { .. } => "duplicate_label",
            MinPathError::SelfLoop { .. } => "self_loop",
            MinPathError::InvalidWeight { .. } => "invalid_weight",
            MinPathError::Script { .. } => "script_error",
            MinPathError::NoPath { .. } => "no_path",
            MinPathError::BrokenPath { .. } => "broken_path",
            MinPathError::Io(_) => "io_error",
            MinPathError::Json(_) => "json_error",
            MinPathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let MinPathError::Script { line, .. } = self {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for minpath operations
pub type Result<T> = std::result::Result<T, MinPathError>;
