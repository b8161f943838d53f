//! Output format handling for minpath
//!
//! Supports two output formats:
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MinPathError, Result};
use crate::graph::{Graph, NodeId};
use crate::session::PathResult;

/// Message shown when start and target are in different components
pub const DISCONNECTED_MESSAGE: &str = "The graph is not connected. Cannot find a path";

/// Output format for minpath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = MinPathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(MinPathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Edge taken to arrive at a path step, in direction of travel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeReport {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub node: String,
    pub edge: Option<EdgeReport>,
    pub cost: f64,
}

/// Label-based view of a [`PathResult`], the shape emitted as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub connected: bool,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub path: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PathReport {
    pub fn build(graph: &Graph, start: NodeId, target: NodeId, result: &PathResult) -> Result<Self> {
        let from = graph.label(start);
        let to = graph.label(target);

        let Some(path) = result.path() else {
            return Ok(PathReport {
                connected: false,
                from,
                to,
                total_cost: None,
                path: Vec::new(),
                message: Some(DISCONNECTED_MESSAGE.to_string()),
            });
        };

        let mut steps = Vec::with_capacity(path.steps.len());
        let mut previous: Option<NodeId> = None;
        for step in &path.steps {
            let edge = match (step.incoming_edge, previous) {
                (Some(edge_id), Some(prev)) => Some(EdgeReport {
                    from: graph.label(prev),
                    to: graph.label(step.node),
                    weight: graph.edge(edge_id)?.weight(),
                }),
                _ => None,
            };
            steps.push(StepReport {
                node: graph.label(step.node),
                edge,
                cost: step.cumulative_cost,
            });
            previous = Some(step.node);
        }

        Ok(PathReport {
            connected: true,
            from,
            to,
            total_cost: Some(path.total_cost),
            path: steps,
            message: None,
        })
    }

    pub fn render(&self, format: OutputFormat, precision: Option<usize>) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Human => Ok(self.render_human(precision)),
        }
    }

    fn render_human(&self, precision: Option<usize>) -> String {
        let Some(total) = self.total_cost else {
            return format!("{} from {} to {}", DISCONNECTED_MESSAGE, self.from, self.to);
        };

        let route: Vec<&str> = self.path.iter().map(|s| s.node.as_str()).collect();
        let width = route.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = format!("Path: {}\n", route.join(" -> "));
        for step in &self.path {
            let cost = format_cost(step.cost, precision);
            match &step.edge {
                Some(edge) => out.push_str(&format!(
                    "  {:<width$}  {}  (+{} from {})\n",
                    step.node,
                    cost,
                    format_cost(edge.weight, precision),
                    edge.from,
                )),
                None => out.push_str(&format!("  {:<width$}  {}\n", step.node, cost)),
            }
        }
        out.push_str(&format!("Total cost: {}", format_cost(total, precision)));
        out
    }
}

/// Format a cost with a fixed number of decimals, or shortest form
pub fn format_cost(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => value.to_string(),
    }
}
