//! CLI argument parsing for minpath
//!
//! Global flags: --config, --format, --frontier, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use minpath_core::format::OutputFormat;
use minpath_core::graph::FrontierStrategy;

/// Minpath - shortest paths over graphs built one edge at a time
#[derive(Parser, Debug)]
#[command(name = "minpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./minpath.toml when present)
    #[arg(long, global = true, env = "MINPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Frontier implementation (overrides search.frontier)
    #[arg(long, global = true, value_parser = parse_frontier)]
    pub frontier: Option<FrontierStrategy>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "minpath_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session script (reads stdin when no file is given)
    ///
    /// One command per line: `node [LABEL]`, `edge A B WEIGHT`,
    /// `path A B`, `reset`, `clear`. Text after `#` is ignored.
    Run {
        /// Script file
        script: Option<PathBuf>,
    },

    /// Find the cheapest path in a graph given as an edge list
    Solve(SolveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Edge as FROM:TO:WEIGHT (repeatable); nodes are created on first use
    #[arg(long = "edge", short, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Extra node without edges (repeatable)
    #[arg(long = "node", action = clap::ArgAction::Append)]
    pub nodes: Vec<String>,

    /// Start node label
    #[arg(long)]
    pub from: String,

    /// Target node label
    #[arg(long)]
    pub to: String,
}

/// An edge given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_frontier(s: &str) -> Result<FrontierStrategy, String> {
    match s.to_lowercase().as_str() {
        "resort" => Ok(FrontierStrategy::Resort),
        "heap" => Ok(FrontierStrategy::Heap),
        other => Err(format!(
            "unknown frontier: {other} (expected: resort or heap)"
        )),
    }
}

/// Parse `FROM:TO:WEIGHT`, splitting from the right
fn parse_edge_spec(s: &str) -> Result<EdgeSpec, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(weight), Some(to), Some(from)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected FROM:TO:WEIGHT, got {s:?}"));
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("edge endpoints must not be empty in {s:?}"));
    }
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid weight {weight:?} in {s:?}"))?;
    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_spec() {
        let spec = parse_edge_spec("A:B:4.5").unwrap();
        assert_eq!(
            spec,
            EdgeSpec {
                from: "A".into(),
                to: "B".into(),
                weight: 4.5
            }
        );
    }

    #[test]
    fn test_parse_edge_spec_errors() {
        assert!(parse_edge_spec("A:B").is_err());
        assert!(parse_edge_spec(":B:1").is_err());
        assert!(parse_edge_spec("A:B:far").is_err());
    }

    #[test]
    fn test_parse_frontier() {
        assert_eq!(parse_frontier("Heap").unwrap(), FrontierStrategy::Heap);
        assert!(parse_frontier("fib").is_err());
    }

    #[test]
    fn test_cli_parses_solve() {
        let cli = Cli::try_parse_from([
            "minpath", "--format", "json", "solve", "-e", "A:B:1", "-e", "B:C:2", "--from", "A",
            "--to", "C",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.edges.len(), 2);
        assert_eq!(args.to, "C");
    }
}
