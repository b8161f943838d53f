//! `minpath run`: replay a session script

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use minpath_core::error::{MinPathError, Result};
use minpath_core::format::{OutputFormat, PathReport};
use minpath_core::graph::FrontierStrategy;
use minpath_core::Session;

use crate::commands::dispatch::CommandContext;
use crate::commands::script::{parse_script, ScriptCommand, ScriptLine};

/// JSON document emitted once the whole script has run
#[derive(Debug, Serialize)]
struct RunSummary {
    frontier: FrontierStrategy,
    nodes: usize,
    edges: usize,
    results: Vec<PathReport>,
}

pub fn execute(ctx: &CommandContext, script: Option<&Path>) -> Result<()> {
    let text = match script {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let lines = parse_script(&text)?;
    tracing::debug!(commands = lines.len(), "parse_script");

    let mut session = Session::new(ctx.frontier());
    let mut results = Vec::new();

    for ScriptLine { line, command } in lines {
        let report = apply(ctx, &mut session, command)
            .map_err(|e| MinPathError::script(line, e))?;
        if let Some(report) = report {
            if ctx.cli.format == OutputFormat::Human {
                if !results.is_empty() {
                    println!();
                }
                println!("{}", report.render(OutputFormat::Human, ctx.precision())?);
            }
            results.push(report);
        }
    }

    if ctx.cli.format == OutputFormat::Json {
        let summary = RunSummary {
            frontier: session.strategy(),
            nodes: session.graph().node_count(),
            edges: session.graph().edge_count(),
            results,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    minpath_core::trace_time!(ctx.start, "run");
    Ok(())
}

/// Execute one script command, returning a report for `path`
fn apply(
    ctx: &CommandContext,
    session: &mut Session,
    command: ScriptCommand,
) -> Result<Option<PathReport>> {
    match command {
        ScriptCommand::Node(Some(label)) => {
            session.add_labeled_node(label)?;
        }
        ScriptCommand::Node(None) => {
            let id = session.add_node();
            if ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet {
                println!("Added node {}", session.graph().label(id));
            }
        }
        ScriptCommand::Edge { from, to, weight } => {
            ctx.config.check_weight(weight)?;
            let a = session.graph().resolve(&from)?;
            let b = session.graph().resolve(&to)?;
            session.add_edge(a, b, weight)?;
        }
        ScriptCommand::Path { from, to } => {
            let start = session.graph().resolve(&from)?;
            let target = session.graph().resolve(&to)?;
            let result = session.find_path(start, target)?;
            let report = PathReport::build(session.graph(), start, target, &result)?;
            return Ok(Some(report));
        }
        ScriptCommand::Reset => session.reset(),
        ScriptCommand::Clear => session.clear(),
    }
    Ok(None)
}
