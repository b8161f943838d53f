//! `minpath solve`: one-shot search over an edge list

use minpath_core::bail_usage;
use minpath_core::error::{MinPathError, Result};
use minpath_core::format::PathReport;
use minpath_core::graph::NodeId;
use minpath_core::Session;

use crate::cli::SolveArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    if args.edges.is_empty() && args.nodes.is_empty() {
        bail_usage!("solve needs at least one --edge or --node");
    }

    let mut session = Session::new(ctx.frontier());
    for label in &args.nodes {
        ensure_node(&mut session, label)?;
    }
    for spec in &args.edges {
        ctx.config.check_weight(spec.weight)?;
        let a = ensure_node(&mut session, &spec.from)?;
        let b = ensure_node(&mut session, &spec.to)?;
        session.add_edge(a, b, spec.weight)?;
    }

    let start = session.graph().resolve(&args.from)?;
    let target = session.graph().resolve(&args.to)?;
    let result = session.find_path(start, target)?;

    let report = PathReport::build(session.graph(), start, target, &result)?;
    println!("{}", report.render(ctx.cli.format, ctx.precision())?);

    minpath_core::trace_time!(
        ctx.start,
        "solve",
        nodes = session.graph().node_count(),
        edges = session.graph().edge_count()
    );

    if !result.is_connected() {
        return Err(MinPathError::NoPath {
            start: args.from.clone(),
            target: args.to.clone(),
        });
    }
    Ok(())
}

fn ensure_node(session: &mut Session, label: &str) -> Result<NodeId> {
    match session.graph().find_node(label) {
        Some(id) => Ok(id),
        None => session.add_labeled_node(label),
    }
}
