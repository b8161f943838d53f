//! Command dispatch logic for minpath

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use minpath_core::config::MinPathConfig;
use minpath_core::error::Result;
use minpath_core::graph::FrontierStrategy;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{run, solve};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: MinPathConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: MinPathConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Frontier from `--frontier`, falling back to the config file
    pub fn frontier(&self) -> FrontierStrategy {
        self.cli.frontier.unwrap_or(self.config.search.frontier)
    }

    pub fn precision(&self) -> Option<usize> {
        self.config.output.precision
    }
}

/// A runnable CLI command
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run { script } => run::execute(ctx, script.as_deref()),
            Commands::Solve(args) => solve::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = MinPathConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), frontier = %config.search.frontier, "load_config");

    let ctx = CommandContext::new(cli, config, start);
    cli.command.execute(&ctx)
}
