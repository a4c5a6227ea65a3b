//! Command dispatch logic for wayfinder

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use tracing::debug;
use wayfinder_core::config::EngineConfig;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{Graph, GraphFile};
use wayfinder_core::{bail_usage, trace_time};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, otherwise the configured default
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Load the graph named by `--graph` / `WAYFINDER_GRAPH`.
    pub fn load_graph(&self) -> Result<Graph> {
        let Some(path) = &self.cli.graph else {
            bail_usage!("no graph file given (use --graph or WAYFINDER_GRAPH)");
        };

        let load_start = Instant::now();
        let graph = GraphFile::load_graph(path)?;
        trace_time!(load_start, "load_graph");
        debug!(elapsed = ?self.start.elapsed(), "graph_ready");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths and spanning trees over weighted graphs.");
        println!();
        println!("Run `wayfinder --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info => super::info::execute(ctx),
            Commands::Neighbors { vertex } => super::neighbors::execute(ctx, *vertex),
            Commands::Tree { root } => super::tree::execute(ctx, *root),
            Commands::Path {
                from,
                to,
                unweighted,
                queue,
            } => {
                let mut opts = ctx.config.search.options();
                if let Some(queue) = queue {
                    opts.queue = *queue;
                }
                super::path::execute(ctx, *from, *to, *unweighted, opts)
            }
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
