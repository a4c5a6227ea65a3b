//! CLI argument parsing for wayfinder
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_output_format, parse_queue_kind, parse_vertex};
pub use wayfinder_core::format::OutputFormat;
use wayfinder_core::graph::VertexId;
use wayfinder_core::queue::QueueKind;

/// Wayfinder - shortest paths and spanning trees over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.json or .toml)
    #[arg(long, global = true, env = "WAYFINDER_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "WAYFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records (default from config, else human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show vertex and edge counts with per-vertex degree
    Info,

    /// List the neighbors of a vertex
    Neighbors {
        /// Vertex id (`3` or `v3`)
        #[arg(value_parser = parse_vertex)]
        vertex: VertexId,
    },

    /// Breadth-first spanning tree from a root vertex
    Tree {
        /// Root vertex id
        #[arg(value_parser = parse_vertex)]
        root: VertexId,
    },

    /// Minimum-weight path between two vertices
    Path {
        /// Source vertex id
        #[arg(value_parser = parse_vertex)]
        from: VertexId,

        /// Destination vertex id
        #[arg(value_parser = parse_vertex)]
        to: VertexId,

        /// Find the fewest-hop path instead of the lightest one
        #[arg(long)]
        unweighted: bool,

        /// Frontier queue: linear or heap (default from config)
        #[arg(long, value_parser = parse_queue_kind, conflicts_with = "unweighted")]
        queue: Option<QueueKind>,
    },
}
