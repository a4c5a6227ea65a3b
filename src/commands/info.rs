//! `wayfinder info`

use serde::Serialize;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{Graph, VertexId};

#[derive(Debug, Serialize)]
struct VertexDegree {
    vertex: VertexId,
    degree: usize,
}

#[derive(Debug, Serialize)]
struct GraphInfo {
    vertices: usize,
    edges: usize,
    degrees: Vec<VertexDegree>,
}

impl GraphInfo {
    fn collect(graph: &Graph) -> Self {
        let degrees = graph
            .vertices()
            .map(|vertex| VertexDegree {
                vertex,
                degree: graph.neighbors(vertex).len(),
            })
            .collect();
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            degrees,
        }
    }
}

/// Execute the info command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let info = GraphInfo::collect(&graph);

    match ctx.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Human => {
            println!("Vertices: {}", info.vertices);
            println!("Edges: {}", info.edges);
            if !ctx.cli.quiet && !info.degrees.is_empty() {
                println!();
                for entry in &info.degrees {
                    println!("  {}  degree={}", entry.vertex, entry.degree);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wayfinder=1 records=1 mode=info vertices={} edges={}",
                info.vertices, info.edges
            );
            for entry in &info.degrees {
                println!("V {} degree={}", entry.vertex, entry.degree);
            }
        }
    }

    Ok(())
}
