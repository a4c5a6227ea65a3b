//! `wayfinder neighbors`

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;
use wayfinder_core::error::{Result, WayfinderError};
use wayfinder_core::graph::{Adjacent, VertexId};

/// Execute the neighbors command
pub fn execute(ctx: &CommandContext, vertex: VertexId) -> Result<()> {
    let graph = ctx.load_graph()?;
    if !graph.contains_vertex(vertex) {
        return Err(WayfinderError::VertexNotFound { id: vertex });
    }

    let mut records: Vec<Adjacent> = Vec::new();
    graph.for_each_adjacent(vertex, |neighbor, weight| {
        records.push(Adjacent {
            vertex: neighbor,
            weight,
        })
    });

    match ctx.format() {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertex": vertex,
                "degree": records.len(),
                "neighbors": records,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if records.is_empty() {
                if !ctx.cli.quiet {
                    println!("Vertex {} has no neighbors", vertex);
                }
            } else {
                for record in &records {
                    println!("{} -- {}  weight={}", vertex, record.vertex, record.weight);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wayfinder=1 records=1 mode=neighbors vertex={} degree={}",
                vertex,
                records.len()
            );
            for record in &records {
                println!("E {} {} {}", vertex, record.vertex, record.weight);
            }
        }
    }

    Ok(())
}
