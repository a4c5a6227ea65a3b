//! `wayfinder tree`

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{bfs_spanning_tree, TreeEntry, VertexId};

/// Execute the tree command
pub fn execute(ctx: &CommandContext, root: VertexId) -> Result<()> {
    let graph = ctx.load_graph()?;
    let tree = bfs_spanning_tree(&graph, root)?;

    let mut entries: Vec<TreeEntry> = tree.entries().to_vec();
    entries.sort_by_key(|entry| (entry.hops, entry.vertex));

    match ctx.format() {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "root": tree.root(),
                "count": tree.count(),
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Spanning tree from {} ({} vertices)", root, tree.count());
            }
            for entry in &entries {
                match entry.predecessor {
                    Some(predecessor) => {
                        println!("  {}  hops={}  via {}", entry.vertex, entry.hops, predecessor)
                    }
                    None => println!("  {}  hops={}", entry.vertex, entry.hops),
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wayfinder=1 records=1 mode=tree root={} count={}",
                root,
                tree.count()
            );
            for entry in &entries {
                let predecessor = entry
                    .predecessor
                    .map_or_else(|| "-".to_string(), |p| p.to_string());
                println!("T {} {} {}", entry.vertex, predecessor, entry.hops);
            }
        }
    }

    Ok(())
}
