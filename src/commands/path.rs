//! `wayfinder path`

use std::time::Instant;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{bfs_find_path, dijkstra_with, Path, SearchOptions, VertexId};

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    from: VertexId,
    to: VertexId,
    unweighted: bool,
    opts: SearchOptions,
) -> Result<()> {
    let graph = ctx.load_graph()?;

    let search_start = Instant::now();
    let path = if unweighted {
        bfs_find_path(&graph, from, to)?
    } else {
        dijkstra_with(&graph, from, to, &opts)?
    };
    tracing::debug!(elapsed = ?search_start.elapsed(), found = path.is_some(), "search");

    let mode = if unweighted { "unweighted" } else { "weighted" };

    match ctx.format() {
        OutputFormat::Json => output_json(from, to, mode, &opts, path.as_ref())?,
        OutputFormat::Human => output_human(ctx, from, to, path.as_ref()),
        OutputFormat::Records => output_records(from, to, mode, path.as_ref()),
    }

    Ok(())
}

fn output_json(
    from: VertexId,
    to: VertexId,
    mode: &str,
    opts: &SearchOptions,
    path: Option<&Path>,
) -> Result<()> {
    let mut output = serde_json::json!({
        "from": from,
        "to": to,
        "mode": mode,
        "found": path.is_some(),
    });
    if mode == "weighted" {
        output["queue"] = serde_json::json!(opts.queue.to_string());
    }
    if let Some(path) = path {
        output["length"] = serde_json::json!(path.length());
        output["weight"] = serde_json::json!(path.weight());
        output["vertices"] = serde_json::json!(path.vertices());
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, from: VertexId, to: VertexId, path: Option<&Path>) {
    let Some(path) = path else {
        if !ctx.cli.quiet {
            println!("No path found from {} to {}", from, to);
        }
        return;
    };

    let route: Vec<String> = path.vertices().iter().map(ToString::to_string).collect();
    println!("{}", route.join(" -> "));
    if !ctx.cli.quiet {
        println!("Length: {}  Weight: {}", path.length(), path.weight());
    }
}

fn output_records(from: VertexId, to: VertexId, mode: &str, path: Option<&Path>) {
    let Some(path) = path else {
        println!(
            "H wayfinder=1 records=1 mode=path.{} from={} to={} found=false",
            mode, from, to
        );
        return;
    };

    println!(
        "H wayfinder=1 records=1 mode=path.{} from={} to={} found=true length={} weight={}",
        mode,
        from,
        to,
        path.length(),
        path.weight()
    );
    path.for_each(|vertex| println!("V {}", vertex));
}
