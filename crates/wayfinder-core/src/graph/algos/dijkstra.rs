use crate::error::{Result, WayfinderError};
use crate::graph::algos::reconstruct::reconstruct_path;
use crate::graph::ledger::DiscoveryLedger;
use crate::graph::types::{Adjacent, Path, SearchOptions, VertexId};
use crate::graph::GraphProvider;
use crate::log_search_stats;
use crate::logging::SearchStats;
use crate::queue::OrderingQueue;
use std::cmp::Ordering;

/// Candidate route to a vertex awaiting finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierItem {
    pub vertex: VertexId,
    pub predecessor: Option<VertexId>,
    /// Cumulative weight from the source
    pub weight: u64,
}

/// Lower cumulative weight ranks as higher priority.
pub fn lighter_first(a: &FrontierItem, b: &FrontierItem) -> Ordering {
    b.weight.cmp(&a.weight)
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    ledger: DiscoveryLedger,
    frontier: Box<dyn OrderingQueue<FrontierItem>>,
    stats: SearchStats,
}

impl DijkstraState {
    fn new(opts: &SearchOptions) -> Self {
        Self {
            ledger: DiscoveryLedger::new(),
            frontier: opts.queue.build(lighter_first),
            stats: SearchStats::new(),
        }
    }

    fn push(&mut self, item: FrontierItem) {
        self.frontier.push(item);
        self.stats.record_push(self.frontier.len());
    }

    /// Next item whose vertex is not finalized yet. Stale duplicates left
    /// behind by earlier, heavier pushes are dropped here.
    fn pop_fresh(&mut self) -> Option<FrontierItem> {
        while let Some(item) = self.frontier.pop() {
            self.stats.record_pop();
            if self.ledger.contains(item.vertex) {
                self.stats.record_stale();
                tracing::trace!(vertex = %item.vertex, weight = item.weight, "stale");
                continue;
            }
            return Some(item);
        }
        None
    }

    fn finalize(&mut self, item: FrontierItem) {
        self.ledger.add(item.vertex, item.predecessor, item.weight);
        self.stats.record_finalized();
        tracing::trace!(vertex = %item.vertex, weight = item.weight, "finalized");
    }
}

/// Minimum-weight path from `source` to `destination` using the default
/// frontier queue.
///
/// Returns `Ok(None)` when `destination` is unreachable and
/// [`WayfinderError::VertexNotFound`] when either endpoint is missing.
pub fn dijkstra(
    provider: &dyn GraphProvider,
    source: VertexId,
    destination: VertexId,
) -> Result<Option<Path>> {
    dijkstra_with(provider, source, destination, &SearchOptions::default())
}

/// [`dijkstra`] with an explicit frontier queue choice.
///
/// Vertices are finalized when popped, and the search stops as soon as
/// `destination` is finalized. Neighbors are pushed without decrease-key, so
/// a vertex may sit in the frontier several times; only its lightest entry is
/// ever finalized.
#[tracing::instrument(skip(provider, opts), fields(source = %source, destination = %destination, queue = %opts.queue))]
pub fn dijkstra_with(
    provider: &dyn GraphProvider,
    source: VertexId,
    destination: VertexId,
    opts: &SearchOptions,
) -> Result<Option<Path>> {
    for endpoint in [source, destination] {
        if !provider.contains_vertex(endpoint) {
            return Err(WayfinderError::VertexNotFound { id: endpoint });
        }
    }

    let mut state = DijkstraState::new(opts);
    state.push(FrontierItem {
        vertex: source,
        predecessor: None,
        weight: 0,
    });

    while let Some(current) = state.pop_fresh() {
        state.finalize(current);
        if current.vertex == destination {
            break;
        }

        for Adjacent {
            vertex: neighbor,
            weight,
        } in provider.adjacent(current.vertex)
        {
            if state.ledger.contains(neighbor) {
                continue;
            }
            state.push(FrontierItem {
                vertex: neighbor,
                predecessor: Some(current.vertex),
                weight: current.weight.saturating_add(weight),
            });
        }
    }

    log_search_stats!(state.stats, "dijkstra");

    let path = reconstruct_path(&state.ledger, source, destination);
    if path.is_none() {
        tracing::debug!("destination unreachable");
    }
    Ok(path)
}

#[cfg(test)]
mod tests;
