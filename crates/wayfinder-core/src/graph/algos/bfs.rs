use crate::error::{Result, WayfinderError};
use crate::graph::algos::reconstruct::{build_spanning_tree, reconstruct_route};
use crate::graph::ledger::DiscoveryLedger;
use crate::graph::types::{Adjacent, Path, SpanningTree, VertexId};
use crate::graph::GraphProvider;
use crate::log_search_stats;
use crate::logging::SearchStats;
use std::collections::VecDeque;

/// State tracked during BFS traversal
struct BfsState {
    ledger: DiscoveryLedger,
    queue: VecDeque<(VertexId, u64)>,
    stats: SearchStats,
}

impl BfsState {
    fn new(root: VertexId) -> Self {
        let mut state = Self {
            ledger: DiscoveryLedger::new(),
            queue: VecDeque::new(),
            stats: SearchStats::new(),
        };
        state.discover(root, None, 0);
        state
    }

    fn discover(&mut self, vertex: VertexId, predecessor: Option<VertexId>, hops: u64) {
        self.ledger.add(vertex, predecessor, hops);
        self.stats.record_finalized();
        self.queue.push_back((vertex, hops));
        self.stats.record_push(self.queue.len());
    }
}

/// Run BFS from `root`, stopping as soon as `target` is discovered.
fn explore(provider: &dyn GraphProvider, root: VertexId, target: Option<VertexId>) -> BfsState {
    let mut state = BfsState::new(root);
    if target == Some(root) {
        return state;
    }

    while let Some((current, hops)) = state.queue.pop_front() {
        state.stats.record_pop();

        for Adjacent { vertex: neighbor, .. } in provider.adjacent(current) {
            if state.ledger.contains(neighbor) {
                continue;
            }
            state.discover(neighbor, Some(current), hops + 1);
            tracing::trace!(vertex = %neighbor, predecessor = %current, hops = hops + 1, "discovered");

            if target == Some(neighbor) {
                return state;
            }
        }
    }

    state
}

/// Breadth-first spanning tree of everything reachable from `root`.
///
/// Edge weights are ignored; each entry carries its minimum hop count.
#[tracing::instrument(skip(provider), fields(root = %root))]
pub fn bfs_spanning_tree(provider: &dyn GraphProvider, root: VertexId) -> Result<SpanningTree> {
    if !provider.contains_vertex(root) {
        return Err(WayfinderError::VertexNotFound { id: root });
    }

    let state = explore(provider, root, None);
    log_search_stats!(state.stats, "bfs");

    Ok(build_spanning_tree(root, &state.ledger))
}

/// Fewest-hop path from `from` to `to`.
///
/// The path weight is the sum of the traversed edge weights, which need not
/// be minimal. Returns `Ok(None)` when `to` is unreachable.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn bfs_find_path(
    provider: &dyn GraphProvider,
    from: VertexId,
    to: VertexId,
) -> Result<Option<Path>> {
    for endpoint in [from, to] {
        if !provider.contains_vertex(endpoint) {
            return Err(WayfinderError::VertexNotFound { id: endpoint });
        }
    }

    let state = explore(provider, from, Some(to));
    log_search_stats!(state.stats, "bfs_path");

    let Some(route) = reconstruct_route(&state.ledger, from, to) else {
        tracing::debug!("destination unreachable");
        return Ok(None);
    };

    let weight = route
        .windows(2)
        .map(|step| edge_weight(provider, step[0], step[1]))
        .sum();
    Ok(Some(Path::new(route, weight)))
}

fn edge_weight(provider: &dyn GraphProvider, a: VertexId, b: VertexId) -> u64 {
    provider
        .adjacent(a)
        .into_iter()
        .find(|record| record.vertex == b)
        .map(|record| record.weight)
        .unwrap_or_else(|| panic!("path step {a} -> {b} is not an edge"))
}
