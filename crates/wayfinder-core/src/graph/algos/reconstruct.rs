//! Turn a finished discovery ledger into caller-visible results

use crate::graph::ledger::DiscoveryLedger;
use crate::graph::types::{Path, SpanningTree, TreeEntry, VertexId};

/// Vertex sequence from `source` to `destination` following ledger
/// predecessors, or `None` if `destination` was never recorded.
///
/// # Panics
///
/// Panics if the predecessor chain leaves the ledger or loops before it
/// reaches `source`.
pub fn reconstruct_route(
    ledger: &DiscoveryLedger,
    source: VertexId,
    destination: VertexId,
) -> Option<Vec<VertexId>> {
    if !ledger.contains(destination) {
        return None;
    }

    let mut route = vec![destination];
    let mut current = destination;
    while current != source {
        let entry = ledger
            .get(current)
            .unwrap_or_else(|| panic!("vertex {current} reached by backtrace is not in ledger"));
        current = entry.predecessor.unwrap_or_else(|| {
            panic!("predecessor chain from {destination} stops at {current} before {source}")
        });
        route.push(current);
        assert!(
            route.len() <= ledger.len(),
            "predecessor chain from {destination} loops"
        );
    }

    route.reverse();
    Some(route)
}

/// Path whose weight is the destination's ledger metric.
pub fn reconstruct_path(
    ledger: &DiscoveryLedger,
    source: VertexId,
    destination: VertexId,
) -> Option<Path> {
    let route = reconstruct_route(ledger, source, destination)?;
    let weight = ledger.metric(destination)?;
    Some(Path::new(route, weight))
}

/// One tree entry per ledger entry, in discovery order.
pub fn build_spanning_tree(root: VertexId, ledger: &DiscoveryLedger) -> SpanningTree {
    let entries = ledger
        .iter()
        .map(|entry| TreeEntry {
            vertex: entry.vertex,
            predecessor: entry.predecessor,
            hops: entry.metric,
        })
        .collect();
    SpanningTree::new(root, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: u64) -> VertexId {
        VertexId::new(raw)
    }

    /// Ledger for a finished weighted search from v0
    fn sample_ledger() -> DiscoveryLedger {
        let mut ledger = DiscoveryLedger::new();
        ledger.add(v(0), None, 0);
        ledger.add(v(1), Some(v(0)), 1);
        ledger.add(v(3), Some(v(0)), 1);
        ledger.add(v(2), Some(v(1)), 2);
        ledger.add(v(4), Some(v(2)), 3);
        ledger
    }

    #[test]
    fn test_reconstruct_path() {
        let ledger = sample_ledger();
        let path = reconstruct_path(&ledger, v(0), v(4)).unwrap();

        assert_eq!(path.vertices(), &[v(0), v(1), v(2), v(4)]);
        assert_eq!(path.length(), 3);
        assert_eq!(path.weight(), 3);
    }

    #[test]
    fn test_reconstruct_source_only() {
        let ledger = sample_ledger();
        let path = reconstruct_path(&ledger, v(0), v(0)).unwrap();
        assert_eq!(path.vertices(), &[v(0)]);
        assert_eq!(path.length(), 0);
        assert_eq!(path.weight(), 0);
    }

    #[test]
    fn test_unrecorded_destination() {
        let ledger = sample_ledger();
        assert!(reconstruct_path(&ledger, v(0), v(7)).is_none());
        assert!(reconstruct_route(&ledger, v(0), v(7)).is_none());
    }

    #[test]
    #[should_panic(expected = "stops at")]
    fn test_chain_not_reaching_source_panics() {
        let ledger = sample_ledger();
        reconstruct_route(&ledger, v(3), v(4));
    }

    #[test]
    #[should_panic(expected = "not in ledger")]
    fn test_chain_leaving_ledger_panics() {
        let mut ledger = DiscoveryLedger::new();
        ledger.add(v(0), None, 0);
        ledger.add(v(2), Some(v(1)), 2);
        reconstruct_route(&ledger, v(0), v(2));
    }

    #[test]
    #[should_panic(expected = "loops")]
    fn test_cyclic_chain_panics() {
        let mut ledger = DiscoveryLedger::new();
        ledger.add(v(1), Some(v(2)), 1);
        ledger.add(v(2), Some(v(1)), 1);
        reconstruct_route(&ledger, v(0), v(1));
    }

    #[test]
    fn test_build_spanning_tree() {
        let ledger = sample_ledger();
        let tree = build_spanning_tree(v(0), &ledger);

        assert_eq!(tree.root(), v(0));
        assert_eq!(tree.count(), 5);
        let order: Vec<u64> = tree.iter().map(|e| e.vertex.value()).collect();
        assert_eq!(order, vec![0, 1, 3, 2, 4]);
        assert_eq!(tree.get(v(4)).unwrap().predecessor, Some(v(2)));
        assert_eq!(tree.get(v(0)).unwrap().predecessor, None);
    }
}
