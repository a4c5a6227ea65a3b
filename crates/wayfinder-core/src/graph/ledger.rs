//! Discovery ledger shared by the explorers
//!
//! Records, for each discovered vertex, the vertex it was reached from and
//! its cumulative metric (hop count for BFS, path weight for Dijkstra).
//! Membership doubles as the "already discovered / finalized" test.

use serde::Serialize;
use std::collections::HashMap;

use crate::graph::types::VertexId;

/// One ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub vertex: VertexId,
    /// `None` for the search root
    pub predecessor: Option<VertexId>,
    pub metric: u64,
}

/// Map from vertex to its discovery record, iterable in discovery order
#[derive(Debug, Clone, Default)]
pub struct DiscoveryLedger {
    entries: Vec<LedgerEntry>,
    index: HashMap<VertexId, usize>,
}

impl DiscoveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Record `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is already recorded.
    pub fn add(&mut self, vertex: VertexId, predecessor: Option<VertexId>, metric: u64) {
        let position = self.entries.len();
        let previous = self.index.insert(vertex, position);
        assert!(
            previous.is_none(),
            "vertex {vertex} recorded twice in discovery ledger"
        );
        self.entries.push(LedgerEntry {
            vertex,
            predecessor,
            metric,
        });
    }

    pub fn get(&self, vertex: VertexId) -> Option<&LedgerEntry> {
        self.index.get(&vertex).map(|&position| &self.entries[position])
    }

    /// Predecessor of `vertex`; `None` for the root and for unrecorded vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex).and_then(|entry| entry.predecessor)
    }

    pub fn metric(&self, vertex: VertexId) -> Option<u64> {
        self.get(vertex).map(|entry| entry.metric)
    }

    /// Entries in the order they were recorded
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DiscoveryLedger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
