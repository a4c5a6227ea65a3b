//! Mutable adjacency store for weighted, undirected graphs
//!
//! Every undirected edge is kept as two adjacency records, one in each
//! endpoint's list, carrying the same weight. The store checks that symmetry
//! with assertions on every lookup that touches both sides.

use std::collections::BTreeMap;

use crate::graph::types::{Adjacent, VertexId, Weight};

/// Weighted, undirected graph keyed by [`VertexId`]
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<VertexId, Vec<Adjacent>>,
    next_id: u64,
    edge_count: usize,
}

/// Iterator over the adjacency records of one vertex, in insertion order
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: std::slice::Iter<'a, Adjacent>,
}

impl Iterator for Neighbors<'_> {
    type Item = Adjacent;

    fn next(&mut self) -> Option<Adjacent> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Live vertex ids in increasing order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected edge once, as `(lower, higher, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(&vertex, records)| {
            records
                .iter()
                .filter(move |record| vertex < record.vertex)
                .map(move |record| (vertex, record.vertex, record.weight))
        })
    }

    /// Create an isolated vertex and return its handle.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_id);
        self.next_id += 1;
        self.adjacency.insert(id, Vec::new());
        tracing::trace!(vertex = %id, "add_vertex");
        id
    }

    /// Remove a vertex together with every edge incident to it.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(records) = self.adjacency.remove(&id) else {
            return false;
        };

        for record in &records {
            let removed = self.detach(record.vertex, id);
            assert_eq!(
                removed.map(|r| r.weight),
                Some(record.weight),
                "asymmetric adjacency between {} and {}",
                id,
                record.vertex
            );
            self.edge_count -= 1;
        }

        tracing::trace!(vertex = %id, removed_edges = records.len(), "remove_vertex");
        true
    }

    /// Insert the undirected edge `a - b`.
    ///
    /// Fails if either vertex is missing, `a == b`, or `weight` is zero.
    /// Inserting an edge that already exists succeeds without changing the
    /// graph, even when `weight` differs from the stored one.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> bool {
        if a == b || weight == 0 || !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }
        if self.has_edge(a, b) {
            return true;
        }

        if let Some(records) = self.adjacency.get_mut(&a) {
            records.push(Adjacent { vertex: b, weight });
        }
        if let Some(records) = self.adjacency.get_mut(&b) {
            records.push(Adjacent { vertex: a, weight });
        }
        self.edge_count += 1;

        tracing::trace!(a = %a, b = %b, weight, "add_edge");
        true
    }

    /// Remove the undirected edge `a - b`; `false` if there is no such edge.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let Some(forward) = self.detach(a, b) else {
            return false;
        };
        let backward = self.detach(b, a);
        assert_eq!(
            backward.map(|r| r.weight),
            Some(forward.weight),
            "asymmetric adjacency between {a} and {b}"
        );
        self.edge_count -= 1;
        true
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Weight of the edge `a - b`, identical from either side.
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        let forward = self.record(a, b).map(|r| r.weight);
        let backward = self.record(b, a).map(|r| r.weight);
        assert_eq!(
            forward, backward,
            "asymmetric adjacency between {a} and {b}"
        );
        forward
    }

    /// Number of incident edges, or `None` for a missing vertex
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.adjacency.get(&id).map(Vec::len)
    }

    /// Adjacency records of `id`; empty for a missing vertex.
    pub fn neighbors(&self, id: VertexId) -> Neighbors<'_> {
        let records = self.adjacency.get(&id).map_or(&[][..], Vec::as_slice);
        Neighbors {
            inner: records.iter(),
        }
    }

    /// Invoke `visit(neighbor, weight)` for every adjacency record of `id`.
    pub fn for_each_adjacent(&self, id: VertexId, mut visit: impl FnMut(VertexId, Weight)) {
        for record in self.neighbors(id) {
            visit(record.vertex, record.weight);
        }
    }

    fn record(&self, from: VertexId, to: VertexId) -> Option<&Adjacent> {
        self.adjacency
            .get(&from)?
            .iter()
            .find(|record| record.vertex == to)
    }

    /// Drop the record for `to` from `from`'s list, returning it.
    fn detach(&mut self, from: VertexId, to: VertexId) -> Option<Adjacent> {
        let records = self.adjacency.get_mut(&from)?;
        let position = records.iter().position(|record| record.vertex == to)?;
        Some(records.remove(position))
    }
}

#[cfg(test)]
mod tests;
