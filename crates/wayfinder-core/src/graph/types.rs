use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::WayfinderError;
use crate::queue::QueueKind;

/// Edge weight. Always positive; zero is never stored.
pub type Weight = u64;

/// Opaque vertex handle.
///
/// Handles are issued by [`Graph::add_vertex`](crate::graph::Graph::add_vertex)
/// in strictly increasing order starting at 0 and are never reused after the
/// vertex is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    pub const fn new(raw: u64) -> Self {
        VertexId(raw)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        VertexId(raw)
    }
}

/// Accepts `3` or `v3`.
impl FromStr for VertexId {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('v').unwrap_or(s);
        digits
            .parse::<u64>()
            .map(VertexId)
            .map_err(|_| WayfinderError::invalid_value("vertex id", s))
    }
}

/// Options for the weighted explorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Backing for the Dijkstra frontier
    pub queue: QueueKind,
}

/// One adjacency record: the far end of an edge and its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// A source-to-destination route produced by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    vertices: Vec<VertexId>,
    length: usize,
    weight: u64,
}

impl Path {
    /// `vertices` runs source to destination and is never empty.
    pub(crate) fn new(vertices: Vec<VertexId>, weight: u64) -> Self {
        assert!(!vertices.is_empty(), "a path holds at least its source");
        let length = vertices.len() - 1;
        Path {
            vertices,
            length,
            weight,
        }
    }

    /// Number of edges traversed
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total weight of the traversed edges
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn destination(&self) -> VertexId {
        self.vertices[self.length]
    }

    /// Visit each vertex in source-to-destination order
    pub fn for_each(&self, mut visit: impl FnMut(VertexId)) {
        for &vertex in &self.vertices {
            visit(vertex);
        }
    }
}

/// One reachable vertex in a spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub vertex: VertexId,
    /// `None` only for the root
    pub predecessor: Option<VertexId>,
    pub hops: u64,
}

/// Breadth-first spanning tree, entries in discovery order
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    root: VertexId,
    entries: Vec<TreeEntry>,
    #[serde(skip)]
    index: HashMap<VertexId, usize>,
}

impl SpanningTree {
    pub(crate) fn new(root: VertexId, entries: Vec<TreeEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.vertex, position))
            .collect();
        SpanningTree {
            root,
            entries,
            index,
        }
    }

    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Number of vertices reachable from the root, root included
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn get(&self, vertex: VertexId) -> Option<&TreeEntry> {
        self.index.get(&vertex).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Tree route from the root to `vertex`, or `None` if it was not reached.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let mut current = self.get(vertex)?;
        let mut route = vec![current.vertex];
        while let Some(predecessor) = current.predecessor {
            current = self
                .get(predecessor)
                .unwrap_or_else(|| panic!("tree predecessor {predecessor} missing"));
            route.push(current.vertex);
        }
        route.reverse();
        Some(route)
    }
}
