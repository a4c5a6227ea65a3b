use crate::graph::store::Graph;
use crate::graph::types::{Adjacent, VertexId};

/// Trait for providing graph adjacency to the explorers
pub trait GraphProvider {
    fn contains_vertex(&self, id: VertexId) -> bool;
    fn adjacent(&self, id: VertexId) -> Vec<Adjacent>;
}

impl GraphProvider for Graph {
    fn contains_vertex(&self, id: VertexId) -> bool {
        Graph::contains_vertex(self, id)
    }

    fn adjacent(&self, id: VertexId) -> Vec<Adjacent> {
        self.neighbors(id).collect()
    }
}
