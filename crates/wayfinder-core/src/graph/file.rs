//! Graph files
//!
//! A graph file names a vertex count and an edge list. Vertex `n` in the file
//! becomes the `n`th vertex added to the store, so a freshly loaded graph has
//! ids `0..vertices`. The format is chosen by extension:
//!
//! ```toml
//! vertices = 3
//! edges = [
//!     { a = 0, b = 1, weight = 4 },
//!     { a = 1, b = 2, weight = 1 },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::{Result, WayfinderError};
use crate::graph::store::Graph;
use crate::graph::types::{VertexId, Weight};

/// One undirected edge as written in a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub a: u64,
    pub b: u64,
    pub weight: Weight,
}

/// Serialized form of a [`Graph`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: u64,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Why an edge in a graph file could not be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    #[error("edge #{index} ({a}-{b}) names a vertex outside 0..{vertices}")]
    UnknownVertex {
        index: usize,
        a: u64,
        b: u64,
        vertices: u64,
    },

    #[error("edge #{index} ({a}-{b}) is a self-loop")]
    SelfLoop { index: usize, a: u64, b: u64 },

    #[error("edge #{index} ({a}-{b}) has zero weight")]
    ZeroWeight { index: usize, a: u64, b: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
            _ => crate::bail_graph_file!(path, "unsupported extension (expected .json or .toml)"),
        }
    }
}

impl GraphFile {
    /// Read a graph file, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        if !path.exists() {
            return Err(WayfinderError::not_found("graph file", path.display()));
        }
        let content = fs::read_to_string(path)?;

        let file: GraphFile = match format {
            FileFormat::Json => serde_json::from_str(&content)
                .map_err(|e| WayfinderError::graph_file(path, e))?,
            FileFormat::Toml => {
                toml::from_str(&content).map_err(|e| WayfinderError::graph_file(path, e))?
            }
        };
        Ok(file)
    }

    /// Read a graph file and build the graph it describes.
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load_graph(path: &Path) -> Result<Graph> {
        let graph = Self::load(path)?
            .to_graph()
            .map_err(|rejection| WayfinderError::graph_file(path, rejection))?;
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_loaded"
        );
        Ok(graph)
    }

    /// Write this file in the format implied by `path`'s extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Build a graph with vertices `0..self.vertices` and every listed edge.
    ///
    /// Repeated edges are accepted; the first weight listed wins.
    pub fn to_graph(&self) -> std::result::Result<Graph, EdgeRejection> {
        let mut graph = Graph::new();
        for _ in 0..self.vertices {
            graph.add_vertex();
        }

        for (index, edge) in self.edges.iter().enumerate() {
            let EdgeSpec { a, b, weight } = *edge;
            if a >= self.vertices || b >= self.vertices {
                return Err(EdgeRejection::UnknownVertex {
                    index,
                    a,
                    b,
                    vertices: self.vertices,
                });
            }
            if a == b {
                return Err(EdgeRejection::SelfLoop { index, a, b });
            }
            if weight == 0 {
                return Err(EdgeRejection::ZeroWeight { index, a, b });
            }
            let inserted = graph.add_edge(VertexId::new(a), VertexId::new(b), weight);
            debug_assert!(inserted, "validated edge rejected by store");
        }

        Ok(graph)
    }

    /// Describe `graph`, renumbering live vertices densely in id order.
    pub fn from_graph(graph: &Graph) -> Self {
        let renumbered: HashMap<VertexId, u64> = graph
            .vertices()
            .enumerate()
            .map(|(position, id)| (id, position as u64))
            .collect();

        let edges = graph
            .edges()
            .map(|(a, b, weight)| EdgeSpec {
                a: renumbered[&a],
                b: renumbered[&b],
                weight,
            })
            .collect();

        GraphFile {
            vertices: renumbered.len() as u64,
            edges,
        }
    }
}
