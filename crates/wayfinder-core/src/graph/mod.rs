//! Graph storage, traversal and path-finding
//!
//! - Adjacency store for weighted, undirected graphs
//! - Discovery ledger shared by the explorers
//! - BFS spanning trees and Dijkstra shortest paths
//! - Graph files (JSON/TOML) for loading and saving graphs
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod file;
pub mod ledger;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_find_path, bfs_spanning_tree, dijkstra, dijkstra_with};
pub use file::{EdgeRejection, EdgeSpec, GraphFile};
pub use ledger::{DiscoveryLedger, LedgerEntry};
pub use store::{Graph, Neighbors};
pub use traversal::GraphProvider;
pub use types::{Adjacent, Path, SearchOptions, SpanningTree, TreeEntry, VertexId, Weight};
