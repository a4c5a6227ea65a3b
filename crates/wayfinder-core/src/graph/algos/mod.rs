//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first spanning trees and fewest-hop paths
//! - `dijkstra`: Minimum-weight paths
//! - `reconstruct`: Ledger backtracing shared by both

pub mod bfs;
pub mod dijkstra;
pub mod reconstruct;

pub use bfs::{bfs_find_path, bfs_spanning_tree};
pub use dijkstra::{dijkstra, dijkstra_with, FrontierItem};
pub use reconstruct::{build_spanning_tree, reconstruct_path, reconstruct_route};
