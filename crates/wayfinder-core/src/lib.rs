//! Wayfinder Core Library
//!
//! Shortest-path and spanning-tree engine over weighted, undirected graphs.
//!
//! - [`graph::Graph`]: mutable adjacency store
//! - [`queue`]: comparator-ordered frontier queues
//! - [`graph::DiscoveryLedger`]: per-vertex predecessor and metric records
//! - [`graph::bfs_spanning_tree`] and [`graph::dijkstra`]: the explorers

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod queue;
