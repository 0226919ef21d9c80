//! # donorgraph
//!
//! Donation tracking over a directed graph of donors and organizations.
//!
//! ## Key Features
//!
//! - **Shortest transfer days**: Dijkstra over donation edges
//! - **Fraud check**: BFS reachability heuristic for donation loops
//! - **Maximum flow**: Edmonds-Karp over edge capacities
//! - **Owned graphs**: every graph is a plain value, no global state
//!
//! ## Quick Start
//!
//! ```rust
//! use donorgraph::{DonationGraph, Route};
//!
//! let mut graph = DonationGraph::new();
//! for name in ["A", "B", "C"] {
//!     graph.add_node(name).unwrap();
//! }
//! graph.donate("A", "B", 5).unwrap();
//! graph.donate("B", "C", 3).unwrap();
//!
//! let route = graph.shortest_path("A", "C").unwrap();
//! assert_eq!(route.days(), Some(8));
//! assert!(matches!(graph.shortest_path("C", "A").unwrap(), Route::Unreachable));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod seed;

// Re-exports for convenience
pub use config::{DonorGraphConfig, GraphConfig, SeedConfig, SeedEdge};
pub use error::{ConfigError, GraphError, Result};
pub use graph::{
    DonationGraph, EdgeAttr, EdgeData, FlowReport, FraudCheck, GraphListing, NodeId, PathReport,
    Route,
};
