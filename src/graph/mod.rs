//! Donation graph module, the engine behind every query.
//!
//! Provides the node registry and edge store (`engine`), name-based
//! mutations, the graph listing, and the three algorithms: shortest
//! transfer days, the fraud cycle check, and maximum flow.

pub mod engine;
pub mod flow;
pub mod fraud;
pub mod mutation;
pub mod path;
pub mod query;
pub mod types;

pub use engine::DonationGraph;
pub use types::{
    AugmentingPath, ClosingEdge, Connection, EdgeAttr, EdgeData, FlowReport, FraudCheck,
    GraphListing, NodeConnections, NodeData, NodeId, PathReport, Route,
};
