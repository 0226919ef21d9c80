//
//  types.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use serde::Serialize;
use std::fmt;

/// Stable index of a registered node. Assigned sequentially from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A donor or organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    pub name: String,
}

/// Which attribute of an edge a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAttr {
    /// Transfer time in days, written by `donate`.
    Weight,
    /// Flow capacity, written by `add_capacity`.
    Capacity,
}

/// Attributes stored for one ordered node pair. Zero means "absent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    pub weight: i64,
    pub capacity: i64,
}

impl EdgeData {
    pub fn set(&mut self, attr: EdgeAttr, value: i64) {
        match attr {
            EdgeAttr::Weight => self.weight = value,
            EdgeAttr::Capacity => self.capacity = value,
        }
    }

    /// Both attributes are zero, i.e. the edge does not exist.
    pub fn is_empty(&self) -> bool {
        self.weight == 0 && self.capacity == 0
    }
}

// ─── Listing ────────────────────────────────────────────────

/// One outgoing edge as shown in a graph listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub target: String,
    pub weight: i64,
    pub capacity: i64,
}

/// A node and its outgoing connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeConnections {
    pub name: String,
    pub connections: Vec<Connection>,
}

/// Snapshot of the whole graph, nodes in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphListing {
    pub nodes: Vec<NodeConnections>,
}

// ─── Query Results ──────────────────────────────────────────

/// A shortest path with its total transfer time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub days: i64,
    pub path: Vec<String>,
}

/// Outcome of a shortest-path query between two registered nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Route {
    Found(PathReport),
    Unreachable,
}

impl Route {
    pub fn days(&self) -> Option<i64> {
        match self {
            Route::Found(report) => Some(report.days),
            Route::Unreachable => None,
        }
    }
}

/// The expansion step that flagged a fraud cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosingEdge {
    /// Root of the BFS launch that found the cycle.
    pub root: String,
    pub from: String,
    pub to: String,
}

/// Outcome of a fraud check on one target node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FraudCheck {
    pub target: String,
    /// Number of BFS launches performed before the verdict.
    pub launches: usize,
    pub closing_edge: Option<ClosingEdge>,
}

impl FraudCheck {
    pub fn is_fraud(&self) -> bool {
        self.closing_edge.is_some()
    }
}

/// One augmenting path pushed by the flow solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentingPath {
    pub nodes: Vec<String>,
    pub bottleneck: i64,
}

/// Result of a maximum-flow query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    pub source: String,
    pub sink: String,
    pub total: i64,
    pub paths: Vec<AugmentingPath>,
}
