//
//  engine.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::types::*;
use crate::error::{GraphError, Result};

/// The donation graph: all nodes, edges, and the name index.
#[derive(Debug, Clone, Default)]
pub struct DonationGraph {
    /// Directed graph; node indices are the public `NodeId`s.
    pub(crate) graph: DiGraph<NodeData, EdgeData>,
    /// Index: node name -> node indexes in registration order.
    pub(crate) name_index: HashMap<String, Vec<NodeIndex>>,
    /// Optional registration limit. `None` means unbounded.
    pub(crate) max_nodes: Option<usize>,
}

impl DonationGraph {
    /// Create a new empty graph with no node limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph that rejects registrations past `limit` nodes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            max_nodes: Some(limit),
            ..Self::default()
        }
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    // ─── Node Operations ────────────────────────────────────────

    /// Register a node and return its index.
    ///
    /// Names are not deduplicated: registering the same name twice yields two
    /// nodes, and lookups resolve to the first.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if let Some(limit) = self.max_nodes {
            if self.graph.node_count() >= limit {
                warn!(%name, limit, "node limit reached, registration rejected");
                return Err(GraphError::CapacityExceeded { limit });
            }
        }

        let idx = self.graph.add_node(NodeData { name: name.clone() });
        debug!(%name, index = idx.index(), "node registered");
        self.name_index.entry(name).or_default().push(idx);
        Ok(NodeId(idx.index()))
    }

    /// Exact, case-sensitive lookup. The first registration wins.
    pub fn find_index(&self, name: &str) -> Option<NodeId> {
        self.name_index
            .get(name)
            .and_then(|indexes| indexes.first())
            .map(|idx| NodeId(idx.index()))
    }

    /// Like `find_index`, but unresolved names become `NodeNotFound`.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.find_index(name).ok_or_else(|| {
            debug!(%name, "node not found");
            GraphError::NodeNotFound(name.to_string())
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Name of a registered node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.graph
            .node_weight(NodeIndex::new(id.index()))
            .map(|node| node.name.as_str())
    }

    /// All node ids in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices().map(|idx| NodeId(idx.index()))
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Overwrite one attribute of the edge `from -> to`.
    ///
    /// The other attribute is left untouched. An edge whose attributes are
    /// both zero is dropped. Ids not handed out by this graph are rejected.
    pub fn set_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        attr: EdgeAttr,
        value: i64,
    ) -> Result<()> {
        for id in [from, to] {
            if !self.contains(id) {
                debug!(index = id.index(), "edge write to unregistered node");
                return Err(GraphError::NodeNotFound(id.to_string()));
            }
        }
        let (a, b) = (NodeIndex::new(from.index()), NodeIndex::new(to.index()));

        match self.graph.find_edge(a, b) {
            Some(edge) => {
                let data = &mut self.graph[edge];
                data.set(attr, value);
                if data.is_empty() {
                    self.graph.remove_edge(edge);
                    debug!(from = from.index(), to = to.index(), "edge removed");
                } else {
                    debug!(from = from.index(), to = to.index(), ?attr, value, "edge updated");
                }
            }
            None if value != 0 => {
                let mut data = EdgeData::default();
                data.set(attr, value);
                self.graph.add_edge(a, b, data);
                debug!(from = from.index(), to = to.index(), ?attr, value, "edge added");
            }
            None => {}
        }
        Ok(())
    }

    /// Both attributes of `from -> to`; zeros if never set.
    pub fn edge(&self, from: NodeId, to: NodeId) -> EdgeData {
        self.graph
            .find_edge(NodeIndex::new(from.index()), NodeIndex::new(to.index()))
            .map(|edge| self.graph[edge])
            .unwrap_or_default()
    }

    pub fn weight(&self, from: NodeId, to: NodeId) -> i64 {
        self.edge(from, to).weight
    }

    pub fn capacity(&self, from: NodeId, to: NodeId) -> i64 {
        self.edge(from, to).capacity
    }

    /// Non-empty outgoing edges of `from`, ascending by target index.
    pub fn outgoing(&self, from: NodeId) -> Vec<(NodeId, EdgeData)> {
        if !self.contains(from) {
            return Vec::new();
        }
        let mut edges: Vec<(NodeId, EdgeData)> = self
            .graph
            .edges(NodeIndex::new(from.index()))
            .filter(|edge| !edge.weight().is_empty())
            .map(|edge| (NodeId(edge.target().index()), *edge.weight()))
            .collect();
        edges.sort_by_key(|(target, _)| *target);
        edges
    }

    // ─── Internal Helpers ───────────────────────────────────────

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.index() < self.graph.node_count()
    }

    /// Name for display; every id handed out by this graph resolves.
    pub(crate) fn label(&self, id: NodeId) -> String {
        self.name(id).unwrap_or_default().to_string()
    }
}
