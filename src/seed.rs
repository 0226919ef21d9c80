//! Initial dataset: the donors, organizations and donations a fresh
//! graph starts with.

use tracing::info;

use crate::config::{SeedConfig, SeedEdge};
use crate::error::Result;
use crate::graph::DonationGraph;

const BUILTIN_NODES: &[&str] = &[
    "sayed", "anik", "bably", "israt", "nabila", "abir", "jiyon", "punni", "tanveer",
];

const BUILTIN_DONATIONS: &[(&str, &str, i64)] = &[
    ("sayed", "anik", 5),
    ("tanveer", "punni", 5),
    ("anik", "israt", 3),
    ("bably", "jiyon", 3),
    ("jiyon", "israt", 4),
    ("israt", "sayed", 6),
    ("anik", "punni", 4),
];

pub fn builtin_nodes() -> Vec<String> {
    BUILTIN_NODES.iter().map(|name| name.to_string()).collect()
}

pub fn builtin_donations() -> Vec<SeedEdge> {
    BUILTIN_DONATIONS
        .iter()
        .map(|(from, to, days)| SeedEdge::new(from, to, *days))
        .collect()
}

/// Register the seed nodes, then donations, then capacities.
///
/// Does nothing when seeding is disabled. Stops at the first failure
/// (unknown name or node limit); earlier entries stay applied.
pub fn populate(graph: &mut DonationGraph, seed: &SeedConfig) -> Result<()> {
    if !seed.enabled {
        return Ok(());
    }

    for name in &seed.nodes {
        graph.add_node(name.as_str())?;
    }
    for edge in &seed.donations {
        graph.donate(&edge.from, &edge.to, edge.value)?;
    }
    for edge in &seed.capacities {
        graph.add_capacity(&edge.from, &edge.to, edge.value)?;
    }

    info!(
        nodes = seed.nodes.len(),
        donations = seed.donations.len(),
        capacities = seed.capacities.len(),
        "seed dataset loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{NodeId, Route};

    fn seeded() -> DonationGraph {
        let mut graph = DonationGraph::new();
        populate(&mut graph, &SeedConfig::default()).unwrap();
        graph
    }

    #[test]
    fn test_builtin_seed() {
        let graph = seeded();

        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.find_index("sayed"), Some(NodeId(0)));
        assert_eq!(graph.find_index("tanveer"), Some(NodeId(8)));
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), 5);
        assert!(graph.outgoing(NodeId(4)).is_empty(), "nabila gives nothing");
    }

    #[test]
    fn test_seeded_queries() {
        let graph = seeded();

        // sayed -> anik -> israt
        assert_eq!(graph.shortest_path("sayed", "israt").unwrap().days(), Some(8));
        assert_eq!(
            graph.shortest_path("sayed", "tanveer").unwrap(),
            Route::Unreachable
        );
        assert!(graph.detect_fraud("sayed").unwrap().is_fraud());
        assert!(!graph.detect_fraud("nabila").unwrap().is_fraud());
        assert_eq!(graph.max_flow("sayed", "punni").unwrap().total, 0);
    }

    #[test]
    fn test_disabled_seed() {
        let mut graph = DonationGraph::new();
        let seed = SeedConfig {
            enabled: false,
            ..SeedConfig::default()
        };
        populate(&mut graph, &seed).unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_seed_respects_node_limit() {
        let mut graph = DonationGraph::with_limit(3);
        let err = populate(&mut graph, &SeedConfig::default()).unwrap_err();

        assert_eq!(err, GraphError::CapacityExceeded { limit: 3 });
        assert_eq!(graph.node_count(), 3);
    }
}
