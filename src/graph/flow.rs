//
//  flow.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

use super::engine::DonationGraph;
use super::types::*;
use crate::error::Result;

/// Residual capacities, `residual[u][v]`. Reverse entries exist for every
/// forward edge so BFS can walk them once flow has been pushed.
type Residual = Vec<BTreeMap<usize, i64>>;

impl DonationGraph {
    /// Maximum flow from `source` to `sink` (Edmonds-Karp).
    ///
    /// Uses edge capacities only; transfer days never count as capacity.
    pub fn max_flow(&self, source: &str, sink: &str) -> Result<FlowReport> {
        let source_id = self.resolve(source)?;
        let sink_id = self.resolve(sink)?;

        let mut residual = self.residual_graph();
        let mut parent: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut total: i64 = 0;
        let mut paths = Vec::new();

        while augmenting_path(&residual, source_id.index(), sink_id.index(), &mut parent) {
            let mut chain = vec![sink_id.index()];
            let mut bottleneck = i64::MAX;
            let mut v = sink_id.index();
            while v != source_id.index() {
                let Some(u) = parent[v] else { break };
                bottleneck = bottleneck.min(residual[u].get(&v).copied().unwrap_or(0));
                chain.push(u);
                v = u;
            }

            for pair in chain.windows(2) {
                let (v, u) = (pair[0], pair[1]);
                *residual[u].entry(v).or_insert(0) -= bottleneck;
                *residual[v].entry(u).or_insert(0) += bottleneck;
            }

            chain.reverse();
            debug!(bottleneck, hops = chain.len() - 1, "augmenting path pushed");
            paths.push(AugmentingPath {
                nodes: chain.into_iter().map(|i| self.label(NodeId(i))).collect(),
                bottleneck,
            });
            total = total.saturating_add(bottleneck);
        }

        debug!(%source, %sink, total, paths = paths.len(), "max flow computed");
        Ok(FlowReport {
            source: source.to_string(),
            sink: sink.to_string(),
            total,
            paths,
        })
    }

    fn residual_graph(&self) -> Residual {
        let mut residual: Residual = vec![BTreeMap::new(); self.node_count()];
        for u in self.node_ids() {
            for (v, edge) in self.outgoing(u) {
                if edge.capacity <= 0 {
                    continue;
                }
                residual[u.index()].insert(v.index(), edge.capacity);
                residual[v.index()].entry(u.index()).or_insert(0);
            }
        }
        residual
    }
}

/// BFS over positive residual capacity, filling `parent`. True if `sink`
/// was reached.
fn augmenting_path(
    residual: &Residual,
    source: usize,
    sink: usize,
    parent: &mut [Option<usize>],
) -> bool {
    parent.fill(None);
    let mut visited = vec![false; residual.len()];
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    while let Some(u) = queue.pop_front() {
        for (&v, &capacity) in &residual[u] {
            if visited[v] || capacity <= 0 {
                continue;
            }
            parent[v] = Some(u);
            visited[v] = true;
            if v == sink {
                return true;
            }
            queue.push_back(v);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn network(names: &[&str], capacities: &[(&str, &str, i64)]) -> DonationGraph {
        let mut graph = DonationGraph::new();
        for name in names {
            graph.add_node(*name).unwrap();
        }
        for (from, to, capacity) in capacities {
            graph.add_capacity(from, to, *capacity).unwrap();
        }
        graph
    }

    fn diamond() -> DonationGraph {
        network(
            &["S", "M1", "M2", "T"],
            &[("S", "M1", 4), ("M1", "T", 4), ("S", "M2", 3), ("M2", "T", 3)],
        )
    }

    #[test]
    fn test_diamond_max_flow() {
        let report = diamond().max_flow("S", "T").unwrap();

        assert_eq!(report.total, 7);
        assert_eq!(report.paths.len(), 2);
        assert_eq!(report.paths[0].nodes, vec!["S", "M1", "T"]);
        assert_eq!(report.paths[0].bottleneck, 4);
        assert_eq!(report.paths[1].nodes, vec!["S", "M2", "T"]);
        assert_eq!(report.paths[1].bottleneck, 3);
    }

    #[test]
    fn test_days_do_not_change_flow() {
        let mut graph = diamond();
        graph.donate("S", "M1", 1).unwrap();
        graph.donate("M2", "T", 30).unwrap();
        graph.donate("M1", "M2", 2).unwrap();

        assert_eq!(graph.max_flow("S", "T").unwrap().total, 7);
    }

    #[test]
    fn test_flow_uses_reverse_residual() {
        // The first path S-A-B-T takes A-B; the second one can only reach T
        // by cancelling that flow through B-A.
        let graph = network(
            &["S", "A", "B", "C", "D", "T"],
            &[
                ("S", "A", 1),
                ("A", "B", 1),
                ("B", "T", 1),
                ("S", "C", 1),
                ("C", "B", 1),
                ("A", "D", 1),
                ("D", "T", 1),
            ],
        );
        let report = graph.max_flow("S", "T").unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.paths[0].nodes, vec!["S", "A", "B", "T"]);
        assert_eq!(report.paths[1].nodes, vec!["S", "C", "B", "A", "D", "T"]);
    }

    #[test]
    fn test_bottleneck_limits_flow() {
        let graph = network(
            &["S", "A", "T"],
            &[("S", "A", 10), ("A", "T", 2)],
        );
        let report = graph.max_flow("S", "T").unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.paths.len(), 1);
    }

    #[test]
    fn test_disconnected_and_same_node() {
        let graph = network(&["S", "T"], &[("T", "S", 5)]);

        let report = graph.max_flow("S", "T").unwrap();
        assert_eq!(report.total, 0);
        assert!(report.paths.is_empty());

        assert_eq!(graph.max_flow("S", "S").unwrap().total, 0);
    }

    #[test]
    fn test_unknown_endpoint() {
        let graph = diamond();
        assert_eq!(
            graph.max_flow("S", "X"),
            Err(GraphError::NodeNotFound("X".to_string()))
        );
    }
}
