//
//  fraud.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use std::collections::VecDeque;
use tracing::{debug, info};

use super::engine::DonationGraph;
use super::types::*;
use crate::error::Result;

impl DonationGraph {
    /// Check whether `target` sits on a donation loop.
    ///
    /// This is a reachability heuristic, not exact cycle detection. Nodes are
    /// taken in index order and each one not yet visited roots a BFS; the
    /// visited set is shared by all launches. Reaching an already-visited
    /// node that is the target flags fraud, even when that node is the root
    /// of the current launch. Results depend on registration order: a target
    /// fed by two unrelated donors is flagged, and a loop whose nodes were
    /// all swept by an earlier launch may be missed.
    pub fn detect_fraud(&self, target: &str) -> Result<FraudCheck> {
        let target_id = self.resolve(target)?;
        let mut visited = vec![false; self.node_count()];
        let mut launches = 0;

        for root in self.node_ids() {
            if visited[root.index()] {
                continue;
            }
            launches += 1;

            if let Some((from, to)) = self.sweep(root, target_id, &mut visited) {
                info!(%target, root = %self.label(root), "fraud cycle detected");
                return Ok(FraudCheck {
                    target: target.to_string(),
                    launches,
                    closing_edge: Some(ClosingEdge {
                        root: self.label(root),
                        from: self.label(from),
                        to: self.label(to),
                    }),
                });
            }
        }

        debug!(%target, launches, "no fraud cycle");
        Ok(FraudCheck {
            target: target.to_string(),
            launches,
            closing_edge: None,
        })
    }

    /// One BFS launch. Returns the edge that re-entered the target, if any.
    fn sweep(
        &self,
        root: NodeId,
        target: NodeId,
        visited: &mut [bool],
    ) -> Option<(NodeId, NodeId)> {
        let mut queue = VecDeque::from([root]);
        visited[root.index()] = true;

        while let Some(current) = queue.pop_front() {
            for (next, _) in self.outgoing(current) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                } else if next == target {
                    return Some((current, next));
                }
            }
        }

        None
    }
}
