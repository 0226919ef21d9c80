//
//  path.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use super::engine::DonationGraph;
use super::types::*;
use crate::error::Result;

impl DonationGraph {
    /// Fewest transfer days from `start` to `end` (Dijkstra).
    ///
    /// Only edges with non-zero days are followed. Days are assumed to be
    /// non-negative; negative values are accepted but give meaningless
    /// distances.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Route> {
        let start_id = self.resolve(start)?;
        let end_id = self.resolve(end)?;

        let (distance, parent) = self.dijkstra(start_id);

        let Some(days) = distance[end_id.index()] else {
            debug!(%start, %end, "no route");
            return Ok(Route::Unreachable);
        };

        let mut path = vec![self.label(end_id)];
        let mut current = end_id;
        while let Some(prev) = parent[current.index()] {
            path.push(self.label(prev));
            current = prev;
        }
        path.reverse();

        debug!(%start, %end, days, hops = path.len() - 1, "shortest route found");
        Ok(Route::Found(PathReport { days, path }))
    }

    /// Single-source distances (`None` = unreached) and parent pointers.
    fn dijkstra(&self, start: NodeId) -> (Vec<Option<i64>>, Vec<Option<NodeId>>) {
        let n = self.node_count();
        let mut distance: Vec<Option<i64>> = vec![None; n];
        let mut parent: Vec<Option<NodeId>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[start.index()] = Some(0);
        heap.push(Reverse((0i64, start)));

        while let Some(Reverse((dist, current))) = heap.pop() {
            // Duplicate entries: only the first pop of a node counts.
            if finalized[current.index()] {
                continue;
            }
            finalized[current.index()] = true;

            for (next, edge) in self.outgoing(current) {
                if finalized[next.index()] || edge.weight == 0 {
                    continue;
                }
                let candidate = dist.saturating_add(edge.weight);
                if distance[next.index()].map_or(true, |known| candidate < known) {
                    distance[next.index()] = Some(candidate);
                    parent[next.index()] = Some(current);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        (distance, parent)
    }
}
