//
//  query.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use super::engine::DonationGraph;
use super::types::*;

impl DonationGraph {
    /// Every node in index order with its outgoing edges.
    pub fn listing(&self) -> GraphListing {
        let nodes = self
            .node_ids()
            .map(|id| NodeConnections {
                name: self.label(id),
                connections: self
                    .outgoing(id)
                    .into_iter()
                    .map(|(target, edge)| Connection {
                        target: self.label(target),
                        weight: edge.weight,
                        capacity: edge.capacity,
                    })
                    .collect(),
            })
            .collect();

        GraphListing { nodes }
    }
}
