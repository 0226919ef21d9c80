//! Console rendering of engine results.

use crate::graph::{Connection, FlowReport, FraudCheck, GraphListing, Route};

pub fn format_listing(listing: &GraphListing) -> String {
    let mut output = String::from("Graph:\n");
    for node in &listing.nodes {
        if node.connections.is_empty() {
            output.push_str(&format!("{}: No connections\n", node.name));
            continue;
        }
        let edges: Vec<String> = node.connections.iter().map(format_connection).collect();
        output.push_str(&format!("{}: {}\n", node.name, edges.join(", ")));
    }
    output
}

fn format_connection(conn: &Connection) -> String {
    match (conn.weight, conn.capacity) {
        (days, 0) => format!("{} ({} days)", conn.target, days),
        (0, cap) => format!("{} (cap {})", conn.target, cap),
        (days, cap) => format!("{} ({} days, cap {})", conn.target, days, cap),
    }
}

pub fn format_route(start: &str, end: &str, route: &Route) -> String {
    match route {
        Route::Found(report) => format!(
            "Shortest path: {}\nShortest days from {} to {}: {}\n",
            report.path.join(" -> "),
            start,
            end,
            report.days
        ),
        Route::Unreachable => format!("No route from {} to {}\n", start, end),
    }
}

pub fn format_fraud(check: &FraudCheck) -> String {
    match &check.closing_edge {
        Some(edge) => format!(
            "Fraud case detected! There is a cycle involving {}\n  {} -> {} (search from {})\n",
            check.target, edge.from, edge.to, edge.root
        ),
        None => format!("No fraud case detected involving {}\n", check.target),
    }
}

pub fn format_flow(report: &FlowReport) -> String {
    let mut output = format!(
        "Maximum flow from {} to {}: {}\n",
        report.source, report.sink, report.total
    );
    for path in &report.paths {
        output.push_str(&format!("  +{} via {}\n", path.bottleneck, path.nodes.join(" -> ")));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DonationGraph;

    fn sample() -> DonationGraph {
        let mut graph = DonationGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(name).unwrap();
        }
        graph.donate("A", "B", 5).unwrap();
        graph.add_capacity("A", "B", 2).unwrap();
        graph.add_capacity("A", "C", 1).unwrap();
        graph.donate("B", "C", 3).unwrap();
        graph
    }

    #[test]
    fn test_format_listing() {
        let text = format_listing(&sample().listing());
        assert_eq!(
            text,
            "Graph:\nA: B (5 days, cap 2), C (cap 1)\nB: C (3 days)\nC: No connections\n"
        );
    }

    #[test]
    fn test_format_route() {
        let graph = sample();
        let route = graph.shortest_path("A", "C").unwrap();
        assert_eq!(
            format_route("A", "C", &route),
            "Shortest path: A -> B -> C\nShortest days from A to C: 8\n"
        );
        assert_eq!(
            format_route("C", "A", &Route::Unreachable),
            "No route from C to A\n"
        );
    }

    #[test]
    fn test_format_fraud_and_flow() {
        let graph = sample();
        let check = graph.detect_fraud("A").unwrap();
        assert_eq!(format_fraud(&check), "No fraud case detected involving A\n");

        let flow = graph.max_flow("A", "C").unwrap();
        assert!(format_flow(&flow).starts_with("Maximum flow from A to C: 1\n"));
    }
}
