//
//  shell.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use std::io::{self, BufRead, Write};
use tracing::debug;

use super::format::{format_flow, format_fraud, format_listing, format_route};
use crate::graph::DonationGraph;

const MENU: &str = "\
Options:
1. Add donor/organization
2. Donate
3. Print graph
4. Find shortest days
5. Check fraud case
6. Add capacity
7. Find maximum flow
8. Exit
";

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddNode,
    Donate,
    PrintGraph,
    ShortestDays,
    FraudCheck,
    AddCapacity,
    MaxFlow,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::AddNode),
            2 => Some(Self::Donate),
            3 => Some(Self::PrintGraph),
            4 => Some(Self::ShortestDays),
            5 => Some(Self::FraudCheck),
            6 => Some(Self::AddCapacity),
            7 => Some(Self::MaxFlow),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Step {
    Continue,
    Exit,
}

/// Interactive menu loop over any line-based input and output.
///
/// Ends on the exit choice or at end of input. Engine failures and bad
/// numbers are reported and the loop carries on.
pub struct Shell<'g, R, W> {
    graph: &'g mut DonationGraph,
    input: R,
    output: W,
}

impl<'g, R: BufRead, W: Write> Shell<'g, R, W> {
    pub fn new(graph: &'g mut DonationGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            debug!(?choice, "menu choice");
            if let Step::Exit = self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Step> {
        match choice {
            MenuChoice::AddNode => {
                let Some(name) = self.prompt("Enter donor/organization name: ")? else {
                    return Ok(Step::Exit);
                };
                match self.graph.add_node(name.as_str()) {
                    Ok(id) => writeln!(self.output, "Added {} as {}", name, id)?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }

            MenuChoice::Donate | MenuChoice::AddCapacity => {
                let labels = if choice == MenuChoice::Donate {
                    ("Enter donor name: ", "Enter organization name: ", "Enter days of transfer: ")
                } else {
                    ("Enter source node: ", "Enter sink node: ", "Enter capacity: ")
                };
                let Some(from) = self.prompt(labels.0)? else {
                    return Ok(Step::Exit);
                };
                let Some(to) = self.prompt(labels.1)? else {
                    return Ok(Step::Exit);
                };
                let Some(raw) = self.prompt(labels.2)? else {
                    return Ok(Step::Exit);
                };
                let Ok(value) = raw.parse::<i64>() else {
                    writeln!(self.output, "Invalid number: {}", raw)?;
                    return Ok(Step::Continue);
                };

                let result = if choice == MenuChoice::Donate {
                    self.graph.donate(&from, &to, value)
                } else {
                    self.graph.add_capacity(&from, &to, value)
                };
                if let Err(e) = result {
                    writeln!(self.output, "{}", e)?;
                }
            }

            MenuChoice::PrintGraph => {
                let text = format_listing(&self.graph.listing());
                self.output.write_all(text.as_bytes())?;
            }

            MenuChoice::ShortestDays => {
                let Some(start) = self.prompt("Enter source: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(end) = self.prompt("Enter end node: ")? else {
                    return Ok(Step::Exit);
                };
                match self.graph.shortest_path(&start, &end) {
                    Ok(route) => self.output.write_all(format_route(&start, &end, &route).as_bytes())?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }

            MenuChoice::FraudCheck => {
                let Some(target) = self.prompt("Enter node to check for fraud case: ")? else {
                    return Ok(Step::Exit);
                };
                match self.graph.detect_fraud(&target) {
                    Ok(check) => self.output.write_all(format_fraud(&check).as_bytes())?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }

            MenuChoice::MaxFlow => {
                let Some(source) = self.prompt("Enter source node: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(sink) = self.prompt("Enter sink node: ")? else {
                    return Ok(Step::Exit);
                };
                match self.graph.max_flow(&source, &sink) {
                    Ok(report) => self.output.write_all(format_flow(&report).as_bytes())?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }

            MenuChoice::Exit => return Ok(Step::Exit),
        }

        Ok(Step::Continue)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.output.write_all(label.as_bytes())?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next line without surrounding whitespace; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(graph: &mut DonationGraph, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(graph, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddNode));
        assert_eq!(MenuChoice::parse(" 8\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("two"), None);
    }

    #[test]
    fn test_build_and_query_graph() {
        let mut graph = DonationGraph::new();
        let script = "\
1\nA\n1\nB\n1\nC\n\
2\nA\nB\n5\n2\nB\nC\n3\n2\nC\nA\n6\n\
4\nA\nC\n5\nA\n8\n";
        let out = run_script(&mut graph, script);

        assert_eq!(graph.node_count(), 3);
        assert!(out.contains("Shortest path: A -> B -> C"));
        assert!(out.contains("Shortest days from A to C: 8"));
        assert!(out.contains("Fraud case detected! There is a cycle involving A"));
    }

    #[test]
    fn test_capacity_and_flow() {
        let mut graph = DonationGraph::new();
        for name in ["S", "M1", "M2", "T"] {
            graph.add_node(name).unwrap();
        }
        let script = "\
6\nS\nM1\n4\n6\nM1\nT\n4\n6\nS\nM2\n3\n6\nM2\nT\n3\n7\nS\nT\n";
        let out = run_script(&mut graph, script);

        assert!(out.contains("Maximum flow from S to T: 7"));
    }

    #[test]
    fn test_errors_keep_the_loop_running() {
        let mut graph = DonationGraph::new();
        graph.add_node("A").unwrap();
        let script = "42\n2\nA\nZ\n5\n2\nA\nA\nsoon\n3\n";
        let out = run_script(&mut graph, script);

        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Node not found: Z"));
        assert!(out.contains("Invalid number: soon"));
        assert!(out.contains("A: No connections"));
    }

    #[test]
    fn test_eof_mid_prompt_exits() {
        let mut graph = DonationGraph::new();
        let out = run_script(&mut graph, "2\nA\n");

        assert!(out.ends_with("Enter organization name: "));
        assert_eq!(graph.node_count(), 0);
    }
}
