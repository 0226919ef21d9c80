//! CLI module for donorgraph.
//!
//! Commands:
//! - Interactive: shell (default)
//! - Queries: show, path, fraud, flow

pub mod format;
pub mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::graph::DonationGraph;
use self::format::{format_flow, format_fraud, format_listing, format_route};

#[derive(Parser)]
#[command(name = "donorgraph")]
#[command(about = "donorgraph - Donation tracking over a directed graph", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "donorgraph.toml")]
    pub config: PathBuf,

    /// Start from an empty graph instead of the seed dataset
    #[arg(long)]
    pub no_seed: bool,

    /// Print query results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,

    /// Print every node with its outgoing edges
    Show,

    /// Fewest transfer days between two nodes
    Path {
        /// Start node
        from: String,
        /// End node
        to: String,
    },

    /// Check whether a node sits on a donation loop
    Fraud {
        /// Node to check
        target: String,
    },

    /// Maximum flow between two nodes
    Flow {
        /// Source node
        source: String,
        /// Sink node
        sink: String,
    },
}

/// Run a one-shot query command against `graph`, writing to `out`.
///
/// `Commands::Shell` is handled by the caller since it owns stdin.
pub fn execute<W: Write>(
    command: &Commands,
    graph: &DonationGraph,
    json: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Shell => anyhow::bail!("the shell needs an interactive terminal"),

        Commands::Show => {
            let listing = graph.listing();
            emit(out, json, &listing, || format_listing(&listing))
        }

        Commands::Path { from, to } => {
            let route = graph.shortest_path(from, to)?;
            emit(out, json, &route, || format_route(from, to, &route))
        }

        Commands::Fraud { target } => {
            let check = graph.detect_fraud(target)?;
            emit(out, json, &check, || format_fraud(&check))
        }

        Commands::Flow { source, sink } => {
            let report = graph.max_flow(source, sink)?;
            emit(out, json, &report, || format_flow(&report))
        }
    }
}

fn emit<W: Write, T: Serialize>(
    out: &mut W,
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        out.write_all(text().as_bytes())?;
    }
    Ok(())
}
