//! donorgraph CLI - interactive donation tracker and one-shot graph queries.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use donorgraph::cli::shell::Shell;
use donorgraph::cli::{execute, Cli, Commands};
use donorgraph::{seed, DonorGraphConfig};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DonorGraphConfig::load(&cli.config)?;
    debug!(config = %cli.config.display(), max_nodes = ?config.graph.max_nodes, "config loaded");

    let mut graph = config.empty_graph();
    if !cli.no_seed {
        seed::populate(&mut graph, &config.seed).context("failed to load seed dataset")?;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            Shell::new(&mut graph, stdin.lock(), std::io::stdout()).run()?;
        }
        command => {
            let mut stdout = std::io::stdout().lock();
            execute(&command, &graph, cli.json, &mut stdout)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
