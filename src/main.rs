//! src/main.rs
use anyhow::Context;
use clap::{Parser, Subcommand};
use goal_tally::configuration::get_configuration_or_default;
use goal_tally::executors::{Executor, MapExecutor, ReduceExecutor, SequentialExecutor};
use goal_tally::telemetry::{directive_for_verbosity, init_tracing};
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(name = "goal-tally", version, about = "Count goal records by title and completion")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read goal CSV rows on stdin and write `title|completed<TAB>1` pairs
    Map,
    /// Read key-grouped `key<TAB>count` pairs on stdin and write per-key sums
    Reduce,
    /// Map, sort and reduce in a single process
    Run,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (configuration, load_error) = get_configuration_or_default();
    init_tracing(
        "goal-tally",
        &directive_for_verbosity(&configuration.logging.level, cli.verbose),
    )?;
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Failed to read configuration, using defaults");
    }

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    match cli.command {
        Command::Map => {
            MapExecutor::default()
                .run(input, output)
                .context("Map stage failed")?;
        }
        Command::Reduce => {
            ReduceExecutor
                .run(input, output)
                .context("Reduce stage failed")?;
        }
        Command::Run => {
            SequentialExecutor::default()
                .run(input, output)
                .context("Local pipeline failed")?;
        }
    }
    Ok(())
}
