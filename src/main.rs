use clap::Parser;
use loansim::application::engine::SimulationEngine;
use loansim::domain::ports::{ClientStoreBox, SimulationStoreBox};
use loansim::infrastructure::in_memory::{InMemoryClientStore, InMemorySimulationStore};
use loansim::interfaces::csv::command_reader::CommandReader;
use loansim::interfaces::csv::simulation_writer::SimulationWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file
    input: PathBuf,

    /// Emit the recorded simulations as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let client_store: ClientStoreBox = Box::new(InMemoryClientStore::new());
    let simulation_store: SimulationStoreBox = Box::new(InMemorySimulationStore::new());
    let engine = SimulationEngine::new(client_store, simulation_store);

    // Process the batch; rejected rows are reported and skipped
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(cmd) => {
                if let Err(e) = engine.execute(cmd).await {
                    warn!("operation rejected: {e}");
                }
            }
            Err(e) => {
                warn!("skipping malformed row: {e}");
            }
        }
    }

    // Output the recorded simulations
    let simulations = engine.into_results().await.into_diagnostic()?;
    let stdout = io::stdout();
    if cli.json {
        serde_json::to_writer_pretty(stdout.lock(), &simulations).into_diagnostic()?;
    } else {
        let mut writer = SimulationWriter::new(stdout.lock());
        writer.write_simulations(simulations).into_diagnostic()?;
    }

    Ok(())
}
