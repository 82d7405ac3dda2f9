//! # cargopath CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Cargopath Stack CLI — shipment status path toolchain.
///
/// Normalizes raw carrier event files into processed status paths and
/// validates paths against the canonical transition graph.
#[derive(Parser, Debug)]
#[command(name = "cargopath", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Process a raw carrier event file into a status path.
    Process(cargopath_cli::process::ProcessArgs),
    /// Validate a processed status path.
    Validate(cargopath_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => cargopath_cli::process::run(&args),
        Commands::Validate(args) => cargopath_cli::validate::run(&args),
    }
}
