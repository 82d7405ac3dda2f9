//! # Validate Subcommand
//!
//! Runs the path validator over a processed status path file and prints
//! the report. Exits nonzero when the path has state-machine errors, so
//! the command slots into CI checks; warnings alone do not fail the run.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use cargopath_core::StatusPath;
use cargopath_engine::validate_status_path;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file containing a processed status path.
    pub path: PathBuf,

    /// Pretty-print the report.
    #[arg(long)]
    pub pretty: bool,
}

/// Load the path, validate it, print the report.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let file = File::open(&args.path)
        .with_context(|| format!("opening status path file {}", args.path.display()))?;
    let status_path: StatusPath = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing status path file {}", args.path.display()))?;

    let report = validate_status_path(&status_path);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    if !report.is_valid {
        anyhow::bail!(
            "status path failed validation with {} error(s)",
            report.errors.len()
        );
    }

    Ok(())
}
