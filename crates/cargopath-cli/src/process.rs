//! # Process Subcommand
//!
//! Normalizes a raw carrier event file into a processed status path.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use cargopath_carrier::{nodes_from_events, CarrierTable, CodeBook, RawCarrierEvent};
use cargopath_core::{RawStatusPath, Timestamp};
use cargopath_engine::process_status_path;

/// Arguments for the process subcommand.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// JSON file containing an array of raw carrier events.
    pub events: PathBuf,

    /// Additional carrier table file to register (JSON, repeatable).
    #[arg(long = "carrier-table")]
    pub carrier_tables: Vec<PathBuf>,

    /// Carrier-estimated time of arrival (RFC 3339, UTC).
    #[arg(long)]
    pub eta: Option<String>,

    /// Processing clock override (RFC 3339, UTC); defaults to the current
    /// time. Fixing the clock makes a run reproducible.
    #[arg(long)]
    pub now: Option<String>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Load the events, run the pipeline, print the resulting path as JSON.
pub fn run(args: &ProcessArgs) -> anyhow::Result<()> {
    let mut book = CodeBook::builtin();
    for table_path in &args.carrier_tables {
        let file = File::open(table_path)
            .with_context(|| format!("opening carrier table {}", table_path.display()))?;
        let table: CarrierTable = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing carrier table {}", table_path.display()))?;
        tracing::info!(
            carrier = %table.carrier,
            events = table.event_count(),
            warnings = table.warning_count(),
            "registered carrier table"
        );
        book.register(table);
    }

    let file = File::open(&args.events)
        .with_context(|| format!("opening event file {}", args.events.display()))?;
    let events: Vec<RawCarrierEvent> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing event file {}", args.events.display()))?;

    let now = match &args.now {
        Some(s) => Timestamp::parse(s)?,
        None => Timestamp::now(),
    };
    let eta = args.eta.as_deref().map(Timestamp::parse).transpose()?;

    let raw = RawStatusPath {
        container_number: events.first().map(|e| e.container_number.clone()),
        nodes: nodes_from_events(&events, &book),
        eta,
    };
    let path = process_status_path(raw, now);

    let json = if args.pretty {
        serde_json::to_string_pretty(&path)?
    } else {
        serde_json::to_string(&path)?
    };
    println!("{json}");

    Ok(())
}
