//! # cargopath-cli — Cargopath Stack Command-Line Interface
//!
//! Drives the engine over local JSON files. This binary is the developer
//! and operations surface; production ingestion goes through the library
//! crates directly.
//!
//! ## Subcommands
//!
//! - `process` — normalize a raw carrier event file and print the
//!   processed status path.
//! - `validate` — run the path validator over a processed status path file.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates; no status semantics
//!   live here.
//! - No network I/O; files in, JSON out.

pub mod process;
pub mod validate;
