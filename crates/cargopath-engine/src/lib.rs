//! # cargopath-engine — The Status Path Engine
//!
//! Derives everything the presentation and persistence collaborators
//! consume from a raw node set: per-node temporal state, alert flags, the
//! aggregate path status, validation findings, and progress/delay metrics.
//!
//! ## Components
//!
//! - **Inference** (`infer.rs`): completed/in-progress/pending per node,
//!   with backward completion propagation over input order.
//! - **Aggregation** (`aggregate.rs`): one overall path status with fixed
//!   Completed > Hold > Delayed > OnTime precedence.
//! - **Validation** (`validate.rs`): transition legality, time ordering,
//!   and duplicate checks as a two-tier error/warning report.
//! - **Metrics** (`progress.rs`): percent-complete and delay-day counts.
//! - **Pipeline** (`pipeline.rs`): `process_status_path`, the single entry
//!   point composing the above.
//!
//! ## Design
//!
//! Single-threaded, synchronous, purely functional. No I/O, no timers, no
//! global clock reads: `now` is a parameter everywhere time matters, so
//! every function is referentially transparent for a fixed clock reading
//! and the engine is trivially safe to call from concurrent handlers.

pub mod aggregate;
pub mod infer;
pub mod pipeline;
pub mod progress;
pub mod validate;

pub use aggregate::calculate_path_status;
pub use infer::infer_node_statuses;
pub use pipeline::process_status_path;
pub use progress::{delay_days, path_progress};
pub use validate::{validate_status_path, PathError, PathWarning, ValidationReport};
