//! # cargopath-core — Foundational Types for the Cargopath Stack
//!
//! This crate is the bedrock of the Cargopath Stack: the canonical logistics
//! status vocabulary, the transition graph over it, the parallel static
//! tables (labels, icon tokens, priorities, phases), the node/path data
//! model, and UTC-only timestamps. Every other crate in the workspace
//! depends on `cargopath-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One closed vocabulary.** `CanonicalStatus` is the single normalized
//!    status set all carrier feeds converge on. Every parallel table is an
//!    exhaustive `match`, so vocabulary and tables cannot drift apart.
//!
//! 2. **The graph is total.** `graph::successors()` has a row for every
//!    variant, terminal and exceptional ones included. `is_valid_transition`
//!    is defined for every `(from, to)` pair.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision; carrier feeds with local offsets are converted at
//!    the ingestion boundary via `parse_lenient`.
//!
//! 4. **Derived fields are data, not state.** Node and path derivations are
//!    recomputed from scratch each processing run; nothing here mutates.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cargopath-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod graph;
pub mod location;
pub mod node;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CargopathError;
pub use graph::{is_valid_transition, successors};
pub use location::{Location, LocationType};
pub use node::{NodeStatus, PathStatus, RawStatusPath, StatusNode, StatusPath};
pub use status::{CanonicalStatus, StatusPhase, CANONICAL_STATUS_COUNT};
pub use temporal::Timestamp;
