//! # cargopath-carrier — Carrier Vocabulary Normalization
//!
//! Maps carrier-specific event codes onto the canonical status vocabulary
//! of `cargopath-core`.
//!
//! ## Components
//!
//! - **Code books** (`codebook.rs`): per-carrier `(raw code -> status)`
//!   tables with a distinct secondary map for warning/advisory codes.
//!   Three carriers are built in (`feituo`, `maersk`, `cosco`); new ones
//!   are registered as plain serde data, never by touching the engine.
//! - **Built-in tables** (`tables.rs`): the shipped carrier vocabularies
//!   as const data.
//! - **Gazetteer** (`gazetteer.rs`): static port-code lookup; unresolved
//!   codes pass through as display text.
//! - **Events** (`event.rs`): the raw feed event shape and its conversion
//!   into status nodes.
//!
//! ## Design
//!
//! Normalization is total: unknown carriers and unmapped codes resolve to
//! `CanonicalStatus::Unknown` (logged at debug level), and unknown location
//! codes pass through as-is. Nothing in this crate returns an error during
//! normal feed processing.

pub mod codebook;
pub mod event;
pub mod gazetteer;

mod tables;

pub use codebook::{CarrierId, CarrierTable, CodeBook};
pub use event::{node_from_event, nodes_from_events, RawCarrierEvent};
pub use gazetteer::resolve_location;
