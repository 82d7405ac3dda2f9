//! # Error Types
//!
//! Library errors for the Cargopath Stack, derived with `thiserror`.
//!
//! Only fallible *construction* surfaces here: parsing timestamps, parsing
//! status identifiers, loading carrier tables. Path validation findings are
//! deliberately not Rust errors; the validator reports them as data (see
//! `cargopath-engine`), because an inconsistent path is a domain outcome,
//! not a failure of the library.

use thiserror::Error;

/// Top-level error type for the Cargopath Stack.
#[derive(Error, Debug)]
pub enum CargopathError {
    /// A timestamp string could not be parsed or violated the UTC policy.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// A string did not name any canonical status variant.
    #[error("unknown canonical status: {0:?}")]
    UnknownStatus(String),

    /// A carrier code table failed to load or was internally inconsistent.
    #[error("carrier table error: {0}")]
    CarrierTable(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
