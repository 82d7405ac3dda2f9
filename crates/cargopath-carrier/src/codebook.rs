//! # Carrier Code Books
//!
//! One generic `(carrier, raw code) -> CanonicalStatus` lookup for every
//! carrier, with a distinct secondary map for warning/advisory codes. The
//! same physical code can mean different things depending on whether the
//! event reports a confirmed occurrence or a predictive advisory, so the
//! two maps are consulted exclusively, never merged.
//!
//! Unmapped codes and unknown carriers resolve to
//! [`CanonicalStatus::Unknown`], never an error: the transition graph
//! treats `Unknown` permissively, so one bad code degrades a path instead
//! of invalidating it.
//!
//! Tables are plain serde data. Deserializing a table's values directly
//! into [`CanonicalStatus`] is the load-time validation that every mapped
//! value is a legitimate status; a typo in a status name fails the load,
//! not a later lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cargopath_core::CanonicalStatus;

use crate::tables;

/// Identifier of an external carrier, normalized to lowercase.
///
/// Feeds are inconsistent about casing (`"Maersk"`, `"MAERSK"`); the
/// normalization happens at construction so lookups never miss on case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CarrierId(String);

impl CarrierId {
    /// Create a carrier identifier, trimming whitespace and lowercasing.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_ascii_lowercase())
    }

    /// The normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CarrierId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<CarrierId> for String {
    fn from(id: CarrierId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CarrierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One carrier's event-code vocabulary: the primary milestone map plus the
/// secondary warning map for predictive advisories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierTable {
    /// The carrier this table belongs to.
    pub carrier: CarrierId,
    /// Confirmed-occurrence event codes.
    pub events: BTreeMap<String, CanonicalStatus>,
    /// Predictive/advisory event codes. Often empty.
    #[serde(default)]
    pub warnings: BTreeMap<String, CanonicalStatus>,
}

impl CarrierTable {
    /// An empty table for `carrier`.
    pub fn new(carrier: CarrierId) -> Self {
        Self {
            carrier,
            events: BTreeMap::new(),
            warnings: BTreeMap::new(),
        }
    }

    fn from_entries(
        carrier: &str,
        events: &[(&str, CanonicalStatus)],
        warnings: &[(&str, CanonicalStatus)],
    ) -> Self {
        Self {
            carrier: CarrierId::new(carrier),
            events: events
                .iter()
                .map(|(code, status)| ((*code).to_string(), *status))
                .collect(),
            warnings: warnings
                .iter()
                .map(|(code, status)| ((*code).to_string(), *status))
                .collect(),
        }
    }

    /// Number of primary event codes.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of warning codes.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// The registry of all known carrier tables.
///
/// Constructed once at startup and then only read; callers share it freely
/// across request handlers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBook {
    tables: BTreeMap<CarrierId, CarrierTable>,
}

impl CodeBook {
    /// A code book with no carriers registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The code book of built-in carriers: `feituo`, `maersk`, `cosco`.
    pub fn builtin() -> Self {
        let mut book = Self::empty();
        book.register(CarrierTable::from_entries(
            "feituo",
            tables::FEITUO_EVENTS,
            tables::FEITUO_WARNINGS,
        ));
        book.register(CarrierTable::from_entries(
            "maersk",
            tables::MAERSK_EVENTS,
            &[],
        ));
        book.register(CarrierTable::from_entries(
            "cosco",
            tables::COSCO_EVENTS,
            &[],
        ));
        book
    }

    /// Register a carrier table, replacing any previous table for the same
    /// carrier.
    pub fn register(&mut self, table: CarrierTable) {
        self.tables.insert(table.carrier.clone(), table);
    }

    /// The table for `carrier`, if registered.
    pub fn table(&self, carrier: &CarrierId) -> Option<&CarrierTable> {
        self.tables.get(carrier)
    }

    /// Registered carriers in identifier order.
    pub fn carriers(&self) -> impl Iterator<Item = &CarrierId> {
        self.tables.keys()
    }

    /// Normalize one raw carrier event code into the canonical vocabulary.
    ///
    /// With `is_warning` set, only the carrier's warning map is consulted;
    /// otherwise only the primary map. Unknown carriers and unmapped codes
    /// resolve to [`CanonicalStatus::Unknown`].
    pub fn normalize(
        &self,
        carrier: &CarrierId,
        event_code: &str,
        is_warning: bool,
    ) -> CanonicalStatus {
        let Some(table) = self.tables.get(carrier) else {
            debug!(%carrier, event_code, "unknown carrier, resolving to UNKNOWN");
            return CanonicalStatus::Unknown;
        };

        let map = if is_warning {
            &table.warnings
        } else {
            &table.events
        };

        match map.get(event_code) {
            Some(status) => *status,
            None => {
                debug!(
                    %carrier,
                    event_code,
                    is_warning,
                    "unmapped carrier event code, resolving to UNKNOWN"
                );
                CanonicalStatus::Unknown
            }
        }
    }
}
