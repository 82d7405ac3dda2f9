//! # Location Types
//!
//! Geographic reference data attached to status nodes. Locations are
//! display records resolved from carrier-supplied codes by the gazetteer
//! in `cargopath-carrier`; nothing in the engine branches on them.

use serde::{Deserialize, Serialize};

/// Kind of facility a status event was reported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Sea port.
    Port,
    /// Container terminal within a port.
    Terminal,
    /// Warehouse or depot.
    Warehouse,
    /// Customs facility.
    Customs,
    /// Rail ramp or station.
    Rail,
    /// Feeder/barge berth.
    Feeder,
}

/// A resolved event location.
///
/// When the gazetteer does not know a code, the code itself is carried
/// through as both `name` and `code` with no country; unresolved codes are
/// display degradation, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier (the location code for gazetteer entries).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Source code, UN/LOCODE style for ports.
    pub code: String,
    /// Facility kind.
    pub location_type: LocationType,
    /// Country display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
