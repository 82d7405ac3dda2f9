//! # Canonical Status Vocabulary — Single Source of Truth
//!
//! Defines `CanonicalStatus`, the one normalized vocabulary of logistics
//! milestones that every carrier-specific event code maps into, together
//! with its four parallel static tables: display labels, icon tokens,
//! severity priorities, and phase grouping. The transition graph lives in
//! [`crate::graph`].
//!
//! ## Invariant
//!
//! A single closed enum with exhaustive `match` everywhere. Adding a status
//! variant forces every table, the transition graph, and every consumer to
//! handle it at compile time, so the vocabulary and its lookup tables cannot
//! drift apart silently. Priority values are stored data, never re-derived:
//! happy-path milestones rank 0..=32, hold/exception statuses rank at 200
//! and above, warning statuses at 400 and above, and `Unknown` at 999.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CargopathError;

/// Lifecycle phase a canonical status belongs to.
///
/// Phases group the vocabulary for timeline rendering and reporting; they
/// carry no transition semantics of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPhase {
    /// Booking confirmed, cargo not yet moving.
    Planning,
    /// Empty pickup, stuffing, and origin terminal gate-in.
    OriginOps,
    /// Inland rail leg.
    Rail,
    /// Feeder/barge leg.
    Feeder,
    /// Main ocean leg.
    Ocean,
    /// Transshipment port operations.
    Transshipment,
    /// Destination port operations up to gate-out.
    DestinationOps,
    /// Inland delivery, stripping, empty return, completion.
    Delivery,
    /// Holds and handling exceptions.
    HoldException,
    /// Predictive delay/detention advisories.
    Warning,
    /// Unmapped carrier events.
    Unknown,
}

/// The canonical vocabulary of logistics milestones.
///
/// All carrier event codes normalize into exactly one of these variants.
/// The wire form is SCREAMING_SNAKE_CASE (`"EMPTY_PICKED_UP"`), matching
/// the serialized feeds the presentation and persistence collaborators
/// consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalStatus {
    /// Booking exists, container has not started moving.
    NotShipped,
    /// Shipment planned with a confirmed schedule.
    Planned,
    /// Empty container picked up at the depot.
    EmptyPickedUp,
    /// Cargo stuffed into the container.
    ContainerStuffed,
    /// Container gated in at the origin terminal.
    GateIn,
    /// Loaded onto an inland rail service.
    RailLoaded,
    /// Rail service departed.
    RailDeparted,
    /// Rail service arrived.
    RailArrived,
    /// Discharged from the rail service.
    RailDischarged,
    /// Loaded onto a feeder/barge service.
    FeederLoaded,
    /// Feeder departed.
    FeederDeparted,
    /// Feeder arrived.
    FeederArrived,
    /// Discharged from the feeder.
    FeederDischarged,
    /// Loaded onto the ocean vessel.
    Loaded,
    /// Ocean vessel departed the origin port.
    Departed,
    /// Vessel underway on the main leg.
    Sailing,
    /// Arrived at a transshipment port.
    TransitArrived,
    /// Berthed at the transshipment port.
    TransitBerthed,
    /// Discharged at the transshipment port.
    TransitDischarged,
    /// Loaded onto the connecting vessel.
    TransitLoaded,
    /// Departed the transshipment port.
    TransitDeparted,
    /// Arrived at the destination port.
    Arrived,
    /// Vessel berthed at the destination port.
    Berthed,
    /// Discharged from the vessel.
    Discharged,
    /// Released and available for pickup.
    Available,
    /// Container gated out of the destination terminal.
    GateOut,
    /// Inland transit toward the consignee.
    InTransitToDest,
    /// Delivered to the consignee site.
    DeliveryArrived,
    /// Container stripped.
    Stripped,
    /// Empty container returned to the depot.
    ReturnedEmpty,
    /// Terminal status: shipment closed out.
    Completed,
    /// Held by customs.
    CustomsHold,
    /// Held by the carrier.
    CarrierHold,
    /// Held by the terminal.
    TerminalHold,
    /// Held pending outstanding charges.
    ChargesHold,
    /// Generic hold with no attributed authority.
    Hold,
    /// Rolled from the planned sailing.
    Dumped,
    /// Advisory: milestone running late.
    Delayed,
    /// Advisory: container in detention.
    Detention,
    /// Advisory: free time exceeded.
    Overdue,
    /// Advisory: port congestion on the route.
    Congestion,
    /// Carrier event that maps to nothing canonical.
    Unknown,
}

/// Total number of canonical statuses. Backs the table-totality tests.
pub const CANONICAL_STATUS_COUNT: usize = 42;

impl CanonicalStatus {
    /// Returns all canonical statuses in vocabulary order.
    pub fn all_statuses() -> &'static [CanonicalStatus] {
        &[
            Self::NotShipped,
            Self::Planned,
            Self::EmptyPickedUp,
            Self::ContainerStuffed,
            Self::GateIn,
            Self::RailLoaded,
            Self::RailDeparted,
            Self::RailArrived,
            Self::RailDischarged,
            Self::FeederLoaded,
            Self::FeederDeparted,
            Self::FeederArrived,
            Self::FeederDischarged,
            Self::Loaded,
            Self::Departed,
            Self::Sailing,
            Self::TransitArrived,
            Self::TransitBerthed,
            Self::TransitDischarged,
            Self::TransitLoaded,
            Self::TransitDeparted,
            Self::Arrived,
            Self::Berthed,
            Self::Discharged,
            Self::Available,
            Self::GateOut,
            Self::InTransitToDest,
            Self::DeliveryArrived,
            Self::Stripped,
            Self::ReturnedEmpty,
            Self::Completed,
            Self::CustomsHold,
            Self::CarrierHold,
            Self::TerminalHold,
            Self::ChargesHold,
            Self::Hold,
            Self::Dumped,
            Self::Delayed,
            Self::Detention,
            Self::Overdue,
            Self::Congestion,
            Self::Unknown,
        ]
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this status.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotShipped => "NOT_SHIPPED",
            Self::Planned => "PLANNED",
            Self::EmptyPickedUp => "EMPTY_PICKED_UP",
            Self::ContainerStuffed => "CONTAINER_STUFFED",
            Self::GateIn => "GATE_IN",
            Self::RailLoaded => "RAIL_LOADED",
            Self::RailDeparted => "RAIL_DEPARTED",
            Self::RailArrived => "RAIL_ARRIVED",
            Self::RailDischarged => "RAIL_DISCHARGED",
            Self::FeederLoaded => "FEEDER_LOADED",
            Self::FeederDeparted => "FEEDER_DEPARTED",
            Self::FeederArrived => "FEEDER_ARRIVED",
            Self::FeederDischarged => "FEEDER_DISCHARGED",
            Self::Loaded => "LOADED",
            Self::Departed => "DEPARTED",
            Self::Sailing => "SAILING",
            Self::TransitArrived => "TRANSIT_ARRIVED",
            Self::TransitBerthed => "TRANSIT_BERTHED",
            Self::TransitDischarged => "TRANSIT_DISCHARGED",
            Self::TransitLoaded => "TRANSIT_LOADED",
            Self::TransitDeparted => "TRANSIT_DEPARTED",
            Self::Arrived => "ARRIVED",
            Self::Berthed => "BERTHED",
            Self::Discharged => "DISCHARGED",
            Self::Available => "AVAILABLE",
            Self::GateOut => "GATE_OUT",
            Self::InTransitToDest => "IN_TRANSIT_TO_DEST",
            Self::DeliveryArrived => "DELIVERY_ARRIVED",
            Self::Stripped => "STRIPPED",
            Self::ReturnedEmpty => "RETURNED_EMPTY",
            Self::Completed => "COMPLETED",
            Self::CustomsHold => "CUSTOMS_HOLD",
            Self::CarrierHold => "CARRIER_HOLD",
            Self::TerminalHold => "TERMINAL_HOLD",
            Self::ChargesHold => "CHARGES_HOLD",
            Self::Hold => "HOLD",
            Self::Dumped => "DUMPED",
            Self::Delayed => "DELAYED",
            Self::Detention => "DETENTION",
            Self::Overdue => "OVERDUE",
            Self::Congestion => "CONGESTION",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Stable English display label for timelines and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotShipped => "Not shipped",
            Self::Planned => "Planned",
            Self::EmptyPickedUp => "Empty container picked up",
            Self::ContainerStuffed => "Container stuffed",
            Self::GateIn => "Gate in",
            Self::RailLoaded => "Rail loaded",
            Self::RailDeparted => "Rail departed",
            Self::RailArrived => "Rail arrived",
            Self::RailDischarged => "Rail discharged",
            Self::FeederLoaded => "Feeder loaded",
            Self::FeederDeparted => "Feeder departed",
            Self::FeederArrived => "Feeder arrived",
            Self::FeederDischarged => "Feeder discharged",
            Self::Loaded => "Loaded on vessel",
            Self::Departed => "Vessel departed",
            Self::Sailing => "Sailing",
            Self::TransitArrived => "Arrived at transshipment port",
            Self::TransitBerthed => "Berthed at transshipment port",
            Self::TransitDischarged => "Discharged at transshipment port",
            Self::TransitLoaded => "Loaded at transshipment port",
            Self::TransitDeparted => "Departed transshipment port",
            Self::Arrived => "Arrived at destination port",
            Self::Berthed => "Berthed",
            Self::Discharged => "Discharged",
            Self::Available => "Available for pickup",
            Self::GateOut => "Gate out",
            Self::InTransitToDest => "Inland transit to consignee",
            Self::DeliveryArrived => "Delivered",
            Self::Stripped => "Container stripped",
            Self::ReturnedEmpty => "Empty container returned",
            Self::Completed => "Completed",
            Self::CustomsHold => "Customs hold",
            Self::CarrierHold => "Carrier hold",
            Self::TerminalHold => "Terminal hold",
            Self::ChargesHold => "Charges hold",
            Self::Hold => "On hold",
            Self::Dumped => "Container rolled",
            Self::Delayed => "Delayed",
            Self::Detention => "In detention",
            Self::Overdue => "Overdue",
            Self::Congestion => "Port congestion",
            Self::Unknown => "Unknown status",
        }
    }

    /// Icon token for timeline UIs.
    ///
    /// Tokens are kebab-case identifiers resolved by the presentation
    /// layer's icon set; this crate only guarantees the mapping is stable
    /// and total.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NotShipped => "package",
            Self::Planned => "clipboard",
            Self::EmptyPickedUp => "truck",
            Self::ContainerStuffed => "container",
            Self::GateIn => "gate-in",
            Self::RailLoaded => "train",
            Self::RailDeparted => "train",
            Self::RailArrived => "train",
            Self::RailDischarged => "train",
            Self::FeederLoaded => "barge",
            Self::FeederDeparted => "barge",
            Self::FeederArrived => "barge",
            Self::FeederDischarged => "barge",
            Self::Loaded => "crane",
            Self::Departed => "ship",
            Self::Sailing => "waves",
            Self::TransitArrived => "map-pin",
            Self::TransitBerthed => "anchor",
            Self::TransitDischarged => "unload",
            Self::TransitLoaded => "load",
            Self::TransitDeparted => "ship",
            Self::Arrived => "flag",
            Self::Berthed => "anchor",
            Self::Discharged => "unload",
            Self::Available => "check",
            Self::GateOut => "gate-out",
            Self::InTransitToDest => "truck",
            Self::DeliveryArrived => "house",
            Self::Stripped => "clipboard",
            Self::ReturnedEmpty => "return",
            Self::Completed => "badge-check",
            Self::CustomsHold => "shield-alert",
            Self::CarrierHold => "lock",
            Self::TerminalHold => "barrier",
            Self::ChargesHold => "coins",
            Self::Hold => "stop",
            Self::Dumped => "rotate-back",
            Self::Delayed => "clock",
            Self::Detention => "calendar",
            Self::Overdue => "siren",
            Self::Congestion => "traffic",
            Self::Unknown => "question",
        }
    }

    /// Severity priority used by the aggregator and for UI sorting.
    ///
    /// Happy-path milestones 0..=32 in rough journey order, holds and
    /// exceptions 200..=300, warning advisories 400..=403, `Unknown` 999.
    /// Higher means more severe; the values are stored, not derived.
    pub fn priority(&self) -> u16 {
        match self {
            Self::NotShipped => 0,
            Self::Planned => 1,
            Self::EmptyPickedUp => 2,
            Self::ContainerStuffed => 3,
            Self::RailLoaded => 4,
            Self::RailDeparted => 5,
            Self::RailArrived => 6,
            Self::RailDischarged => 7,
            Self::FeederLoaded => 8,
            Self::FeederDeparted => 9,
            Self::FeederArrived => 10,
            Self::FeederDischarged => 11,
            Self::GateIn => 12,
            Self::Loaded => 13,
            Self::Departed => 14,
            Self::Sailing => 15,
            Self::TransitArrived => 16,
            Self::TransitBerthed => 17,
            Self::TransitDischarged => 18,
            Self::TransitLoaded => 19,
            Self::TransitDeparted => 20,
            Self::Arrived => 21,
            Self::Berthed => 22,
            Self::Discharged => 23,
            Self::Available => 24,
            Self::GateOut => 25,
            Self::InTransitToDest => 26,
            Self::DeliveryArrived => 28,
            Self::Stripped => 29,
            Self::ReturnedEmpty => 31,
            Self::Completed => 32,
            Self::CustomsHold => 200,
            Self::CarrierHold => 201,
            Self::TerminalHold => 202,
            Self::ChargesHold => 203,
            Self::Hold => 204,
            Self::Dumped => 300,
            Self::Delayed => 400,
            Self::Detention => 401,
            Self::Overdue => 402,
            Self::Congestion => 403,
            Self::Unknown => 999,
        }
    }

    /// Lifecycle phase this status belongs to.
    pub fn phase(&self) -> StatusPhase {
        match self {
            Self::NotShipped | Self::Planned => StatusPhase::Planning,
            Self::EmptyPickedUp | Self::ContainerStuffed | Self::GateIn => StatusPhase::OriginOps,
            Self::RailLoaded | Self::RailDeparted | Self::RailArrived | Self::RailDischarged => {
                StatusPhase::Rail
            }
            Self::FeederLoaded
            | Self::FeederDeparted
            | Self::FeederArrived
            | Self::FeederDischarged => StatusPhase::Feeder,
            Self::Loaded | Self::Departed | Self::Sailing => StatusPhase::Ocean,
            Self::TransitArrived
            | Self::TransitBerthed
            | Self::TransitDischarged
            | Self::TransitLoaded
            | Self::TransitDeparted => StatusPhase::Transshipment,
            Self::Arrived | Self::Berthed | Self::Discharged | Self::Available | Self::GateOut => {
                StatusPhase::DestinationOps
            }
            Self::InTransitToDest
            | Self::DeliveryArrived
            | Self::Stripped
            | Self::ReturnedEmpty
            | Self::Completed => StatusPhase::Delivery,
            Self::CustomsHold
            | Self::CarrierHold
            | Self::TerminalHold
            | Self::ChargesHold
            | Self::Hold
            | Self::Dumped => StatusPhase::HoldException,
            Self::Delayed | Self::Detention | Self::Overdue | Self::Congestion => {
                StatusPhase::Warning
            }
            Self::Unknown => StatusPhase::Unknown,
        }
    }

    /// Whether this is the terminal status. No transitions lead out of it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Hold statuses that escalate the whole path to [`Hold`] in the
    /// aggregate, regardless of recency.
    ///
    /// Generic [`CanonicalStatus::Hold`] is deliberately not in this set;
    /// it flags the node (see [`is_alert`](Self::is_alert)) without
    /// escalating the path.
    pub fn is_hold_family(&self) -> bool {
        matches!(
            self,
            Self::CustomsHold
                | Self::CarrierHold
                | Self::TerminalHold
                | Self::ChargesHold
                | Self::Dumped
        )
    }

    /// Warning advisories that mark the path as delayed in the aggregate.
    pub fn is_delay_family(&self) -> bool {
        matches!(
            self,
            Self::Delayed | Self::Detention | Self::Overdue | Self::Congestion
        )
    }

    /// Whether a node carrying this status gets an alert badge.
    ///
    /// Covers the hold family, the delay family, and the generic hold.
    pub fn is_alert(&self) -> bool {
        self.is_hold_family() || self.is_delay_family() || matches!(self, Self::Hold)
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalStatus {
    type Err = CargopathError;

    /// Parse a canonical status from its SCREAMING_SNAKE_CASE identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_statuses()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| CargopathError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_statuses_count() {
        assert_eq!(CanonicalStatus::all_statuses().len(), CANONICAL_STATUS_COUNT);
    }

    #[test]
    fn test_all_statuses_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in CanonicalStatus::all_statuses() {
            assert!(seen.insert(s), "duplicate status: {s}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for status in CanonicalStatus::all_statuses() {
            let s = status.as_str();
            let parsed: CanonicalStatus = s.parse().unwrap_or_else(|e| {
                panic!("failed to parse {s:?}: {e}")
            });
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("SHIPPED_MAYBE".parse::<CanonicalStatus>().is_err());
        assert!("completed".parse::<CanonicalStatus>().is_err()); // case-sensitive
        assert!("".parse::<CanonicalStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in CanonicalStatus::all_statuses() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let parsed: CanonicalStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_labels_total_and_nonempty() {
        for status in CanonicalStatus::all_statuses() {
            assert!(!status.label().is_empty(), "no label for {status}");
        }
    }

    #[test]
    fn test_icons_total_and_kebab_case() {
        for status in CanonicalStatus::all_statuses() {
            let icon = status.icon();
            assert!(!icon.is_empty(), "no icon for {status}");
            assert!(
                icon.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "icon token {icon:?} for {status} is not kebab-case"
            );
        }
    }

    #[test]
    fn test_priority_bands() {
        for status in CanonicalStatus::all_statuses() {
            let p = status.priority();
            match status.phase() {
                StatusPhase::HoldException => {
                    assert!((200..400).contains(&p), "{status} priority {p}")
                }
                StatusPhase::Warning => assert!((400..999).contains(&p), "{status} priority {p}"),
                StatusPhase::Unknown => assert_eq!(p, 999),
                _ => assert!(p <= 32, "{status} priority {p}"),
            }
        }
    }

    #[test]
    fn test_priorities_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in CanonicalStatus::all_statuses() {
            assert!(seen.insert(s.priority()), "duplicate priority for {s}");
        }
    }

    #[test]
    fn test_terminal_is_only_completed() {
        for status in CanonicalStatus::all_statuses() {
            assert_eq!(status.is_terminal(), *status == CanonicalStatus::Completed);
        }
    }

    #[test]
    fn test_hold_family_members() {
        let family: Vec<_> = CanonicalStatus::all_statuses()
            .iter()
            .filter(|s| s.is_hold_family())
            .collect();
        assert_eq!(
            family,
            vec![
                &CanonicalStatus::CustomsHold,
                &CanonicalStatus::CarrierHold,
                &CanonicalStatus::TerminalHold,
                &CanonicalStatus::ChargesHold,
                &CanonicalStatus::Dumped,
            ]
        );
    }

    #[test]
    fn test_generic_hold_alerts_without_escalating() {
        assert!(CanonicalStatus::Hold.is_alert());
        assert!(!CanonicalStatus::Hold.is_hold_family());
        assert!(!CanonicalStatus::Hold.is_delay_family());
    }

    #[test]
    fn test_delay_family_is_warning_phase() {
        for status in CanonicalStatus::all_statuses() {
            assert_eq!(
                status.is_delay_family(),
                status.phase() == StatusPhase::Warning
            );
        }
    }

    #[test]
    fn test_alert_iff_flagged_families() {
        for status in CanonicalStatus::all_statuses() {
            let expected = status.is_hold_family()
                || status.is_delay_family()
                || *status == CanonicalStatus::Hold;
            assert_eq!(status.is_alert(), expected, "alert mismatch for {status}");
        }
    }
}
