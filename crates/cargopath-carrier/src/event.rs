//! # Raw Carrier Events
//!
//! The input shape delivered by the fetch adapters (HTTP/GraphQL clients
//! living outside this workspace) and its conversion into status nodes.
//! This is the only place where carrier-specific vocabulary crosses into
//! the canonical model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cargopath_core::{NodeStatus, StatusNode, Timestamp};

use crate::codebook::{CarrierId, CodeBook};
use crate::gazetteer;

/// One raw tracking event as delivered by a carrier feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCarrierEvent {
    /// Shipment/container identifier the event belongs to.
    pub container_number: String,
    /// Which carrier reported the event.
    pub carrier: CarrierId,
    /// Carrier-specific event code.
    pub event_code: String,
    /// When the event occurred (or is predicted to occur).
    pub occurred_at: Timestamp,
    /// Feed location code, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    /// True when the event is a predictive/advisory signal rather than a
    /// confirmed occurrence.
    #[serde(default)]
    pub is_warning: bool,
    /// Opaque carrier payload, carried through onto the node untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw_data: serde_json::Value,
}

/// Normalize one raw event into a status node.
///
/// The canonical label becomes the node description, the location code is
/// resolved through the gazetteer, and the derived fields start neutral;
/// the pipeline computes them later.
pub fn node_from_event(event: &RawCarrierEvent, codebook: &CodeBook) -> StatusNode {
    let status = codebook.normalize(&event.carrier, &event.event_code, event.is_warning);
    StatusNode {
        id: Uuid::new_v4(),
        status,
        description: status.label().to_string(),
        timestamp: event.occurred_at,
        location: event
            .location_code
            .as_deref()
            .map(gazetteer::resolve_location),
        node_status: NodeStatus::default(),
        is_alert: false,
        raw_data: event.raw_data.clone(),
    }
}

/// Normalize a batch of raw events, preserving feed order.
pub fn nodes_from_events(events: &[RawCarrierEvent], codebook: &CodeBook) -> Vec<StatusNode> {
    events
        .iter()
        .map(|event| node_from_event(event, codebook))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopath_core::{CanonicalStatus, Timestamp};

    fn event(code: &str, is_warning: bool) -> RawCarrierEvent {
        RawCarrierEvent {
            container_number: "MSKU1234567".into(),
            carrier: CarrierId::new("feituo"),
            event_code: code.into(),
            occurred_at: Timestamp::parse("2026-03-15T12:00:00Z").unwrap(),
            location_code: Some("CNSHA".into()),
            is_warning,
            raw_data: serde_json::json!({ "vessel": "EVER GIVEN" }),
        }
    }

    #[test]
    fn test_node_from_event_normalizes() {
        let book = CodeBook::builtin();
        let node = node_from_event(&event("DLPT", false), &book);
        assert_eq!(node.status, CanonicalStatus::Departed);
        assert_eq!(node.description, "Vessel departed");
        assert_eq!(node.location.as_ref().unwrap().name, "Shanghai");
        assert_eq!(node.node_status, NodeStatus::Pending);
        assert!(!node.is_alert);
        assert_eq!(node.raw_data["vessel"], "EVER GIVEN");
    }

    #[test]
    fn test_warning_event_uses_warning_map() {
        let book = CodeBook::builtin();
        let node = node_from_event(&event("WDLPT", true), &book);
        assert_eq!(node.status, CanonicalStatus::Delayed);
    }

    #[test]
    fn test_unmapped_event_degrades_to_unknown() {
        let book = CodeBook::builtin();
        let node = node_from_event(&event("ZZZZ", false), &book);
        assert_eq!(node.status, CanonicalStatus::Unknown);
        assert_eq!(node.description, "Unknown status");
    }

    #[test]
    fn test_nodes_from_events_preserves_feed_order() {
        let book = CodeBook::builtin();
        let events = vec![event("DLPT", false), event("LOBD", false)];
        let nodes = nodes_from_events(&events, &book);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].status, CanonicalStatus::Departed);
        assert_eq!(nodes[1].status, CanonicalStatus::Loaded);
    }

    #[test]
    fn test_event_deserializes_with_defaults() {
        let json = r#"{
            "container_number": "COSU7654321",
            "carrier": "cosco",
            "event_code": "SAIL",
            "occurred_at": "2026-03-15T12:00:00Z"
        }"#;
        let event: RawCarrierEvent = serde_json::from_str(json).unwrap();
        assert!(!event.is_warning);
        assert!(event.location_code.is_none());
        assert!(event.raw_data.is_null());
    }
}
