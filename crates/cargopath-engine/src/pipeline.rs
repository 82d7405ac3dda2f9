//! # Processing Pipeline
//!
//! Composes inference, sorting, and aggregation into the one entry point
//! that turns a raw node set into a processed [`StatusPath`].
//!
//! A path is recomputed from scratch on every call; there is no
//! incremental mutation. The clock is an explicit parameter so that a call
//! is referentially transparent given its inputs, which also makes the
//! pipeline safe to invoke concurrently from any number of request
//! handlers.

use cargopath_core::{RawStatusPath, StatusPath, Timestamp};

use crate::aggregate::calculate_path_status;
use crate::infer::infer_node_statuses;

/// Process a raw status path into its derived form.
///
/// Steps, in order:
///
/// 1. Infer `node_status` for every node over *input* order (index-based
///    lookahead; see [`infer_node_statuses`]) and stamp `is_alert` from the
///    status families.
/// 2. Stable-sort the nodes ascending by timestamp.
/// 3. Aggregate `overall_status` on the sorted set.
/// 4. `started_at` is the earliest timestamp, `None` for an empty path.
/// 5. `completed_at` is the latest timestamp iff that node carries the
///    terminal status.
pub fn process_status_path(raw: RawStatusPath, now: Timestamp) -> StatusPath {
    let RawStatusPath {
        container_number,
        mut nodes,
        eta,
    } = raw;

    let inferred = infer_node_statuses(&nodes, now);
    for (node, node_status) in nodes.iter_mut().zip(inferred) {
        node.node_status = node_status;
        node.is_alert = node.status.is_alert();
    }

    nodes.sort_by_key(|node| node.timestamp);

    let overall_status = calculate_path_status(&nodes);
    let started_at = nodes.first().map(|node| node.timestamp);
    let completed_at = nodes
        .last()
        .filter(|node| node.status.is_terminal())
        .map(|node| node.timestamp);

    StatusPath {
        container_number,
        nodes,
        overall_status,
        eta,
        started_at,
        completed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopath_core::{CanonicalStatus, NodeStatus, PathStatus, StatusNode};

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn node(status: CanonicalStatus, timestamp: &str) -> StatusNode {
        StatusNode::new(status, status.label(), ts(timestamp))
    }

    const NOW: &str = "2026-03-15T12:00:00Z";

    #[test]
    fn test_empty_path() {
        let path = process_status_path(RawStatusPath::default(), ts(NOW));
        assert!(path.nodes.is_empty());
        assert_eq!(path.overall_status, PathStatus::OnTime);
        assert!(path.started_at.is_none());
        assert!(path.completed_at.is_none());
    }

    #[test]
    fn test_nodes_sorted_ascending() {
        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::Departed, "2026-03-12T08:00:00Z"),
            node(CanonicalStatus::Loaded, "2026-03-11T08:00:00Z"),
            node(CanonicalStatus::GateIn, "2026-03-10T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        let stamps: Vec<_> = path.nodes.iter().map(|n| n.timestamp).collect();
        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(stamps, sorted);
        assert_eq!(path.started_at, Some(ts("2026-03-10T08:00:00Z")));
    }

    #[test]
    fn test_alert_flags_stamped() {
        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::Loaded, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::CustomsHold, "2026-03-11T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        assert!(!path.nodes[0].is_alert);
        assert!(path.nodes[1].is_alert);
        assert_eq!(path.overall_status, PathStatus::Hold);
    }

    #[test]
    fn test_completed_at_requires_terminal_last_node() {
        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::ReturnedEmpty, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Completed, "2026-03-11T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        assert_eq!(path.overall_status, PathStatus::Completed);
        assert_eq!(path.completed_at, Some(ts("2026-03-11T08:00:00Z")));

        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::Completed, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::GateIn, "2026-03-11T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        assert!(path.completed_at.is_none());
    }

    #[test]
    fn test_inference_runs_on_input_order() {
        // Feed order: a future-dated estimate followed by a confirmed past
        // event. The later array entry completes the earlier one even
        // though the sort will separate them.
        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::Arrived, "2026-03-20T08:00:00Z"),
            node(CanonicalStatus::Departed, "2026-03-12T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        // After the sort, the Arrived node is last but keeps the status it
        // earned in input order.
        assert_eq!(path.nodes[1].status, CanonicalStatus::Arrived);
        assert_eq!(path.nodes[1].node_status, NodeStatus::Completed);
    }

    #[test]
    fn test_eta_and_container_passthrough() {
        let raw = RawStatusPath {
            container_number: Some("COSU7654321".into()),
            nodes: vec![node(CanonicalStatus::Departed, "2026-03-12T08:00:00Z")],
            eta: Some(ts("2026-04-01T00:00:00Z")),
        };
        let path = process_status_path(raw, ts(NOW));
        assert_eq!(path.container_number.as_deref(), Some("COSU7654321"));
        assert_eq!(path.eta, Some(ts("2026-04-01T00:00:00Z")));
    }

    #[test]
    fn test_equal_timestamps_keep_feed_order() {
        let raw = RawStatusPath::from_nodes(vec![
            node(CanonicalStatus::GateIn, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Loaded, "2026-03-10T08:00:00Z"),
        ]);
        let path = process_status_path(raw, ts(NOW));
        // Stable sort: ties stay in feed order.
        assert_eq!(path.nodes[0].status, CanonicalStatus::GateIn);
        assert_eq!(path.nodes[1].status, CanonicalStatus::Loaded);
    }
}
