//! # Path Aggregation
//!
//! Folds a node set into one overall path status with a fixed precedence:
//! completion, then holds, then delays, then on-time. Hold outranks Delayed
//! regardless of which was reported more recently; a shipment stuck in
//! customs is not "merely late".

use cargopath_core::{PathStatus, StatusNode};

/// Derive the aggregate status of a path from its nodes.
///
/// Expects the nodes of a processed path (ascending by timestamp), so the
/// last element is the chronologically last milestone. Precedence:
///
/// 1. Last node is the terminal status: `Completed`.
/// 2. Any hold-family node: `Hold`.
/// 3. Any delay-family node: `Delayed`.
/// 4. Otherwise: `OnTime` (including the empty path; emptiness is the
///    validator's finding, not the aggregator's).
pub fn calculate_path_status(nodes: &[StatusNode]) -> PathStatus {
    let Some(last) = nodes.last() else {
        return PathStatus::OnTime;
    };

    if last.status.is_terminal() {
        return PathStatus::Completed;
    }

    if nodes.iter().any(|n| n.status.is_hold_family()) {
        return PathStatus::Hold;
    }

    if nodes.iter().any(|n| n.status.is_delay_family()) {
        return PathStatus::Delayed;
    }

    PathStatus::OnTime
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopath_core::{CanonicalStatus, StatusNode, Timestamp};

    fn node(status: CanonicalStatus, timestamp: &str) -> StatusNode {
        StatusNode::new(status, status.label(), Timestamp::parse(timestamp).unwrap())
    }

    #[test]
    fn test_empty_path_is_on_time() {
        assert_eq!(calculate_path_status(&[]), PathStatus::OnTime);
    }

    #[test]
    fn test_happy_path_is_on_time() {
        let nodes = vec![
            node(CanonicalStatus::Loaded, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Departed, "2026-03-11T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::OnTime);
    }

    #[test]
    fn test_terminal_last_node_completes_path() {
        let nodes = vec![
            node(CanonicalStatus::ReturnedEmpty, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Completed, "2026-03-11T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::Completed);
    }

    #[test]
    fn test_terminal_node_not_last_does_not_complete() {
        // A completion report followed by a later event does not close the
        // path; only the chronologically last node counts.
        let nodes = vec![
            node(CanonicalStatus::Completed, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::GateIn, "2026-03-11T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::OnTime);
    }

    #[test]
    fn test_hold_family_escalates() {
        let nodes = vec![
            node(CanonicalStatus::Loaded, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::CustomsHold, "2026-03-11T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::Hold);
    }

    #[test]
    fn test_hold_outranks_delay_regardless_of_recency() {
        let nodes = vec![
            node(CanonicalStatus::CustomsHold, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Delayed, "2026-03-12T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::Hold);
    }

    #[test]
    fn test_delay_family_marks_delayed() {
        let nodes = vec![
            node(CanonicalStatus::Departed, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Congestion, "2026-03-12T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::Delayed);
    }

    #[test]
    fn test_generic_hold_does_not_escalate_aggregate() {
        let nodes = vec![
            node(CanonicalStatus::GateIn, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Hold, "2026-03-11T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::OnTime);
    }

    #[test]
    fn test_terminal_wins_over_earlier_hold() {
        let nodes = vec![
            node(CanonicalStatus::CustomsHold, "2026-03-10T08:00:00Z"),
            node(CanonicalStatus::Completed, "2026-03-20T08:00:00Z"),
        ];
        assert_eq!(calculate_path_status(&nodes), PathStatus::Completed);
    }
}
