//! # Progress and Delay Metrics
//!
//! Percent-complete for timeline rendering and per-gap delay-day counts
//! for exception reporting. Both are pure functions over the node data.

use cargopath_core::{NodeStatus, StatusNode, StatusPath};

/// Gap between consecutive milestones that counts as normal handling time.
/// Only time beyond this threshold accrues delay days.
const DELAY_THRESHOLD_HOURS: i64 = 24;

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Percent of the path completed, in `[0, 100]`.
///
/// Base is `completed / total * 100`; when exactly one node is in
/// progress, a flat 5-point bonus reflects the work underway. Clamped to
/// 100, and 0 for an empty path.
pub fn path_progress(path: &StatusPath) -> f64 {
    if path.nodes.is_empty() {
        return 0.0;
    }

    let completed = path
        .nodes
        .iter()
        .filter(|n| n.node_status == NodeStatus::Completed)
        .count();
    let in_progress = path
        .nodes
        .iter()
        .filter(|n| n.node_status == NodeStatus::InProgress)
        .count();

    let mut progress = completed as f64 / path.nodes.len() as f64 * 100.0;
    if in_progress == 1 {
        progress += 5.0;
    }

    progress.min(100.0)
}

/// Whole days of delay between two consecutive milestones.
///
/// The first 24 hours between `prev` and `curr` are free; anything beyond
/// is rounded up to whole days. Never negative, also when the pair arrives
/// out of order.
pub fn delay_days(prev: &StatusNode, curr: &StatusNode) -> i64 {
    let excess_secs =
        curr.timestamp.seconds_since(&prev.timestamp) - DELAY_THRESHOLD_HOURS * SECS_PER_HOUR;

    if excess_secs <= 0 {
        0
    } else {
        // Ceiling division on whole seconds.
        (excess_secs + SECS_PER_DAY - 1) / SECS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopath_core::{CanonicalStatus, PathStatus, Timestamp};

    fn node_with_status(node_status: NodeStatus) -> StatusNode {
        let mut node = StatusNode::new(
            CanonicalStatus::GateIn,
            "Gate in",
            Timestamp::parse("2026-03-15T12:00:00Z").unwrap(),
        );
        node.node_status = node_status;
        node
    }

    fn path(nodes: Vec<StatusNode>) -> StatusPath {
        StatusPath {
            container_number: None,
            nodes,
            overall_status: PathStatus::OnTime,
            eta: None,
            started_at: None,
            completed_at: None,
        }
    }

    fn node_at(timestamp: &str) -> StatusNode {
        StatusNode::new(
            CanonicalStatus::GateIn,
            "Gate in",
            Timestamp::parse(timestamp).unwrap(),
        )
    }

    // ---- path_progress ----

    #[test]
    fn test_progress_empty_path_is_zero() {
        assert_eq!(path_progress(&path(vec![])), 0.0);
    }

    #[test]
    fn test_progress_all_completed_is_hundred() {
        let p = path(vec![
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::Completed),
        ]);
        assert_eq!(path_progress(&p), 100.0);
    }

    #[test]
    fn test_progress_half_completed() {
        let p = path(vec![
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::Pending),
        ]);
        assert_eq!(path_progress(&p), 50.0);
    }

    #[test]
    fn test_progress_single_in_progress_bonus() {
        let p = path(vec![
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::InProgress),
            node_with_status(NodeStatus::Pending),
            node_with_status(NodeStatus::Pending),
        ]);
        assert_eq!(path_progress(&p), 30.0); // 25 + 5
    }

    #[test]
    fn test_progress_no_bonus_for_two_in_progress() {
        let p = path(vec![
            node_with_status(NodeStatus::InProgress),
            node_with_status(NodeStatus::InProgress),
        ]);
        assert_eq!(path_progress(&p), 0.0);
    }

    #[test]
    fn test_progress_bonus_applies() {
        let p = path(vec![
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::Completed),
            node_with_status(NodeStatus::InProgress),
        ]);
        assert_eq!(path_progress(&p), 80.0); // 75 + 5
    }

    #[test]
    fn test_progress_clamped_to_hundred() {
        // 20/21 completed puts the base above 95; the bonus would land at
        // 100.24 without the clamp.
        let mut nodes: Vec<StatusNode> = (0..20)
            .map(|_| node_with_status(NodeStatus::Completed))
            .collect();
        nodes.push(node_with_status(NodeStatus::InProgress));
        assert_eq!(path_progress(&path(nodes)), 100.0);
    }

    // ---- delay_days ----

    #[test]
    fn test_delay_within_threshold_is_zero() {
        let prev = node_at("2026-03-15T00:00:00Z");
        let curr = node_at("2026-03-15T10:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 0);
    }

    #[test]
    fn test_delay_exactly_threshold_is_zero() {
        let prev = node_at("2026-03-15T00:00:00Z");
        let curr = node_at("2026-03-16T00:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 0);
    }

    #[test]
    fn test_delay_thirty_hours_is_one_day() {
        let prev = node_at("2026-03-15T00:00:00Z");
        let curr = node_at("2026-03-16T06:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 1);
    }

    #[test]
    fn test_delay_exactly_two_days_is_one() {
        // 48h gap: 24h over the threshold rounds to exactly one day.
        let prev = node_at("2026-03-15T00:00:00Z");
        let curr = node_at("2026-03-17T00:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 1);
    }

    #[test]
    fn test_delay_forty_nine_hours_is_two_days() {
        let prev = node_at("2026-03-15T00:00:00Z");
        let curr = node_at("2026-03-17T01:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 2);
    }

    #[test]
    fn test_delay_out_of_order_pair_is_zero() {
        let prev = node_at("2026-03-17T00:00:00Z");
        let curr = node_at("2026-03-15T00:00:00Z");
        assert_eq!(delay_days(&prev, &curr), 0);
    }
}
