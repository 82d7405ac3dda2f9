//! # Node Status Inference
//!
//! Derives the temporal state of every node (completed, in progress,
//! pending) from its timestamp and its position in the feed.
//!
//! ## Rules, in evaluation order
//!
//! 1. If the node at `index + 1` has resolved to `Completed`, this node is
//!    `Completed`. Completion propagates backward through the sequence: a
//!    later confirmed milestone implies the earlier ones happened even when
//!    their own timestamps sit in the future (rescheduled estimates).
//! 2. Else, a timestamp at or before `now` is `Completed`.
//! 3. Else, a timestamp within the next 24 hours is `InProgress`.
//! 4. Else, `Pending`.
//!
//! Rule 1 reads an already-computed neighbor result, so the nodes are
//! evaluated in reverse: by the time index `i` is visited, `i + 1` is
//! resolved. "Next node" means the next node in *input* order, not time
//! order; inference runs before the pipeline's chronological sort.

use cargopath_core::{NodeStatus, StatusNode, Timestamp};

/// Hours ahead of the clock within which a node counts as in progress.
const IN_PROGRESS_WINDOW_HOURS: i64 = 24;

/// Infer the temporal state of every node in `nodes`, in input order.
///
/// The result is index-aligned with the input. `now` is the injected
/// processing clock; for a fixed `now` the function is a pure map.
pub fn infer_node_statuses(nodes: &[StatusNode], now: Timestamp) -> Vec<NodeStatus> {
    let mut statuses = vec![NodeStatus::Pending; nodes.len()];

    for index in (0..nodes.len()).rev() {
        if statuses.get(index + 1) == Some(&NodeStatus::Completed) {
            statuses[index] = NodeStatus::Completed;
            continue;
        }
        statuses[index] = temporal_status(nodes[index].timestamp, now);
    }

    statuses
}

/// Rules 2 to 4: classify a single timestamp against the clock.
fn temporal_status(timestamp: Timestamp, now: Timestamp) -> NodeStatus {
    if timestamp <= now {
        NodeStatus::Completed
    } else if timestamp <= now.add_hours(IN_PROGRESS_WINDOW_HOURS) {
        NodeStatus::InProgress
    } else {
        NodeStatus::Pending
    }
}
