//! # Status Nodes and Paths
//!
//! The data model the engine computes over: one [`StatusNode`] per observed
//! or predicted milestone, a [`RawStatusPath`] as the orchestrator's input,
//! and a processed [`StatusPath`] with derived aggregate fields as its
//! output.
//!
//! Derived fields (`node_status`, `is_alert`, `overall_status`,
//! `started_at`, `completed_at`) are recomputed from scratch on every
//! processing run; a path is never mutated incrementally. On input they
//! default to their neutral values so fresh feeds deserialize without them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::location::Location;
use crate::status::CanonicalStatus;
use crate::temporal::Timestamp;

/// Temporal state of a single node relative to the processing clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    /// The milestone has happened (or a later one has).
    Completed,
    /// Expected within the next 24 hours.
    InProgress,
    /// Expected later than 24 hours out.
    #[default]
    Pending,
}

/// Aggregate state of a whole path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathStatus {
    /// No holds, no delay advisories.
    #[default]
    OnTime,
    /// At least one delay-family node, no holds.
    Delayed,
    /// At least one hold-family node.
    Hold,
    /// The chronologically last node is the terminal status.
    Completed,
}

/// One milestone event on a shipment's journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusNode {
    /// Node identifier, minted at ingestion.
    pub id: Uuid,
    /// Canonical status this event normalized to.
    pub status: CanonicalStatus,
    /// Human-readable description (canonical label for normalized events,
    /// carrier-provided text where the feed supplies one).
    pub description: String,
    /// When the milestone occurred or is expected to occur.
    pub timestamp: Timestamp,
    /// Resolved event location, when the feed carried a location code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Derived temporal state; recomputed by the pipeline.
    #[serde(default)]
    pub node_status: NodeStatus,
    /// Derived alert flag; recomputed by the pipeline.
    #[serde(default)]
    pub is_alert: bool,
    /// Opaque source payload from the carrier, carried through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw_data: serde_json::Value,
}

impl StatusNode {
    /// Build a node with neutral derived fields and no location or payload.
    pub fn new(status: CanonicalStatus, description: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            description: description.into(),
            timestamp,
            location: None,
            node_status: NodeStatus::default(),
            is_alert: false,
            raw_data: serde_json::Value::Null,
        }
    }
}

/// Unprocessed input to the pipeline: nodes in feed order plus the optional
/// carrier ETA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatusPath {
    /// Shipment/container identifier from the feed, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    /// Milestone nodes in the order the feed delivered them.
    #[serde(default)]
    pub nodes: Vec<StatusNode>,
    /// Carrier-estimated time of arrival, passed through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<Timestamp>,
}

impl RawStatusPath {
    /// Wrap a node list with no container number or ETA.
    pub fn from_nodes(nodes: Vec<StatusNode>) -> Self {
        Self {
            container_number: None,
            nodes,
            eta: None,
        }
    }
}

/// A processed status path: nodes sorted ascending by timestamp plus the
/// derived aggregate fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPath {
    /// Shipment/container identifier, when the input carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    /// Milestone nodes, ascending by timestamp.
    pub nodes: Vec<StatusNode>,
    /// Aggregate path state.
    pub overall_status: PathStatus,
    /// Carrier-estimated time of arrival, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<Timestamp>,
    /// Earliest node timestamp; `None` for an empty path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// Latest node timestamp, only when that node is the terminal status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}
