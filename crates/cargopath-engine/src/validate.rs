//! # Path Validation
//!
//! Checks a status path against the transition graph, time ordering, and
//! duplicate reporting, and returns a two-tier report:
//!
//! - **Errors** mean the sequence is inconsistent with the legal state
//!   machine and block validity.
//! - **Warnings** flag surface irregularities an eventually-consistent feed
//!   produces legitimately (out-of-order arrival, re-reported statuses);
//!   they never affect validity.
//!
//! Validation never panics and never returns a Rust `Err`; a malformed
//! path is a reportable domain outcome.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use cargopath_core::{is_valid_transition, CanonicalStatus, StatusPath};

/// A finding that makes the path inconsistent with the state machine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The path contains no nodes at all.
    #[error("status path contains no nodes")]
    EmptyPath,

    /// Two consecutive nodes form a transition the graph does not allow.
    #[error("illegal transition: {from_description} ({from}) -> {to_description} ({to})")]
    IllegalTransition {
        /// Status of the earlier node.
        from: CanonicalStatus,
        /// Description of the earlier node.
        from_description: String,
        /// Status of the later node.
        to: CanonicalStatus,
        /// Description of the later node.
        to_description: String,
    },
}

/// A surface irregularity that does not disprove an otherwise legal path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathWarning {
    /// A node's timestamp precedes its predecessor's.
    #[error("out-of-order timestamps: {current} reported earlier than {previous}")]
    OutOfOrderTimestamps {
        /// Description of the earlier-positioned node.
        previous: String,
        /// Description of the node whose timestamp went backward.
        current: String,
    },

    /// At least one canonical status appears more than once in the path.
    #[error("duplicate statuses present in path")]
    DuplicateStatus,
}

/// Outcome of validating one status path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True iff no errors were found. Warnings do not affect this.
    pub is_valid: bool,
    /// State-machine violations, in path order.
    #[serde(serialize_with = "as_messages")]
    pub errors: Vec<PathError>,
    /// Surface irregularities, in path order.
    #[serde(serialize_with = "as_messages")]
    pub warnings: Vec<PathWarning>,
}

impl ValidationReport {
    fn new(errors: Vec<PathError>, warnings: Vec<PathWarning>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Serialize findings as their rendered messages; consumers of the report
/// display them, they do not branch on them.
fn as_messages<S, T>(findings: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_seq(findings.iter().map(ToString::to_string))
}

/// Validate a status path against the transition graph.
///
/// An empty path short-circuits with a single [`PathError::EmptyPath`].
/// Otherwise every consecutive pair is checked for time ordering (warning)
/// and transition legality (one error per offending pair), and a single
/// aggregate warning covers any duplicated status.
pub fn validate_status_path(path: &StatusPath) -> ValidationReport {
    let nodes = &path.nodes;

    if nodes.is_empty() {
        return ValidationReport::new(vec![PathError::EmptyPath], Vec::new());
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for pair in nodes.windows(2) {
        if pair[1].timestamp < pair[0].timestamp {
            warnings.push(PathWarning::OutOfOrderTimestamps {
                previous: pair[0].description.clone(),
                current: pair[1].description.clone(),
            });
        }
    }

    for pair in nodes.windows(2) {
        if !is_valid_transition(pair[0].status, pair[1].status) {
            errors.push(PathError::IllegalTransition {
                from: pair[0].status,
                from_description: pair[0].description.clone(),
                to: pair[1].status,
                to_description: pair[1].description.clone(),
            });
        }
    }

    let distinct: HashSet<CanonicalStatus> = nodes.iter().map(|n| n.status).collect();
    if distinct.len() < nodes.len() {
        warnings.push(PathWarning::DuplicateStatus);
    }

    ValidationReport::new(errors, warnings)
}
