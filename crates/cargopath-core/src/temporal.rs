//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision. Every milestone time in the system flows through this type.
//!
//! ## Invariant
//!
//! Timestamps are UTC with Z suffix. Carrier feeds report event times in a
//! mix of local offsets; [`Timestamp::parse_lenient()`] converts them to UTC
//! at the ingestion boundary so that ordering, the 24-hour inference window,
//! and delay-day math never compare across timezones.
//!
//! The strict [`Timestamp::parse()`] rejects non-Z offsets outright and is
//! the right choice for data this system itself produced.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CargopathError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — from an ISO8601 string with any offset,
///   converted to UTC. Use for external carrier feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    ///
    /// The processing pipeline never calls this internally; callers read the
    /// clock once and pass the value down, keeping every computation
    /// reproducible for a fixed `now`.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted; explicit
    /// offsets like `+00:00` or `+05:30` are rejected even when semantically
    /// equivalent to UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a non-Z
    /// timezone offset.
    pub fn parse(s: &str) -> Result<Self, CargopathError> {
        if !s.ends_with('Z') {
            return Err(CargopathError::Timestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CargopathError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// This is the lenient parser for ingesting external carrier data. The
    /// result is always UTC with seconds precision, matching the strict
    /// invariant.
    pub fn parse_lenient(s: &str) -> Result<Self, CargopathError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CargopathError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, CargopathError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            CargopathError::Timestamp(format!("invalid Unix timestamp: {secs}"))
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns this timestamp shifted by a whole number of hours.
    ///
    /// Negative values shift into the past. Saturates at the chrono range
    /// bounds rather than panicking.
    pub fn add_hours(&self, hours: i64) -> Self {
        match self.0.checked_add_signed(Duration::hours(hours)) {
            Some(dt) => Self(dt),
            None => *self,
        }
    }

    /// Signed number of seconds from `earlier` to `self`.
    ///
    /// Positive when `self` is later than `earlier`.
    pub fn seconds_since(&self, earlier: &Timestamp) -> i64 {
        self.0.timestamp() - earlier.0.timestamp()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-03-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
