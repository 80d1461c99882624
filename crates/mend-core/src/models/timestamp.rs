use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TIMESTAMP_OUTPUT_FORMAT;

/// An ordered instant attached to a reading.
///
/// Timezone-aware inputs are normalized to UTC at ingestion, so two
/// timestamps always compare on the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Build from whole seconds since the Unix epoch. Returns `None` when
    /// the value is outside chrono's representable range.
    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| Self(dt.naive_utc()))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.naive_utc())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_OUTPUT_FORMAT))
    }
}
