use serde::{Deserialize, Serialize};

use super::Timestamp;

/// One sensor observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: Timestamp,
    /// `None` marks a gap in the sensor data.
    pub raw_value: Option<f64>,
}

impl Record {
    /// Create a record. `NaN` is treated as a missing reading.
    pub fn new(timestamp: Timestamp, raw_value: Option<f64>) -> Self {
        Self {
            timestamp,
            raw_value: raw_value.filter(|v| !v.is_nan()),
        }
    }

    /// A record carrying a reading.
    pub fn present(timestamp: Timestamp, value: f64) -> Self {
        Self::new(timestamp, Some(value))
    }

    /// A record with no reading.
    pub fn missing(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            raw_value: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.raw_value.is_none()
    }
}
