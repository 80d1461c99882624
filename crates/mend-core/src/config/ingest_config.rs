//! Ingestion configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// How tabular input is located and parsed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct IngestConfig {
    /// Header name of the timestamp column. Default: `timestamp`.
    pub timestamp_column: Option<String>,
    /// Header name of the reading column. Default: `sensor_value`.
    pub value_column: Option<String>,
    /// Explicit chrono format string. When unset, common formats are tried.
    pub timestamp_format: Option<String>,
    /// Cell contents treated as a missing reading. Empty uses the defaults.
    #[serde(default)]
    pub missing_markers: Vec<String>,
    /// Sort out-of-order rows instead of rejecting them. Default: false.
    pub sort_unordered: Option<bool>,
    /// Field delimiter. Default: `,`.
    pub delimiter: Option<char>,
}

impl IngestConfig {
    pub fn effective_timestamp_column(&self) -> &str {
        self.timestamp_column
            .as_deref()
            .unwrap_or(defaults::DEFAULT_TIMESTAMP_COLUMN)
    }

    pub fn effective_value_column(&self) -> &str {
        self.value_column
            .as_deref()
            .unwrap_or(defaults::DEFAULT_VALUE_COLUMN)
    }

    pub fn effective_sort_unordered(&self) -> bool {
        self.sort_unordered
            .unwrap_or(defaults::DEFAULT_SORT_UNORDERED)
    }

    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(defaults::DEFAULT_DELIMITER)
    }

    /// True when `cell` (already trimmed) marks a missing reading.
    pub fn is_missing_marker(&self, cell: &str) -> bool {
        if cell.is_empty() {
            return true;
        }
        if self.missing_markers.is_empty() {
            defaults::DEFAULT_MISSING_MARKERS.contains(&cell)
        } else {
            self.missing_markers.iter().any(|m| m == cell)
        }
    }
}
