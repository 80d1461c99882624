//! Export configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// How a corrected series is written back out.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Append `score` and `is_outlier` columns. Default: false.
    pub include_annotations: Option<bool>,
    /// Output file name used when none is given. Default: `corrected_sensor_data.csv`.
    pub output_file: Option<String>,
    /// Field delimiter. Default: `,`.
    pub delimiter: Option<char>,
}

impl ExportConfig {
    pub fn effective_include_annotations(&self) -> bool {
        self.include_annotations
            .unwrap_or(defaults::DEFAULT_INCLUDE_ANNOTATIONS)
    }

    pub fn effective_output_file(&self) -> &str {
        self.output_file
            .as_deref()
            .unwrap_or(defaults::DEFAULT_OUTPUT_FILE)
    }

    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(defaults::DEFAULT_DELIMITER)
    }
}
