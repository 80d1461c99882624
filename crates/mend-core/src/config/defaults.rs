// Single source of truth for all default values.

use crate::constants;
use crate::models::StdDevConvention;

// --- Correction ---
pub const DEFAULT_THRESHOLD: f64 = constants::OUTLIER_Z_THRESHOLD;
pub const DEFAULT_STD_DEV: StdDevConvention = StdDevConvention::Population;

// --- Ingest ---
pub const DEFAULT_TIMESTAMP_COLUMN: &str = constants::TIMESTAMP_COLUMN;
pub const DEFAULT_VALUE_COLUMN: &str = constants::SENSOR_VALUE_COLUMN;
pub const DEFAULT_SORT_UNORDERED: bool = false;
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_MISSING_MARKERS: &[&str] = &["", "NaN", "nan", "NA", "N/A", "null", "None"];

// --- Export ---
pub const DEFAULT_OUTPUT_FILE: &str = "corrected_sensor_data.csv";
pub const DEFAULT_INCLUDE_ANNOTATIONS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "mend.toml";
pub const USER_CONFIG_DIRNAME: &str = ".mend";
pub const USER_CONFIG_FILENAME: &str = "config.toml";
