//! Top-level mend configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, CorrectionConfig, ExportConfig, IngestConfig, ObservabilityConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::StdDevConvention;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MEND_*`)
/// 3. Project config (`mend.toml` in the working directory)
/// 4. User config (`~/.mend/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MendConfig {
    pub correction: CorrectionConfig,
    pub ingest: IngestConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threshold: Option<f64>,
    pub std_dev: Option<StdDevConvention>,
    pub timestamp_column: Option<String>,
    pub value_column: Option<String>,
    pub sort_unordered: Option<bool>,
    pub include_annotations: Option<bool>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

/// Environment variables read by `MendConfig::load`.
pub const ENV_VARS: &[&str] = &[
    "MEND_CORRECTION_THRESHOLD",
    "MEND_CORRECTION_STD_DEV",
    "MEND_INGEST_TIMESTAMP_COLUMN",
    "MEND_INGEST_VALUE_COLUMN",
    "MEND_INGEST_SORT_UNORDERED",
    "MEND_EXPORT_INCLUDE_ANNOTATIONS",
    "MEND_LOG_LEVEL",
];

impl MendConfig {
    /// Load configuration with layered resolution, reading the user
    /// config from `~/.mend/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_from(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit user config file.
    pub fn load_from(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { message, .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: format!("invalid TOML in user config: {message}"),
                        });
                    }
                    Err(e) => {
                        // An unreadable user config is not fatal; fall back to defaults.
                        tracing::warn!(
                            event = "user_config_skipped",
                            path = %user_config_path.display(),
                            error = %e,
                            "user config skipped"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MendConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.correction.threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "correction.threshold".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }

        let ts_col = config.ingest.effective_timestamp_column();
        let value_col = config.ingest.effective_value_column();
        if ts_col.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.timestamp_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if value_col.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.value_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if ts_col == value_col {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.value_column".to_string(),
                message: format!("must differ from the timestamp column '{ts_col}'"),
            });
        }

        // Exported files carry these columns next to the ingest columns.
        let mut reserved = vec![constants::CORRECTED_VALUE_COLUMN];
        if config.export.effective_include_annotations() {
            reserved.extend([constants::SCORE_COLUMN, constants::OUTLIER_COLUMN]);
        }
        for (field, column) in [
            ("ingest.timestamp_column", ts_col),
            ("ingest.value_column", value_col),
        ] {
            if reserved.contains(&column) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("'{column}' is written by export and cannot be an input column"),
                });
            }
        }

        for (field, delimiter) in [
            ("ingest.delimiter", config.ingest.delimiter),
            ("export.delimiter", config.export.delimiter),
        ] {
            if let Some(d) = delimiter {
                if !d.is_ascii() || d == '"' || d == '\n' || d == '\r' {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("'{}' cannot be used as a field delimiter", d.escape_default()),
                    });
                }
            }
        }

        if let Some(ref level) = config.observability.log_level {
            if !defaults::LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!("unknown level '{level}'"),
                });
            }
        }

        Ok(())
    }

    /// Returns the user config path: `~/.mend/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(defaults::USER_CONFIG_DIRNAME)
                .join(defaults::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MendConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MendConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut MendConfig, other: &MendConfig) {
        // Correction
        if other.correction.threshold.is_some() {
            base.correction.threshold = other.correction.threshold;
        }
        if other.correction.std_dev.is_some() {
            base.correction.std_dev = other.correction.std_dev;
        }

        // Ingest
        if other.ingest.timestamp_column.is_some() {
            base.ingest.timestamp_column = other.ingest.timestamp_column.clone();
        }
        if other.ingest.value_column.is_some() {
            base.ingest.value_column = other.ingest.value_column.clone();
        }
        if other.ingest.timestamp_format.is_some() {
            base.ingest.timestamp_format = other.ingest.timestamp_format.clone();
        }
        if !other.ingest.missing_markers.is_empty() {
            base.ingest.missing_markers = other.ingest.missing_markers.clone();
        }
        if other.ingest.sort_unordered.is_some() {
            base.ingest.sort_unordered = other.ingest.sort_unordered;
        }
        if other.ingest.delimiter.is_some() {
            base.ingest.delimiter = other.ingest.delimiter;
        }

        // Export
        if other.export.include_annotations.is_some() {
            base.export.include_annotations = other.export.include_annotations;
        }
        if other.export.output_file.is_some() {
            base.export.output_file = other.export.output_file.clone();
        }
        if other.export.delimiter.is_some() {
            base.export.delimiter = other.export.delimiter;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json_logs.is_some() {
            base.observability.json_logs = other.observability.json_logs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MEND_CORRECTION_THRESHOLD`, `MEND_INGEST_VALUE_COLUMN`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut MendConfig) {
        if let Ok(val) = std::env::var("MEND_CORRECTION_THRESHOLD") {
            match val.parse::<f64>() {
                Ok(v) => config.correction.threshold = Some(v),
                Err(_) => warn_ignored_env("MEND_CORRECTION_THRESHOLD", &val),
            }
        }
        if let Ok(val) = std::env::var("MEND_CORRECTION_STD_DEV") {
            match val.parse::<StdDevConvention>() {
                Ok(v) => config.correction.std_dev = Some(v),
                Err(_) => warn_ignored_env("MEND_CORRECTION_STD_DEV", &val),
            }
        }
        if let Ok(val) = std::env::var("MEND_INGEST_TIMESTAMP_COLUMN") {
            config.ingest.timestamp_column = Some(val);
        }
        if let Ok(val) = std::env::var("MEND_INGEST_VALUE_COLUMN") {
            config.ingest.value_column = Some(val);
        }
        if let Ok(val) = std::env::var("MEND_INGEST_SORT_UNORDERED") {
            match val.parse::<bool>() {
                Ok(v) => config.ingest.sort_unordered = Some(v),
                Err(_) => warn_ignored_env("MEND_INGEST_SORT_UNORDERED", &val),
            }
        }
        if let Ok(val) = std::env::var("MEND_EXPORT_INCLUDE_ANNOTATIONS") {
            match val.parse::<bool>() {
                Ok(v) => config.export.include_annotations = Some(v),
                Err(_) => warn_ignored_env("MEND_EXPORT_INCLUDE_ANNOTATIONS", &val),
            }
        }
        if let Ok(val) = std::env::var("MEND_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MendConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threshold {
            config.correction.threshold = Some(v);
        }
        if let Some(v) = cli.std_dev {
            config.correction.std_dev = Some(v);
        }
        if let Some(ref v) = cli.timestamp_column {
            config.ingest.timestamp_column = Some(v.clone());
        }
        if let Some(ref v) = cli.value_column {
            config.ingest.value_column = Some(v.clone());
        }
        if let Some(v) = cli.sort_unordered {
            config.ingest.sort_unordered = Some(v);
        }
        if let Some(v) = cli.include_annotations {
            config.export.include_annotations = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
        if let Some(v) = cli.json_logs {
            config.observability.json_logs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn warn_ignored_env(var: &str, value: &str) {
    tracing::warn!(
        event = "env_override_ignored",
        var = %var,
        value = %value,
        "ignoring unparseable environment override"
    );
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
