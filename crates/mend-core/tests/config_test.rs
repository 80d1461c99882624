//! Tests for the mend configuration system.

use std::sync::Mutex;

use mend_core::config::mend_config::ENV_VARS;
use mend_core::config::{CliOverrides, MendConfig};
use mend_core::errors::ConfigError;
use mend_core::StdDevConvention;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all MEND_ env vars to prevent cross-test contamination.
fn clear_mend_env_vars() {
    for key in ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    let dir = tempdir();
    let user_toml = dir.path().join("user.toml");
    std::fs::write(
        &user_toml,
        r#"
[correction]
threshold = 2.0
std_dev = "sample"

[ingest]
value_column = "flow"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("mend.toml"),
        r#"
[correction]
threshold = 2.5

[export]
include_annotations = true
"#,
    )
    .unwrap();

    std::env::set_var("MEND_INGEST_VALUE_COLUMN", "flow_rate");

    let cli = CliOverrides {
        threshold: Some(4.0),
        ..Default::default()
    };
    let config = MendConfig::load_from(dir.path(), Some(&user_toml), Some(&cli)).unwrap();

    // CLI beats project and user
    assert_eq!(config.correction.effective_threshold(), 4.0);
    // User value survives when nothing above sets it
    assert_eq!(config.correction.effective_std_dev(), StdDevConvention::Sample);
    // Env beats user
    assert_eq!(config.ingest.effective_value_column(), "flow_rate");
    // Project value applies
    assert!(config.export.effective_include_annotations());

    clear_mend_env_vars();
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    let dir = tempdir();
    let config = MendConfig::load_from(dir.path(), None, None).unwrap();

    assert_eq!(config.correction.effective_threshold(), 3.0);
    assert_eq!(config.correction.effective_std_dev(), StdDevConvention::Population);
    assert_eq!(config.ingest.effective_timestamp_column(), "timestamp");
    assert_eq!(config.ingest.effective_value_column(), "sensor_value");
    assert!(!config.ingest.effective_sort_unordered());
    assert_eq!(config.export.effective_output_file(), "corrected_sensor_data.csv");
    assert_eq!(config.observability.effective_log_level(), "warn");
}

#[test]
fn test_invalid_project_toml_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("mend.toml"), "[correction\nthreshold = ").unwrap();

    let err = MendConfig::load_from(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_invalid_user_toml_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    let dir = tempdir();
    let user_toml = dir.path().join("user.toml");
    std::fs::write(&user_toml, "threshold = = 3").unwrap();

    let err = MendConfig::load_from(dir.path(), Some(&user_toml), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("user.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    std::env::set_var("MEND_CORRECTION_THRESHOLD", "three");
    std::env::set_var("MEND_INGEST_SORT_UNORDERED", "true");

    let dir = tempdir();
    let config = MendConfig::load_from(dir.path(), None, None).unwrap();
    assert_eq!(config.correction.threshold, None);
    assert_eq!(config.ingest.sort_unordered, Some(true));

    clear_mend_env_vars();
}

#[test]
fn test_env_threshold_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mend_env_vars();

    std::env::set_var("MEND_CORRECTION_THRESHOLD", "-1");
    let dir = tempdir();
    let err = MendConfig::load_from(dir.path(), None, None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "correction.threshold"
    ));

    clear_mend_env_vars();
}

#[test]
fn test_validation_rejects_bad_values() {
    for toml_str in [
        "[correction]\nthreshold = 0.0",
        "[correction]\nthreshold = nan",
        "[ingest]\ntimestamp_column = \"\"",
        "[ingest]\ntimestamp_column = \"t\"\nvalue_column = \"t\"",
        "[ingest]\ndelimiter = \"\\n\"",
        "[observability]\nlog_level = \"loud\"",
    ] {
        let result = MendConfig::from_toml(toml_str);
        assert!(
            matches!(result, Err(ConfigError::ValidationFailed { .. })),
            "expected validation failure for {toml_str:?}, got {result:?}"
        );
    }
}

#[test]
fn test_input_columns_must_not_shadow_export_columns() {
    for toml_str in [
        "[ingest]\nvalue_column = \"corrected_value\"",
        "[ingest]\ntimestamp_column = \"corrected_value\"",
        "[ingest]\nvalue_column = \"score\"\n[export]\ninclude_annotations = true",
    ] {
        let result = MendConfig::from_toml(toml_str);
        assert!(
            matches!(result, Err(ConfigError::ValidationFailed { .. })),
            "expected validation failure for {toml_str:?}, got {result:?}"
        );
    }

    // Annotation names are free when annotations are not exported.
    let config = MendConfig::from_toml("[ingest]\nvalue_column = \"score\"").unwrap();
    assert_eq!(config.ingest.effective_value_column(), "score");
}

#[test]
fn test_unknown_std_dev_is_a_parse_error() {
    let result = MendConfig::from_toml("[correction]\nstd_dev = \"median\"");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_custom_missing_markers_replace_defaults() {
    let config = MendConfig::from_toml("[ingest]\nmissing_markers = [\"-999\"]").unwrap();
    assert!(config.ingest.is_missing_marker("-999"));
    assert!(config.ingest.is_missing_marker(""));
    assert!(!config.ingest.is_missing_marker("NaN"));

    let defaults = MendConfig::default();
    assert!(defaults.ingest.is_missing_marker("NaN"));
    assert!(defaults.ingest.is_missing_marker("N/A"));
    assert!(!defaults.ingest.is_missing_marker("0"));
}

#[test]
fn test_toml_round_trip() {
    let config = MendConfig::from_toml(
        r#"
[correction]
threshold = 3.5
std_dev = "sample"

[ingest]
delimiter = ";"
"#,
    )
    .unwrap();

    let rendered = config.to_toml().unwrap();
    let reparsed = MendConfig::from_toml(&rendered).unwrap();
    assert_eq!(config, reparsed);
    assert_eq!(reparsed.ingest.effective_delimiter(), ';');
}
