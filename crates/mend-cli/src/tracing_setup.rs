//! Subscriber setup for the binary. Library crates only emit events.

use tracing_subscriber::EnvFilter;

use mend_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `MEND_LOG=mend_correction=debug,mend_io=info`.
pub const LOG_ENV_VAR: &str = "MEND_LOG";

/// `-v` flags win, then `MEND_LOG`, then the configured level.
fn filter_for(verbose: u8, observability: &ObservabilityConfig) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
            EnvFilter::new(observability.effective_log_level().to_ascii_lowercase())
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Subscriber used while configuration is being resolved, so warnings
/// about skipped files and ignored overrides reach stderr. Honours `-v`,
/// `MEND_LOG` and `--json-logs`; the configured level is not known yet.
pub fn with_bootstrap_subscriber<T>(verbose: u8, json_logs: bool, f: impl FnOnce() -> T) -> T {
    let observability = ObservabilityConfig {
        json_logs: Some(json_logs),
        ..ObservabilityConfig::default()
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose, &observability))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if json_logs {
        tracing::subscriber::with_default(builder.json().finish(), f)
    } else {
        tracing::subscriber::with_default(builder.finish(), f)
    }
}

/// Install the global subscriber, writing to stderr so stdout stays
/// clean for reports and JSON.
pub fn init_tracing(verbose: u8, observability: &ObservabilityConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose, observability))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if observability.effective_json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}
