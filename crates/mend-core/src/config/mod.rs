//! Configuration system for mend.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod correction_config;
pub mod defaults;
pub mod export_config;
pub mod ingest_config;
pub mod mend_config;
pub mod observability_config;

pub use correction_config::CorrectionConfig;
pub use export_config::ExportConfig;
pub use ingest_config::IngestConfig;
pub use mend_config::{CliOverrides, MendConfig};
pub use observability_config::ObservabilityConfig;
