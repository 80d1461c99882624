//! # mend-core
//!
//! Foundation crate for the mend sensor corrector.
//! Defines the record and series types, errors, config, constants,
//! and the traits implemented by ingestion and export collaborators.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MendConfig;
pub use errors::{ConfigError, ExportError, InputError, MendError, MendResult};
pub use models::{
    AnnotatedRecord, CorrectedSeries, CorrectionSummary, DegenerateReason, Record, ScoreBasis,
    Series, StdDevConvention, Timestamp,
};
pub use traits::{RecordSource, SeriesSink};
