//! Command handlers. Each ingests, corrects, then hands the result to
//! one or more sinks.

pub mod config;
pub mod correct;
pub mod plot_data;
pub mod summary;

use std::path::PathBuf;

use clap::Args;

use mend_core::config::CliOverrides;
use mend_core::{CorrectedSeries, MendConfig, MendResult, RecordSource, StdDevConvention};
use mend_correction::CorrectionEngine;
use mend_io::CsvSource;

/// Input file and correction tuning shared by every data command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// CSV file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Absolute z-score above which a reading is an outlier
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Standard deviation convention: population or sample
    #[arg(long, value_name = "CONVENTION")]
    pub std_dev: Option<StdDevConvention>,

    /// Name of the timestamp column
    #[arg(long, value_name = "NAME")]
    pub timestamp_column: Option<String>,

    /// Name of the reading column
    #[arg(long, value_name = "NAME")]
    pub value_column: Option<String>,

    /// Sort rows by timestamp instead of rejecting out-of-order input
    #[arg(long)]
    pub sort: bool,
}

impl InputArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threshold: self.threshold,
            std_dev: self.std_dev,
            timestamp_column: self.timestamp_column.clone(),
            value_column: self.value_column.clone(),
            sort_unordered: self.sort.then_some(true),
            ..CliOverrides::default()
        }
    }
}

/// Read `args.input` and run the corrector over it.
pub fn load_and_correct(args: &InputArgs, config: &MendConfig) -> MendResult<CorrectedSeries> {
    let series = CsvSource::from_path(&args.input, &config.ingest)?.read_series()?;
    let engine = CorrectionEngine::from_config(&config.correction);
    Ok(engine.correct(&series))
}
