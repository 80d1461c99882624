use std::path::PathBuf;

use clap::Args;

use mend_core::config::CliOverrides;
use mend_core::{MendConfig, MendResult, SeriesSink};
use mend_io::{CsvExporter, SummaryReport};

use super::InputArgs;

#[derive(Args, Debug)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output CSV (default: corrected_sensor_data.csv)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Add score and is_outlier columns to the output
    #[arg(long)]
    pub annotate: bool,
}

impl CorrectArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            include_annotations: self.annotate.then_some(true),
            ..self.input.overrides()
        }
    }
}

pub fn handle(args: &CorrectArgs, config: &MendConfig) -> MendResult<()> {
    let corrected = super::load_and_correct(&args.input, config)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.export.effective_output_file()));
    let mut exporter = CsvExporter::create(&output, &config.export, &config.ingest)?;
    exporter.write_series(&corrected)?;

    println!("{}", SummaryReport::from(&corrected));
    println!("Corrected data written to {}", output.display());
    Ok(())
}
