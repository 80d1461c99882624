use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;

use mend_core::{ExportError, MendConfig, MendResult, SeriesSink};
use mend_io::PlotJsonSink;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct PlotDataArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn handle(args: &PlotDataArgs, config: &MendConfig) -> MendResult<()> {
    let corrected = super::load_and_correct(&args.input, config)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| ExportError::Io {
                message: format!("{}: {e}", path.display()),
            })?;
            PlotJsonSink::new(file).write_series(&corrected)?;
        }
        None => PlotJsonSink::new(io::stdout().lock()).write_series(&corrected)?,
    }
    Ok(())
}
