use clap::Args;

use mend_core::{MendConfig, MendResult};
use mend_io::SummaryReport;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the report as JSON, including the sample statistics
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: &SummaryArgs, config: &MendConfig) -> MendResult<()> {
    let corrected = super::load_and_correct(&args.input, config)?;
    let report = SummaryReport::from(&corrected);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
