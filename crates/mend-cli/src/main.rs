//! mend CLI
//!
//! Flags statistical outliers in a sensor CSV and forward-fills them.
//!
//! # Commands
//!
//! - `correct`: ingest, correct, write the corrected CSV, print the summary
//! - `summary`: ingest, correct, print the summary only
//! - `plot-data`: ingest, correct, write plot-ready JSON
//! - `config`: print the resolved configuration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mend_core::config::{CliOverrides, ObservabilityConfig};
use mend_core::{MendConfig, MendResult};

mod commands;
mod error;
mod tracing_setup;

use error::CliExitCode;

/// Sensor outlier detection and forward-fill correction
#[derive(Parser)]
#[command(name = "mend")]
#[command(version)]
#[command(about = "Flag sensor outliers by z-score and forward-fill them")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Directory searched for mend.toml (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct a CSV and write the result
    Correct(commands::correct::CorrectArgs),
    /// Print outlier and gap counts for a CSV
    Summary(commands::summary::SummaryArgs),
    /// Write raw/corrected/outlier plot data as JSON
    PlotData(commands::plot_data::PlotDataArgs),
    /// Print the resolved configuration as TOML
    Config,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = match &self.command {
            Commands::Correct(args) => args.overrides(),
            Commands::Summary(args) => args.input.overrides(),
            Commands::PlotData(args) => args.input.overrides(),
            Commands::Config => CliOverrides::default(),
        };
        if self.json_logs {
            overrides.json_logs = Some(true);
        }
        overrides
    }

    fn config_root(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = tracing_setup::with_bootstrap_subscriber(cli.verbose, cli.json_logs, || {
        MendConfig::load(&cli.config_root(), Some(&cli.overrides()))
    });
    let observability = loaded
        .as_ref()
        .map(|c| c.observability.clone())
        .unwrap_or_else(|_| ObservabilityConfig::default());
    tracing_setup::init_tracing(cli.verbose, &observability);

    let result = loaded
        .map_err(Into::into)
        .and_then(|config| run(cli.command, &config));

    match result {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            error::report(&e);
            error::exit_code_for_error(&e).into()
        }
    }
}

fn run(command: Commands, config: &MendConfig) -> MendResult<()> {
    match command {
        Commands::Correct(args) => commands::correct::handle(&args, config),
        Commands::Summary(args) => commands::summary::handle(&args, config),
        Commands::PlotData(args) => commands::plot_data::handle(&args, config),
        Commands::Config => commands::config::handle(config),
    }
}
