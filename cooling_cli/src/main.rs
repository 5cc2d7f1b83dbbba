//! # Solar Cooling CLI
//!
//! Command-line front-end for `cooling_core`. Parses flags into a
//! `CoolingConfig`, runs validate → calculate → save, and prints a summary.
//!
//! Exit status is 0 on success (or `--version`) and 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cooling_core::{
    calculate, render_summary, save_results, validate, CoolingConfig, CoolingResult, Settings,
};

const EXAMPLES: &str = "\
Examples:
  solar-cooling -r 100 -c 0.15
  solar-cooling --reduction 150.5 --cost 0.12 --cop 3.5 --shgc 0.3 -o results";

/// Solar Cooling Energy Calculator for Medical Clinics
#[derive(Debug, Parser)]
#[command(
    name = "solar-cooling",
    disable_version_flag = true,
    allow_negative_numbers = true,
    after_help = EXAMPLES
)]
struct Args {
    /// Total solar radiation reduction in kWh/day (required)
    #[arg(short = 'r', long)]
    reduction: Option<f64>,

    /// Electricity cost in $/kWh (required)
    #[arg(short = 'c', long)]
    cost: Option<f64>,

    /// Building location [default: Sacramento]
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// AC Coefficient of Performance [default: 4.0]
    #[arg(long)]
    cop: Option<f64>,

    /// Solar Heat Gain Coefficient [default: 0.25]
    #[arg(long)]
    shgc: Option<f64>,

    /// Window to Wall Ratio [default: 0.40]
    #[arg(long)]
    wwr: Option<f64>,

    /// Output directory for CSV and JSON files [default: results]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TOML settings file with default overrides
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show detailed assumptions and calculations
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Show program version
    #[arg(short = 'V', long)]
    version: bool,
}

impl Args {
    /// Layer defaults, the optional settings file, then flags.
    fn to_config(&self) -> CoolingResult<CoolingConfig> {
        let mut config = CoolingConfig::default();

        if let Some(path) = &self.config {
            config.apply(&Settings::load(path)?);
        }

        if let Some(reduction) = self.reduction {
            config.solar_reduction = reduction;
        }
        if let Some(cost) = self.cost {
            config.electricity_cost = cost;
        }
        if let Some(location) = &self.location {
            config.location = location.clone();
        }
        if let Some(cop) = self.cop {
            config.ac_cop = cop;
        }
        if let Some(shgc) = self.shgc {
            config.shgc = shgc;
        }
        if let Some(wwr) = self.wwr {
            config.wwr = wwr;
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::INFO } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> CoolingResult<()> {
    let config = args.to_config()?;
    validate(&config)?;
    tracing::debug!(?config, "configuration validated");

    let result = calculate(&config);
    let paths = save_results(&result, &config.output_dir)?;
    tracing::info!(json = %paths.json.display(), csv = %paths.csv.display(), "results saved");

    print!("{}", render_summary(&result, args.verbose));
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    if args.version {
        println!("Solar Cooling Energy Calculator v{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
