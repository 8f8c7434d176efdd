use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use plantecon_core::model::{DistributionSpec, Parameter, ProjectParameters};
use plantecon_core::monte_carlo::STANDARD_PERCENTILES;
use plantecon_core::{
    analyze_profitability, monte_carlo_analysis_seeded, sensitivity_analysis, summarize,
};

mod format;
mod report;

#[derive(Parser, Debug)]
#[command(name = "plantecon")]
#[command(about = "Chemical-plant profitability analysis from the command line")]
struct Args {
    /// Emit machine-readable JSON instead of formatted tables
    #[arg(long, global = true)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single project parameter file
    Analyze {
        /// Path to a project-parameters JSON file
        params: PathBuf,
    },
    /// One-at-a-time sensitivity table over percent perturbations
    Sensitivity {
        /// Path to a project-parameters JSON file
        params: PathBuf,
        /// JSON array of [parameter, [percent changes]] pairs,
        /// e.g. [["annual_revenue", [-10, 0, 10]]]
        #[arg(long)]
        ranges: PathBuf,
    },
    /// Monte-Carlo risk analysis with sampled parameters
    MonteCarlo {
        /// Path to a project-parameters JSON file
        params: PathBuf,
        /// JSON array of [parameter, distribution] pairs, e.g.
        /// [["annual_revenue", {"type": "normal", "mean": 5e6, "std_dev": 5e5}]]
        #[arg(long)]
        distributions: PathBuf,
        /// Number of simulations to run
        #[arg(long, default_value_t = 1000)]
        simulations: usize,
        /// RNG seed for reproducible batches
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and deserialize a JSON input file.
fn load_json<T: DeserializeOwned>(path: &Path) -> color_eyre::Result<T> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Analyze { params } => {
            let params: ProjectParameters = load_json(&params)?;
            let result = analyze_profitability(&params)?;
            tracing::debug!(npv = result.npv, "analysis complete");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::render_analysis(&result));
            }
        }
        Command::Sensitivity { params, ranges } => {
            let params: ProjectParameters = load_json(&params)?;
            let ranges: Vec<(Parameter, Vec<f64>)> = load_json(&ranges)?;
            let rows = sensitivity_analysis(&params, &ranges)?;
            tracing::debug!(rows = rows.len(), "sensitivity table complete");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", report::render_sensitivity(&rows));
            }
        }
        Command::MonteCarlo {
            params,
            distributions,
            simulations,
            seed,
        } => {
            let params: ProjectParameters = load_json(&params)?;
            let distributions: Vec<(Parameter, DistributionSpec)> = load_json(&distributions)?;

            let results =
                monte_carlo_analysis_seeded(&params, &distributions, simulations, seed)?;
            if results.len() < simulations {
                tracing::warn!(
                    requested = simulations,
                    completed = results.len(),
                    "some simulations were skipped as structurally invalid"
                );
            }

            let stats = summarize(&results, &STANDARD_PERCENTILES)
                .ok_or_else(|| eyre!("no simulation produced a valid result"))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", report::render_monte_carlo(&stats));
            }
        }
    }

    Ok(())
}
