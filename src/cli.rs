use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Palmer drought indices from monthly precipitation and temperature.
#[derive(Parser)]
#[command(
    name = "palmer",
    version,
    about = "Palmer drought indices (PDSI, PHDI, PMDI) from monthly climatology"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute drought indices for every site in the input file.
    Compute(ComputeArgs),
    /// Print the monthly water balance of one site.
    WaterBalance(WaterBalanceArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "palmer.toml")]
    pub config: PathBuf,

    /// Override input sites JSON path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output JSON path from config (stdout if neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `water-balance` subcommand.
#[derive(clap::Args)]
pub struct WaterBalanceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "palmer.toml")]
    pub config: PathBuf,

    /// Override input sites JSON path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Name of the site to simulate (defaults to the first site).
    #[arg(short, long)]
    pub site: Option<String>,

    /// Path for the JSON table (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
