mod cli;
mod compute_cmd;
mod config;
mod convert;
mod input;
mod logging;
mod output;
mod water_balance_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Compute(args) => compute_cmd::run(args),
        Command::WaterBalance(args) => water_balance_cmd::run(args),
    }
}
