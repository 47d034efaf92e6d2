//! Water-balance command: the monthly bookkeeping of a single site.

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use palmer_water_balance::simulate_water_balance;

use crate::cli::WaterBalanceArgs;
use crate::compute_cmd::write_or_print;
use crate::config;
use crate::convert;
use crate::input::{read_sites, with_missing};

/// Simulate one site's water balance and emit it as JSON.
pub fn run(args: WaterBalanceArgs) -> Result<()> {
    let _cmd = info_span!("water_balance").entered();
    let config = config::load(&args.config)?;

    let input = args
        .input
        .or(config.io.input)
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
    let sites = read_sites(&input)?.sites;

    let site = match &args.site {
        Some(name) => sites
            .iter()
            .find(|s| &s.name == name)
            .ok_or_else(|| anyhow!("site {name:?} not found in {}", input.display()))?,
        None => match sites.first() {
            Some(site) => site,
            None => bail!("sites file contains no sites: {}", input.display()),
        },
    };

    let temp_unit = convert::parse_temp_unit(&config.io.temp_unit)?;
    let precip_unit = convert::parse_precip_unit(&config.io.precip_unit)?;
    let wb_config = convert::build_palmer_config(site, &config.soil, None)?.water_balance();

    let precip: Vec<f64> = with_missing(&site.precip)
        .into_iter()
        .map(|v| convert::to_inches(v, precip_unit))
        .collect();
    let temp: Vec<f64> = with_missing(&site.temp)
        .into_iter()
        .map(|v| convert::to_fahrenheit(v, temp_unit))
        .collect();

    info!(site = %site.name, n_months = precip.len(), "simulating water balance");
    let balance = simulate_water_balance(&temp, &precip, &wb_config)
        .with_context(|| format!("water balance failed for site {:?}", site.name))?;

    let json = serde_json::to_string_pretty(&balance).context("failed to serialize output")?;
    write_or_print(args.output, &json)
}
