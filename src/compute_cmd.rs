//! Compute command: drought indices for every site in a sites file.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span, warn};

use palmer_pdsi::compute_batch;

use crate::cli::ComputeArgs;
use crate::config;
use crate::convert;
use crate::input::read_sites;
use crate::output::{OutputFile, SiteOutput};

/// Run the compute pipeline.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();
    // 1. Load project TOML
    let mut config = config::load(&args.config)?;

    // 2. Apply CLI overrides
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }

    if let Some(threads) = config.run.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    // 3. Read sites
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
    info!(path = %input.display(), "reading sites");
    let sites = read_sites(input)?.sites;
    if sites.is_empty() {
        bail!("sites file contains no sites: {}", input.display());
    }
    info!(n_sites = sites.len(), "sites loaded");

    // 4. Build per-site inputs
    let temp_unit = convert::parse_temp_unit(&config.io.temp_unit)?;
    let precip_unit = convert::parse_precip_unit(&config.io.precip_unit)?;
    let calibration = convert::build_calibration(&config.calibration)?;
    let locations = sites
        .iter()
        .map(|site| {
            convert::build_location(site, &config.soil, calibration, temp_unit, precip_unit)
        })
        .collect::<Result<Vec<_>>>()?;

    // 5. Run the batch
    info!(n_sites = locations.len(), "computing drought indices");
    let results = compute_batch(&locations);

    let records: Vec<SiteOutput> = sites
        .iter()
        .zip(results)
        .map(|(site, result)| match result {
            Ok(out) => SiteOutput::computed(&site.name, &out),
            Err(e) => {
                warn!(site = %site.name, error = %e, "site failed");
                SiteOutput::failed(&site.name, site.start_year, site.precip.len(), e.to_string())
            }
        })
        .collect();

    let n_failed = records.iter().filter(|r| r.is_error()).count();
    if n_failed == records.len() {
        bail!("all {n_failed} sites failed; see log for details");
    }
    info!(
        n_ok = records.len() - n_failed,
        n_failed, "drought indices computed"
    );

    // 6. Write JSON
    let json = serde_json::to_string_pretty(&OutputFile { sites: records })
        .context("failed to serialize output")?;
    write_or_print(config.io.output, &json)
}

/// Writes `json` to `path`, or to stdout when no path is given.
pub fn write_or_print(path: Option<PathBuf>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
