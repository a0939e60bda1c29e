//! `bucketstat process`: report usage from an exported listing.

use anyhow::{Context, Result};
use bucketstat_core::{Report, StatsConfig, parse_listing, summarize};
use tracing::info;

/// Load `config.input_file`, compute its statistics and render the report.
pub fn render_file(config: &StatsConfig) -> Result<String> {
    info!(input_file = %config.input_file, humanize = config.humanize, "processing listing");

    let json = std::fs::read_to_string(&config.input_file)
        .with_context(|| format!("failed to read {}", config.input_file))?;
    let listing = parse_listing(&json)
        .with_context(|| format!("failed to decode {}", config.input_file))?;
    let stats = summarize(&listing)?;

    Ok(Report::new(&stats, config).render(config)?)
}
