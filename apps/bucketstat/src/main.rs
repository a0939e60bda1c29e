//! bucketstat - disk-usage statistics for versioned S3 buckets.
//!
//! # Usage
//!
//! ```text
//! bucketstat fetch my-bucket my-bucket.json
//! bucketstat process my-bucket.json --humanize
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BUCKETSTAT_INPUT` | `output.json` | Listing file read by `process` |
//! | `BUCKETSTAT_HUMANIZE` | `false` | Human-readable output for `process` |
//! | `BUCKETSTAT_AWS_CLI` | `aws` | AWS CLI program used by `fetch` |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;
mod fetch;
mod process;

use std::process::ExitCode;

use anyhow::{Context, Result};
use bucketstat_core::StatsConfig;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::fetch::FetchOutcome;

/// Initialize the tracing subscriber on stderr, keeping stdout for reports.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let defaults = StatsConfig::from_env();

    init_tracing(&defaults.log_level)?;
    info!(?cli, "parsed arguments");

    match cli.command {
        Command::Process(args) => {
            let config = args.config(defaults);
            let rendered = process::render_file(&config)?;
            if config.humanize {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Fetch(args) => match fetch::run(&args)? {
            FetchOutcome::Saved(path) => {
                info!(path = %path.display(), "listing saved");
                Ok(ExitCode::SUCCESS)
            }
            FetchOutcome::Failed(code) => Ok(ExitCode::from(u8::try_from(code).unwrap_or(1))),
        },
    }
}
