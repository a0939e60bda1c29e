//! Command-line arguments.

use bucketstat_core::StatsConfig;
use bucketstat_core::config::DEFAULT_INPUT_FILE;
use clap::{Args, Parser, Subcommand};

/// Disk-usage statistics for versioned S3 buckets.
#[derive(Debug, Parser)]
#[command(name = "bucketstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print usage statistics from a `list-object-versions` export.
    Process(ProcessArgs),
    /// Export every version of a bucket with the AWS CLI.
    Fetch(FetchArgs),
}

/// Arguments of `bucketstat process`.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// JSON file to load (default: `BUCKETSTAT_INPUT` or `output.json`).
    pub file: Option<String>,

    /// Print aligned human-readable output instead of JSON.
    #[arg(long)]
    pub humanize: bool,
}

impl ProcessArgs {
    /// Overlay the arguments on configuration loaded from the environment.
    #[must_use]
    pub fn config(&self, defaults: StatsConfig) -> StatsConfig {
        StatsConfig {
            input_file: self.file.clone().unwrap_or(defaults.input_file),
            humanize: self.humanize || defaults.humanize,
            ..defaults
        }
    }
}

/// Arguments of `bucketstat fetch`.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Bucket to export.
    pub bucket: String,

    /// JSON file to write.
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    pub file: String,

    /// AWS CLI program to run.
    #[arg(long, env = "BUCKETSTAT_AWS_CLI", default_value = "aws")]
    pub aws_cli: String,
}
