//! `bucketstat fetch`: export a bucket's version history with the AWS CLI.
//!
//! The listing is streamed into a temporary file next to the destination and
//! only renamed into place once the CLI exits successfully, so a failed or
//! interrupted export never leaves a truncated document behind.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::cli::FetchArgs;

/// Prefix of the temporary export file.
const TEMP_PREFIX: &str = "tmp-output";

/// Result of a fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The listing was written to this path.
    Saved(PathBuf),
    /// The AWS CLI exited unsuccessfully with this code.
    Failed(i32),
}

/// Build the `list-object-versions` invocation for `bucket`.
fn list_versions_command(aws_cli: &str, bucket: &str) -> Command {
    let mut command = Command::new(aws_cli);
    command
        .args(["s3api", "list-object-versions", "--bucket"])
        .arg(bucket);
    command
}

/// Run the export described by `args`.
pub fn run(args: &FetchArgs) -> Result<FetchOutcome> {
    let output = Path::new(&args.file);
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    info!(path = %temp.path().display(), "temp file created");

    let stdout = temp
        .reopen()
        .context("failed to open temp file for the AWS CLI")?;
    let mut command = list_versions_command(&args.aws_cli, &args.bucket);
    command.stdout(Stdio::from(stdout));

    info!(
        command = ?command,
        "listing object versions, this may take a minute or more"
    );
    let status = command
        .status()
        .with_context(|| format!("failed to run {}", args.aws_cli))?;

    if !status.success() {
        let code = status.code().unwrap_or(1);
        error!(command = ?command, code, "AWS CLI exited unsuccessfully");
        return Ok(FetchOutcome::Failed(code));
    }

    info!(from = %temp.path().display(), to = %output.display(), "renaming temp file");
    temp.persist(output)
        .with_context(|| format!("failed to move listing into {}", output.display()))?;

    Ok(FetchOutcome::Saved(output.to_path_buf()))
}
