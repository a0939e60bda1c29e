//! End-to-end tests for bucketstat.
//!
//! Every test goes through the same path as the CLI: a JSON document shaped
//! like `aws s3api list-object-versions` output is decoded into the wire
//! model, validated, reconciled and aggregated.
//!
//! ```text
//! cargo test -p bucketstat-integration
//! ```

use std::sync::Once;

use bucketstat_core::{StatsResult, UsageStats, parse_listing, summarize};
use bucketstat_model::ListObjectVersionsOutput;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

mod test_properties;
mod test_scenarios;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A version entry: key, seconds since epoch, size, `IsLatest`.
pub type VersionRow<'a> = (&'a str, i64, i64, bool);

/// A delete-marker entry: key, seconds since epoch.
pub type MarkerRow<'a> = (&'a str, i64);

/// Render epoch seconds the way the AWS CLI does.
#[must_use]
pub fn aws_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build a listing document, omitting empty arrays as the AWS CLI does.
#[must_use]
pub fn listing_json(versions: &[VersionRow<'_>], markers: &[MarkerRow<'_>]) -> Value {
    let mut doc = json!({
        "Name": "test-bucket",
        "MaxKeys": 1000,
        "IsTruncated": false,
    });

    if !versions.is_empty() {
        doc["Versions"] = versions
            .iter()
            .enumerate()
            .map(|(i, (key, secs, size, is_latest))| {
                json!({
                    "ETag": "\"d41d8cd98f00b204e9800998ecf8427e\"",
                    "Size": size,
                    "StorageClass": "STANDARD",
                    "Key": key,
                    "VersionId": format!("v{i}"),
                    "IsLatest": is_latest,
                    "LastModified": aws_timestamp(*secs),
                    "Owner": { "DisplayName": "ops", "ID": "0000" },
                })
            })
            .collect();
    }
    if !markers.is_empty() {
        doc["DeleteMarkers"] = markers
            .iter()
            .enumerate()
            .map(|(i, (key, secs))| {
                json!({
                    "Owner": { "DisplayName": "ops", "ID": "0000" },
                    "Key": key,
                    "VersionId": format!("m{i}"),
                    "IsLatest": true,
                    "LastModified": aws_timestamp(*secs),
                })
            })
            .collect();
    }

    doc
}

/// Decode a listing built by [`listing_json`].
#[must_use]
pub fn listing(versions: &[VersionRow<'_>], markers: &[MarkerRow<'_>]) -> ListObjectVersionsOutput {
    let text = listing_json(versions, markers).to_string();
    parse_listing(&text).expect("listing should decode")
}

/// Summarize a listing built from rows.
pub fn stats_for(versions: &[VersionRow<'_>], markers: &[MarkerRow<'_>]) -> StatsResult<UsageStats> {
    init_tracing();
    summarize(&listing(versions, markers))
}
