//! Pipeline entry points.
//!
//! ```text
//! ListObjectVersionsOutput
//!        |  validate
//!        v
//!   ListingRecords ── normalize ──> DeleteSummaries + VersionSummaries
//!                                          |  reconcile
//!                                          v
//!                                    ReconciledMap ── aggregate ──> UsageStats
//! ```

use bucketstat_model::ListObjectVersionsOutput;
use tracing::info;

use crate::aggregate::{UsageStats, aggregate};
use crate::error::StatsResult;
use crate::normalize::{normalize_deletes, normalize_versions};
use crate::reconcile::reconcile;
use crate::record::ListingRecords;

/// Decode a `ListObjectVersions` JSON document.
pub fn parse_listing(json: &str) -> StatsResult<ListObjectVersionsOutput> {
    Ok(serde_json::from_str(json)?)
}

/// Validate a listing and compute its usage statistics.
///
/// # Examples
///
/// ```
/// use bucketstat_core::pipeline::{parse_listing, summarize};
///
/// let listing = parse_listing(
///     r#"{"Versions": [{"Key": "a.txt", "Size": 100, "IsLatest": true,
///                       "LastModified": "2021-01-01T00:00:00Z"}]}"#,
/// )?;
/// let stats = summarize(&listing)?;
/// assert_eq!(stats.present.num_files, 1);
/// assert_eq!(stats.present.total_size, 100);
/// # Ok::<(), bucketstat_core::error::StatsError>(())
/// ```
pub fn summarize(listing: &ListObjectVersionsOutput) -> StatsResult<UsageStats> {
    let records = ListingRecords::from_listing(listing)?;
    summarize_records(&records)
}

/// Compute usage statistics from already validated records.
pub fn summarize_records(records: &ListingRecords) -> StatsResult<UsageStats> {
    let deletes = normalize_deletes(&records.delete_markers);
    let versions = normalize_versions(&records.versions);
    let reconciled = reconcile(&deletes, &versions);
    let stats = aggregate(&reconciled)?;

    info!(
        versions = records.versions.len(),
        delete_markers = records.delete_markers.len(),
        keys = reconciled.len(),
        present_files = stats.present.num_files,
        deleted_files = stats.deleted.num_files,
        "computed bucket usage"
    );
    Ok(stats)
}
