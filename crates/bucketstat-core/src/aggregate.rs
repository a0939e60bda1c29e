//! Usage aggregation.
//!
//! Rolls the reconciled per-key view into two [`StatsBucket`]s, one for
//! present objects and one for deleted objects. Folder placeholders are
//! skipped entirely. Buckets without versions report an average of zero.

use std::fmt;

use anyhow::anyhow;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{StatsError, StatsResult};
use crate::normalize::mean_size;
use crate::reconcile::{ObjectStatus, ReconciledMap};

/// Share of a bucket's bytes taken by the latest versions of its objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatestUsage {
    /// The bucket holds no bytes.
    Zero,
    /// Percentage, rounded to two decimals.
    Percent(f64),
}

impl LatestUsage {
    /// Compute `latest_size / total_size * 100`, rounded to two decimals with
    /// exact halves going to the even neighbor.
    ///
    /// ```
    /// use bucketstat_core::aggregate::LatestUsage;
    ///
    /// assert_eq!(LatestUsage::from_sizes(200, 300).to_string(), "66.67");
    /// assert_eq!(LatestUsage::from_sizes(100, 100).to_string(), "100.0");
    /// assert_eq!(LatestUsage::from_sizes(1, 32).to_string(), "3.12");
    /// assert_eq!(LatestUsage::from_sizes(0, 0).to_string(), "0");
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sizes(latest_size: u64, total_size: u64) -> Self {
        if total_size == 0 {
            return Self::Zero;
        }
        let percent = latest_size as f64 / total_size as f64 * 100.0;
        Self::Percent((percent * 100.0).round_ties_even() / 100.0)
    }
}

impl fmt::Display for LatestUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            // Debug keeps the shortest round-trip digits and always a fraction.
            Self::Percent(p) => write!(f, "{p:?}"),
        }
    }
}

impl Serialize for LatestUsage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregated usage of one object population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsBucket {
    /// Number of non-folder keys.
    pub num_files: u64,
    /// Number of retained versions across those keys.
    pub num_versions: u64,
    /// Bytes held by those versions.
    pub total_size: u64,
    /// `total_size / num_versions`, or zero without versions.
    pub average_size: f64,
    /// Bytes held by the latest versions. Tracked for present objects only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_size: Option<u64>,
    /// Share of `total_size` held by latest versions. Present objects only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_used_by_latest: Option<LatestUsage>,
}

impl StatsBucket {
    fn empty(tracks_latest: bool) -> Self {
        Self {
            num_files: 0,
            num_versions: 0,
            total_size: 0,
            average_size: 0.0,
            latest_size: tracks_latest.then_some(0),
            pct_used_by_latest: None,
        }
    }

    fn add(&mut self, num_versions: u64, total_size: u64) -> StatsResult<()> {
        self.num_files += 1;
        self.num_versions = checked_sum(self.num_versions, num_versions, "version count")?;
        self.total_size = checked_sum(self.total_size, total_size, "total size")?;
        Ok(())
    }

    fn finish(mut self) -> Self {
        self.average_size = mean_size(self.total_size, self.num_versions).unwrap_or_default();
        if let Some(latest_size) = self.latest_size {
            self.pct_used_by_latest = Some(LatestUsage::from_sizes(latest_size, self.total_size));
        }
        self
    }
}

/// Usage of a whole bucket, split by object status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStats {
    /// Objects that are currently retrievable.
    pub present: StatsBucket,
    /// Objects hidden behind a delete marker.
    pub deleted: StatsBucket,
}

/// Aggregate reconciled entries into present and deleted usage.
///
/// Fails if a present, non-folder entry carries no latest-version size: the
/// reconciler only marks a key present when a version outranks every delete
/// marker, and that version must be the one flagged `IsLatest`.
pub fn aggregate(reconciled: &ReconciledMap) -> StatsResult<UsageStats> {
    let mut present = StatsBucket::empty(true);
    let mut deleted = StatsBucket::empty(false);
    let mut folders = 0_usize;

    for (key, entry) in reconciled {
        if entry.is_folder {
            folders += 1;
            continue;
        }

        match entry.status {
            ObjectStatus::Present => {
                let latest_size = entry
                    .latest_size
                    .ok_or_else(|| StatsError::MissingLatestSize { key: key.clone() })?;
                present.add(entry.num_versions, entry.total_size)?;
                present.latest_size = Some(checked_sum(
                    present.latest_size.unwrap_or_default(),
                    latest_size,
                    "latest size",
                )?);
            }
            ObjectStatus::Deleted => {
                deleted.add(entry.num_versions, entry.total_size)?;
            }
        }
    }

    debug!(
        keys = reconciled.len(),
        folders,
        present_files = present.num_files,
        deleted_files = deleted.num_files,
        "aggregated usage"
    );

    Ok(UsageStats {
        present: present.finish(),
        deleted: deleted.finish(),
    })
}

fn checked_sum(acc: u64, value: u64, what: &str) -> StatsResult<u64> {
    acc.checked_add(value)
        .ok_or_else(|| StatsError::Internal(anyhow!("{what} overflowed while aggregating")))
}
