//! Event normalization.
//!
//! Collapses the raw version and delete-marker streams into one summary per
//! object key. Both passes are order-independent: the latest-modified time of
//! a key is the maximum timestamp observed for it, and an equal timestamp
//! never replaces the one already recorded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::folder::is_folder;
use crate::record::{DeleteMarkerRecord, VersionRecord};

/// Delete markers collapsed to one entry per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSummary {
    /// Latest delete-marker timestamp for the key.
    pub latest_modified: DateTime<Utc>,
}

/// Versions collapsed to one entry per key.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionSummary {
    /// Latest version timestamp for the key.
    pub latest_modified: DateTime<Utc>,
    /// Sum of the sizes of every version of the key.
    pub total_size: u64,
    /// Number of versions of the key. Always at least one.
    pub num_versions: u64,
    /// Size of the version flagged `IsLatest`, unless the key is a folder.
    pub latest_size: Option<u64>,
    /// `total_size / num_versions`.
    pub average_size: f64,
}

/// Per-key delete-marker summaries, ordered by key.
pub type DeleteSummaries = BTreeMap<String, DeleteSummary>;

/// Per-key version summaries, ordered by key.
pub type VersionSummaries = BTreeMap<String, VersionSummary>;

/// Running totals for one key while versions are being folded in.
#[derive(Debug)]
struct VersionTally {
    latest_modified: DateTime<Utc>,
    total_size: u64,
    num_versions: u64,
    latest_size: Option<u64>,
}

impl VersionTally {
    fn new(record: &VersionRecord) -> Self {
        Self {
            latest_modified: record.last_modified,
            total_size: record.size,
            num_versions: 1,
            latest_size: None,
        }
    }

    fn add(&mut self, record: &VersionRecord) {
        self.total_size = self.total_size.saturating_add(record.size);
        self.num_versions += 1;
        if record.last_modified > self.latest_modified {
            self.latest_modified = record.last_modified;
        }
    }

    fn into_summary(self) -> VersionSummary {
        VersionSummary {
            latest_modified: self.latest_modified,
            total_size: self.total_size,
            num_versions: self.num_versions,
            latest_size: self.latest_size,
            average_size: mean_size(self.total_size, self.num_versions).unwrap_or_default(),
        }
    }
}

/// Collapse delete markers into one [`DeleteSummary`] per key.
#[must_use]
pub fn normalize_deletes(records: &[DeleteMarkerRecord]) -> DeleteSummaries {
    let mut summaries = DeleteSummaries::new();

    for record in records {
        summaries
            .entry(record.key.clone())
            .and_modify(|summary| {
                if record.last_modified > summary.latest_modified {
                    summary.latest_modified = record.last_modified;
                }
            })
            .or_insert(DeleteSummary {
                latest_modified: record.last_modified,
            });
    }

    debug!(
        records = records.len(),
        keys = summaries.len(),
        "normalized delete markers"
    );
    summaries
}

/// Collapse versions into one [`VersionSummary`] per key.
#[must_use]
pub fn normalize_versions(records: &[VersionRecord]) -> VersionSummaries {
    let mut tallies: BTreeMap<&str, VersionTally> = BTreeMap::new();

    for record in records {
        let tally = tallies
            .entry(record.key.as_str())
            .and_modify(|tally| tally.add(record))
            .or_insert_with(|| VersionTally::new(record));

        if record.is_latest && !is_folder(&record.key) {
            tally.latest_size = Some(record.size);
        }
    }

    let summaries: VersionSummaries = tallies
        .into_iter()
        .map(|(key, tally)| (key.to_owned(), tally.into_summary()))
        .collect();

    debug!(
        records = records.len(),
        keys = summaries.len(),
        "normalized versions"
    );
    summaries
}

/// Mean size per version, or `None` when there are no versions.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_size(total_size: u64, num_versions: u64) -> Option<f64> {
    (num_versions > 0).then(|| total_size as f64 / num_versions as f64)
}
