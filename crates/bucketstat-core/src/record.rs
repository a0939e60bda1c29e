//! Validated listing records.
//!
//! The wire model keeps every field optional; the pipeline only works on
//! records whose required fields are present. A single bad entry aborts the
//! whole run, since partial statistics over a malformed export would be
//! misleading.

use bucketstat_model::{DeleteMarkerEntry, ListObjectVersionsOutput, ObjectVersion};
use chrono::{DateTime, Utc};

use crate::error::{RecordKind, StatsError, StatsResult};

/// One physical stored version of an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Object key.
    pub key: String,
    /// Time the version was written.
    pub last_modified: DateTime<Utc>,
    /// Size in bytes.
    pub size: u64,
    /// Whether this is the currently retrievable version of the key.
    pub is_latest: bool,
}

/// One delete-marker event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMarkerRecord {
    /// Object key the marker hides.
    pub key: String,
    /// Time the marker was placed.
    pub last_modified: DateTime<Utc>,
}

impl VersionRecord {
    /// Validate a wire entry found at `index` of `Versions`.
    ///
    /// A missing `IsLatest` is read as `false`.
    pub fn from_wire(index: usize, entry: &ObjectVersion) -> StatsResult<Self> {
        let malformed = |field: &'static str| StatsError::MalformedRecord {
            kind: RecordKind::Version,
            index,
            field,
        };

        let key = entry.key.clone().ok_or_else(|| malformed("Key"))?;
        let last_modified = entry.last_modified.ok_or_else(|| malformed("LastModified"))?;
        let size = entry
            .size
            .and_then(|s| u64::try_from(s).ok())
            .ok_or_else(|| malformed("Size"))?;

        Ok(Self {
            key,
            last_modified,
            size,
            is_latest: entry.is_latest.unwrap_or(false),
        })
    }
}

impl DeleteMarkerRecord {
    /// Validate a wire entry found at `index` of `DeleteMarkers`.
    pub fn from_wire(index: usize, entry: &DeleteMarkerEntry) -> StatsResult<Self> {
        let malformed = |field: &'static str| StatsError::MalformedRecord {
            kind: RecordKind::DeleteMarker,
            index,
            field,
        };

        Ok(Self {
            key: entry.key.clone().ok_or_else(|| malformed("Key"))?,
            last_modified: entry.last_modified.ok_or_else(|| malformed("LastModified"))?,
        })
    }
}

/// Both record streams of a listing, validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecords {
    /// Records from `Versions`.
    pub versions: Vec<VersionRecord>,
    /// Records from `DeleteMarkers`.
    pub delete_markers: Vec<DeleteMarkerRecord>,
}

impl ListingRecords {
    /// Validate every entry of a listing, failing on the first malformed one.
    pub fn from_listing(listing: &ListObjectVersionsOutput) -> StatsResult<Self> {
        let versions = listing
            .versions
            .iter()
            .enumerate()
            .map(|(i, v)| VersionRecord::from_wire(i, v))
            .collect::<StatsResult<Vec<_>>>()?;
        let delete_markers = listing
            .delete_markers
            .iter()
            .enumerate()
            .map(|(i, m)| DeleteMarkerRecord::from_wire(i, m))
            .collect::<StatsResult<Vec<_>>>()?;

        Ok(Self {
            versions,
            delete_markers,
        })
    }
}
