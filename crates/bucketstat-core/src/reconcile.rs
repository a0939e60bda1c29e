//! State reconciliation.
//!
//! Merges the per-key delete-marker and version summaries into one current
//! state per key. A key is deleted when its newest delete marker is strictly
//! newer than its newest version; a tie leaves the object present. Keys that
//! only have delete markers (every version expired by lifecycle policy or
//! removed by hand) are deleted with no retained data.
//!
//! The input maps are only borrowed. Every [`ReconciledEntry`] is built fresh
//! from the summaries it derives from.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::folder::is_folder;
use crate::normalize::{DeleteSummaries, DeleteSummary, VersionSummaries, VersionSummary};

/// Current state of an object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStatus {
    /// The key resolves to a retrievable version.
    Present,
    /// The key is hidden behind a delete marker.
    Deleted,
}

impl ObjectStatus {
    /// Return the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reconciled state of one key.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledEntry {
    /// Present or deleted.
    pub status: ObjectStatus,
    /// Whether the key is a folder placeholder.
    pub is_folder: bool,
    /// Time of the event that decided the status.
    pub last_modified: DateTime<Utc>,
    /// Sum of the sizes of every retained version.
    pub total_size: u64,
    /// Number of retained versions.
    pub num_versions: u64,
    /// Mean version size; `None` when no version is retained.
    pub average_size: Option<f64>,
    /// Size of the latest version, when one is flagged and the key is not a folder.
    pub latest_size: Option<u64>,
}

impl ReconciledEntry {
    /// A key known only through delete markers.
    fn marker_only(key: &str, marker: &DeleteSummary) -> Self {
        Self {
            status: ObjectStatus::Deleted,
            is_folder: is_folder(key),
            last_modified: marker.latest_modified,
            total_size: 0,
            num_versions: 0,
            average_size: None,
            latest_size: None,
        }
    }

    /// A key with retained versions, optionally shadowed by a delete marker.
    fn with_versions(key: &str, versions: &VersionSummary, marker: Option<&DeleteSummary>) -> Self {
        let (status, last_modified) = match marker {
            Some(marker) if marker.latest_modified > versions.latest_modified => {
                (ObjectStatus::Deleted, marker.latest_modified)
            }
            _ => (ObjectStatus::Present, versions.latest_modified),
        };

        Self {
            status,
            is_folder: is_folder(key),
            last_modified,
            total_size: versions.total_size,
            num_versions: versions.num_versions,
            average_size: Some(versions.average_size),
            latest_size: versions.latest_size,
        }
    }
}

/// Reconciled entries, ordered by key.
pub type ReconciledMap = BTreeMap<String, ReconciledEntry>;

/// Merge delete-marker and version summaries into one entry per key.
///
/// The result holds exactly the union of the keys of both inputs.
#[must_use]
pub fn reconcile(deletes: &DeleteSummaries, versions: &VersionSummaries) -> ReconciledMap {
    // Seed every marked key as deleted with nothing retained; only keys
    // without versions keep their seed.
    let mut reconciled: ReconciledMap = deletes
        .iter()
        .map(|(key, marker)| (key.clone(), ReconciledEntry::marker_only(key, marker)))
        .collect();

    for (key, summary) in versions {
        let entry = ReconciledEntry::with_versions(key, summary, deletes.get(key));
        reconciled.insert(key.clone(), entry);
    }

    debug!(
        delete_keys = deletes.len(),
        version_keys = versions.len(),
        keys = reconciled.len(),
        "reconciled object states"
    );
    reconciled
}
