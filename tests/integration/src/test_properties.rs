//! Invariants that hold for every listing, checked over enumerated histories.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bucketstat_core::folder::is_folder;
    use bucketstat_core::normalize::{normalize_deletes, normalize_versions};
    use bucketstat_core::reconcile::{ObjectStatus, reconcile};
    use bucketstat_core::record::ListingRecords;

    use crate::{MarkerRow, VersionRow, listing, stats_for};

    const KEYS: [&str; 4] = ["a.txt", "b/c.bin", "dir/", "z"];

    /// Deterministic histories: each key gets a mix of versions and markers
    /// whose timestamps sweep below, equal to and above each other.
    fn histories() -> Vec<(Vec<VersionRow<'static>>, Vec<MarkerRow<'static>>)> {
        let mut out = Vec::new();
        for shift in 0..6_i64 {
            let mut versions = Vec::new();
            let mut markers = Vec::new();
            for (i, key) in KEYS.iter().enumerate() {
                let offset = i64::try_from(i).expect("small index");
                let n_versions = (shift + offset) % 3;
                for v in 0..n_versions {
                    let secs = 10 + v * 5 + offset;
                    versions.push((*key, secs, 100 * (v + 1), v == n_versions - 1));
                }
                if (shift + offset) % 2 == 0 {
                    markers.push((*key, 10 + shift * 3));
                }
            }
            out.push((versions, markers));
        }
        out
    }

    #[test]
    fn test_should_emit_exactly_the_union_of_keys() {
        for (versions, markers) in histories() {
            let records = ListingRecords::from_listing(&listing(&versions, &markers))
                .expect("records");
            let reconciled = reconcile(
                &normalize_deletes(&records.delete_markers),
                &normalize_versions(&records.versions),
            );

            let expected: BTreeSet<&str> = versions
                .iter()
                .map(|v| v.0)
                .chain(markers.iter().map(|m| m.0))
                .collect();
            let actual: BTreeSet<&str> = reconciled.keys().map(String::as_str).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_should_mark_deleted_only_when_marker_is_strictly_newer() {
        for (versions, markers) in histories() {
            let records = ListingRecords::from_listing(&listing(&versions, &markers))
                .expect("records");
            let reconciled = reconcile(
                &normalize_deletes(&records.delete_markers),
                &normalize_versions(&records.versions),
            );

            for (key, entry) in &reconciled {
                let newest_version = versions.iter().filter(|v| v.0 == key.as_str()).map(|v| v.1).max();
                let newest_marker = markers.iter().filter(|m| m.0 == key.as_str()).map(|m| m.1).max();
                let expected = match (newest_version, newest_marker) {
                    (Some(v), Some(m)) if m > v => ObjectStatus::Deleted,
                    (Some(_), _) => ObjectStatus::Present,
                    (None, _) => ObjectStatus::Deleted,
                };
                assert_eq!(entry.status, expected, "status of {key}");
                assert_eq!(entry.is_folder, is_folder(key));
            }
        }
    }

    #[test]
    fn test_should_conserve_non_folder_bytes_and_versions() {
        for (versions, markers) in histories() {
            let stats = stats_for(&versions, &markers).expect("summarize");

            let files: Vec<_> = versions.iter().filter(|v| !is_folder(v.0)).collect();
            let bytes: i64 = files.iter().map(|v| v.2).sum();
            let count = files.len();

            assert_eq!(
                stats.present.total_size + stats.deleted.total_size,
                u64::try_from(bytes).expect("non-negative")
            );
            assert_eq!(
                stats.present.num_versions + stats.deleted.num_versions,
                u64::try_from(count).expect("small count")
            );
        }
    }

    #[test]
    fn test_should_keep_average_consistent_with_totals() {
        for (versions, markers) in histories() {
            let stats = stats_for(&versions, &markers).expect("summarize");

            for bucket in [&stats.present, &stats.deleted] {
                if bucket.num_versions == 0 {
                    assert!(bucket.average_size.abs() < f64::EPSILON);
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let expected = bucket.total_size as f64 / bucket.num_versions as f64;
                    assert!((bucket.average_size - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_should_not_depend_on_entry_order() {
        for (versions, markers) in histories() {
            let forward = stats_for(&versions, &markers).expect("summarize");

            let mut rev_versions = versions.clone();
            rev_versions.reverse();
            let mut rev_markers = markers.clone();
            rev_markers.reverse();
            let backward = stats_for(&rev_versions, &rev_markers).expect("summarize");

            assert_eq!(forward, backward);
        }
    }
}
