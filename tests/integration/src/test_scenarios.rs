//! Bucket scenarios run end to end.

#[cfg(test)]
mod tests {
    use bucketstat_core::{LatestUsage, StatsError};

    use crate::stats_for;

    #[test]
    fn test_should_report_single_present_object() {
        let stats = stats_for(&[("a.txt", 1, 100, true)], &[]).expect("summarize");

        assert_eq!(stats.present.num_files, 1);
        assert_eq!(stats.present.num_versions, 1);
        assert_eq!(stats.present.total_size, 100);
        assert_eq!(stats.present.latest_size, Some(100));
        assert_eq!(
            stats.present.pct_used_by_latest.map(|p| p.to_string()).as_deref(),
            Some("100.0")
        );
        assert_eq!(stats.deleted.num_files, 0);
    }

    #[test]
    fn test_should_report_object_behind_newer_marker_as_deleted() {
        let stats = stats_for(&[("a.txt", 1, 100, true)], &[("a.txt", 2)]).expect("summarize");

        assert_eq!(stats.deleted.num_files, 1);
        assert_eq!(stats.deleted.total_size, 100);
        assert_eq!(stats.deleted.num_versions, 1);
        assert_eq!(stats.present.num_files, 0);
        assert_eq!(stats.present.pct_used_by_latest, Some(LatestUsage::Zero));
    }

    #[test]
    fn test_should_report_marker_without_versions_as_empty_deleted_file() {
        let stats = stats_for(&[], &[("gone.txt", 5)]).expect("summarize");

        assert_eq!(stats.deleted.num_files, 1);
        assert_eq!(stats.deleted.total_size, 0);
        assert_eq!(stats.deleted.num_versions, 0);
        assert!(stats.deleted.average_size.abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_exclude_folder_from_both_buckets() {
        let stats = stats_for(&[("folder/", 1, 4096, true)], &[("old-folder/", 2)])
            .expect("summarize");

        assert_eq!(stats.present.num_files, 0);
        assert_eq!(stats.present.total_size, 0);
        assert_eq!(stats.deleted.num_files, 0);
        assert_eq!(stats.deleted.total_size, 0);
    }

    #[test]
    fn test_should_sum_every_version_of_a_key() {
        let stats = stats_for(&[("a.txt", 1, 100, false), ("a.txt", 2, 200, true)], &[])
            .expect("summarize");

        assert_eq!(stats.present.total_size, 300);
        assert_eq!(stats.present.num_versions, 2);
        assert!((stats.present.average_size - 150.0).abs() < f64::EPSILON);
        assert_eq!(stats.present.latest_size, Some(200));
    }

    #[test]
    fn test_should_mix_present_deleted_and_folder_keys() {
        let stats = stats_for(
            &[
                ("photos/", 1, 0, true),
                ("photos/a.jpg", 1, 1000, false),
                ("photos/a.jpg", 3, 3000, true),
                ("photos/b.jpg", 1, 500, false),
                ("photos/c.jpg", 4, 700, true),
                ("docs/readme.md", 2, 10, true),
            ],
            &[("photos/b.jpg", 2), ("photos/c.jpg", 4), ("tmp/scratch", 9)],
        )
        .expect("summarize");

        // a.jpg, c.jpg (tie with its marker), readme.md
        assert_eq!(stats.present.num_files, 3);
        assert_eq!(stats.present.num_versions, 4);
        assert_eq!(stats.present.total_size, 4710);
        assert_eq!(stats.present.latest_size, Some(3710));
        assert_eq!(
            stats.present.pct_used_by_latest,
            Some(LatestUsage::Percent(78.77))
        );

        // b.jpg (retained version) and tmp/scratch (marker only)
        assert_eq!(stats.deleted.num_files, 2);
        assert_eq!(stats.deleted.num_versions, 1);
        assert_eq!(stats.deleted.total_size, 500);
        assert!((stats.deleted.average_size - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_use_newest_marker_across_unordered_markers() {
        let stats = stats_for(
            &[("a.txt", 5, 10, false)],
            &[("a.txt", 9), ("a.txt", 1), ("a.txt", 3)],
        )
        .expect("summarize");

        assert_eq!(stats.deleted.num_files, 1);
        assert_eq!(stats.present.num_files, 0);
    }

    #[test]
    fn test_should_report_empty_bucket_listing() {
        let stats = stats_for(&[], &[]).expect("summarize");

        assert_eq!(stats.present.num_files, 0);
        assert_eq!(stats.deleted.num_files, 0);
        assert_eq!(stats.present.pct_used_by_latest, Some(LatestUsage::Zero));
    }

    #[test]
    fn test_should_abort_when_present_key_has_no_latest_version() {
        let err = stats_for(&[("a.txt", 3, 10, false)], &[]).unwrap_err();
        assert!(matches!(err, StatsError::MissingLatestSize { key } if key == "a.txt"));
    }
}
