//! Disk-usage statistics for versioned S3 buckets.
//!
//! Takes the export of a `ListObjectVersions` call, reconstructs the current
//! state of every key from its versions and delete markers, and reports how
//! many bytes are held by present objects versus objects that have been
//! deleted but still have retained versions.
//!
//! # Architecture
//!
//! ```text
//! ListObjectVersionsOutput (bucketstat-model)
//!        |
//!        v
//!   record     (validated VersionRecord / DeleteMarkerRecord)
//!        |
//!        v
//!   normalize  (one summary per key and stream)
//!        |
//!        v
//!   reconcile  (present / deleted per key)
//!        |
//!        v
//!   aggregate  (UsageStats) ──> report (JSON or text)
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod folder;
pub mod humanize;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod record;
pub mod report;

pub use aggregate::{LatestUsage, StatsBucket, UsageStats};
pub use config::StatsConfig;
pub use error::{StatsError, StatsResult};
pub use pipeline::{parse_listing, summarize};
pub use report::Report;
