//! Error types for bucket statistics.
//!
//! [`StatsError`] covers the two fatal classes of failure: input the pipeline
//! refuses to aggregate (a malformed record) and reconciliation output that
//! breaks an aggregation invariant. A bucket with zero versions is not an
//! error; its averages degrade to zero.
//!
//! # Usage
//!
//! ```
//! use bucketstat_core::error::{RecordKind, StatsError};
//!
//! let err = StatsError::MalformedRecord {
//!     kind: RecordKind::Version,
//!     index: 3,
//!     field: "Size",
//! };
//! assert_eq!(err.to_string(), "malformed version entry #3: missing or invalid Size");
//! ```

use std::fmt;

/// Which listing array a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// An entry of `Versions`.
    Version,
    /// An entry of `DeleteMarkers`.
    DeleteMarker,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version => f.write_str("version"),
            Self::DeleteMarker => f.write_str("delete marker"),
        }
    }
}

/// Bucket statistics error type.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// A listing entry is missing a required field or carries an invalid value.
    #[error("malformed {kind} entry #{index}: missing or invalid {field}")]
    MalformedRecord {
        /// The array the entry came from.
        kind: RecordKind,
        /// Position of the entry within its array.
        index: usize,
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A present object reached aggregation without a latest-version size.
    #[error("present object has no latest version size: {key}")]
    MissingLatestSize {
        /// The object key.
        key: String,
    },

    /// A listing could not be decoded or a report could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl StatsError {
    /// Whether this error points at bad input rather than a defect in the
    /// pipeline.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. } | Self::Json(_))
    }
}

/// Convenience result type for bucket statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;
