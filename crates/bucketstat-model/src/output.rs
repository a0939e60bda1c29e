//! The top-level `ListObjectVersions` response document.

use serde::{Deserialize, Serialize};

use crate::types::{CommonPrefix, DeleteMarkerEntry, ObjectVersion};

/// S3 ListObjectVersionsOutput, as written by the AWS CLI.
///
/// `Versions` and `DeleteMarkers` are omitted by the CLI when empty, so both
/// default to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectVersionsOutput {
    /// Prefixes rolled up by `Delimiter`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_prefixes: Vec<CommonPrefix>,
    /// Delete markers, in listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete_markers: Vec<DeleteMarkerEntry>,
    /// Delimiter used for the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Whether the listing was truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    /// Key marker the listing started from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_marker: Option<String>,
    /// Maximum number of keys requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_keys: Option<i32>,
    /// Bucket name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Prefix filter used for the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Version-ID marker the listing started from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id_marker: Option<String>,
    /// Object versions, in listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<ObjectVersion>,
}
