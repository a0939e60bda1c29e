//! Wire model for the JSON document produced by an S3 `ListObjectVersions`
//! call (as written by `aws s3api list-object-versions`).
//!
//! Field names follow the AWS PascalCase convention. Every per-entry field is
//! optional, exactly as on the wire; turning entries into validated records is
//! the job of `bucketstat-core`.

pub mod output;
pub mod types;

pub use output::ListObjectVersionsOutput;
pub use types::{CommonPrefix, DeleteMarkerEntry, ObjectVersion, Owner};
