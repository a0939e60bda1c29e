//! Bucket statistics configuration.
//!
//! Provides [`StatsConfig`], the explicit configuration value handed to the
//! report renderer and the CLI. Values are loaded from environment variables
//! and may be overridden by command-line arguments.

use std::path::Path;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default listing export file name.
pub const DEFAULT_INPUT_FILE: &str = "output.json";

/// Bucket statistics configuration.
///
/// # Examples
///
/// ```
/// use bucketstat_core::config::StatsConfig;
///
/// let config = StatsConfig::default();
/// assert_eq!(config.input_file, "output.json");
/// assert!(!config.humanize);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StatsConfig {
    /// Path of the `ListObjectVersions` JSON export to load.
    #[builder(default = String::from(DEFAULT_INPUT_FILE))]
    pub input_file: String,

    /// Whether to print the aligned human-readable report instead of JSON.
    #[builder(default = false)]
    pub humanize: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            input_file: String::from(DEFAULT_INPUT_FILE),
            humanize: false,
            log_level: String::from("info"),
        }
    }
}

impl StatsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `BUCKETSTAT_INPUT` | `output.json` |
    /// | `BUCKETSTAT_HUMANIZE` | `false` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("BUCKETSTAT_INPUT") {
            config.input_file = v;
        }
        if let Some(v) = lookup("BUCKETSTAT_HUMANIZE") {
            config.humanize = parse_bool(&v);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Bucket label for the report: the input path with its extension removed.
    ///
    /// ```
    /// use bucketstat_core::config::StatsConfig;
    ///
    /// let config = StatsConfig::builder().input_file("exports/photos.json".into()).build();
    /// assert_eq!(config.bucket_name(), "exports/photos");
    /// ```
    #[must_use]
    pub fn bucket_name(&self) -> String {
        Path::new(&self.input_file)
            .with_extension("")
            .to_string_lossy()
            .into_owned()
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
