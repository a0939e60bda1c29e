//! Report rendering.
//!
//! Every size and count field of a [`StatsBucket`] is emitted twice: the raw
//! value, and a `<field>_human` sibling formatted for people. The report also
//! names the bucket, derived from the input file name.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::aggregate::{StatsBucket, UsageStats};
use crate::config::StatsConfig;
use crate::error::StatsResult;
use crate::humanize::{int_comma, natural_size};

/// Field order of the human-readable report.
const TEXT_FIELDS: [&str; 6] = [
    "num_files",
    "num_versions",
    "average_size",
    "latest_size",
    "total_size",
    "pct_used_by_latest",
];

/// Flattened report fields of one bucket, sorted by name.
pub type ReportFields = BTreeMap<String, Value>;

/// A rendered usage report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Bucket label.
    pub bucket: String,
    /// Fields of the deleted bucket.
    pub deleted: ReportFields,
    /// Fields of the present bucket.
    pub present: ReportFields,
}

impl Report {
    /// Build the report for `stats`, labeled after `config.input_file`.
    #[must_use]
    pub fn new(stats: &UsageStats, config: &StatsConfig) -> Self {
        Self {
            bucket: config.bucket_name(),
            deleted: report_fields(&stats.deleted),
            present: report_fields(&stats.present),
        }
    }

    /// Pretty-printed JSON with sorted keys.
    pub fn to_json(&self) -> StatsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Aligned `Status: field: value` lines using the humanized values.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::from("\n");
        write_section(&mut out, "Present", &self.present);
        out.push('\n');
        write_section(&mut out, "Deleted", &self.deleted);
        out.push('\n');
        out
    }

    /// Render as text when `config.humanize` is set, JSON otherwise.
    pub fn render(&self, config: &StatsConfig) -> StatsResult<String> {
        if config.humanize {
            Ok(self.to_text())
        } else {
            self.to_json()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn report_fields(bucket: &StatsBucket) -> ReportFields {
    let mut fields = ReportFields::new();

    let mut count = |name: &str, value: u64| {
        fields.insert(name.to_owned(), Value::from(value));
        fields.insert(format!("{name}_human"), Value::from(int_comma(value)));
    };
    count("num_files", bucket.num_files);
    count("num_versions", bucket.num_versions);

    let mut size = |name: &str, raw: Value, bytes: f64| {
        fields.insert(name.to_owned(), raw);
        fields.insert(format!("{name}_human"), Value::from(natural_size(bytes)));
    };
    size(
        "total_size",
        Value::from(bucket.total_size),
        bucket.total_size as f64,
    );
    // A bucket without versions has no mean; it reports a plain 0.
    let average = if bucket.num_versions == 0 {
        Value::from(0_u64)
    } else {
        Value::from(bucket.average_size)
    };
    size("average_size", average, bucket.average_size);
    if let Some(latest_size) = bucket.latest_size {
        size("latest_size", Value::from(latest_size), latest_size as f64);
    }

    if let Some(pct) = bucket.pct_used_by_latest {
        let pct = pct.to_string();
        fields.insert("pct_used_by_latest_human".to_owned(), Value::from(format!("{pct}%")));
        fields.insert("pct_used_by_latest".to_owned(), Value::from(pct));
    }

    fields
}

fn write_section(out: &mut String, label: &str, fields: &ReportFields) {
    for field in TEXT_FIELDS {
        let Some(value) = fields.get(&format!("{field}_human")) else {
            continue;
        };
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(&format!("{label:>10}: {field:>20}: {value}\n"));
    }
}
