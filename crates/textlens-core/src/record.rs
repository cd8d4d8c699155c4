//! Persisted analysis records and their wire shapes.
//!
//! Field names here are the single source of truth for both the write path
//! (`AnalysisRecord`) and the history read path (`AnalysisSummary`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::TextMetrics;

/// Maximum number of characters kept in `metadata.textPreview`.
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// Dotted path of the field history is ordered by.
pub const TIMESTAMP_FIELD: &str = "metadata.timestamp";

/// Top-level fields returned by history queries (`originalText` is excluded).
pub const SUMMARY_FIELDS: [&str; 3] = ["id", "analysis", "metadata"];

/// One stored analysis. Created once, never mutated by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub analysis: TextMetrics,
    pub metadata: RecordMetadata,
    pub original_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub text_preview: String,
}

/// History projection of a record: everything except `originalText`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub analysis: TextMetrics,
    pub metadata: RecordMetadata,
}

impl AnalysisRecord {
    /// Build a record whose `analysis` is computed from `text` itself, so the
    /// two can never disagree.
    pub fn new(id: impl Into<String>, text: &str, at: DateTime<Utc>) -> Self {
        Self::with_analysis(id, text, TextMetrics::compute(text), at)
    }

    /// Build a record from metrics the caller already computed for `text`.
    pub fn with_analysis(
        id: impl Into<String>,
        text: &str,
        analysis: TextMetrics,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            analysis,
            metadata: RecordMetadata {
                timestamp: at,
                text_preview: text_preview(text),
            },
            original_text: text.to_string(),
        }
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            id: self.id.clone(),
            analysis: self.analysis.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// First `TEXT_PREVIEW_CHARS` characters of `text`.
pub fn text_preview(text: &str) -> String {
    text.chars().take(TEXT_PREVIEW_CHARS).collect()
}

/// RFC 3339 UTC with fixed microsecond precision, so lexical order of the
/// stored string matches chronological order.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
