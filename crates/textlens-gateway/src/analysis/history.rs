use std::sync::Arc;

use serde::Serialize;

use textlens_core::error::Result;
use textlens_core::limit::HistoryLimit;
use textlens_core::record::AnalysisSummary;

use crate::config::HistorySection;
use crate::store::DocumentStore;

/// History response body.
#[derive(Debug, Serialize)]
pub struct History {
    pub count: usize,
    pub results: Vec<AnalysisSummary>,
}

/// Reads the most recent records, newest first.
#[derive(Clone)]
pub struct AnalysisHistoryReader {
    store: Arc<dyn DocumentStore>,
    default_limit: usize,
    max_limit: usize,
}

impl AnalysisHistoryReader {
    pub fn new(store: Arc<dyn DocumentStore>, cfg: &HistorySection) -> Self {
        Self {
            store,
            default_limit: cfg.default_limit,
            max_limit: cfg.max_limit,
        }
    }

    /// Interpret a raw `limit` query value against this reader's bounds.
    pub fn limit_from_param(&self, raw: Option<&str>) -> HistoryLimit {
        HistoryLimit::parse(raw, self.default_limit, self.max_limit)
    }

    pub async fn read(&self, limit: HistoryLimit) -> Result<History> {
        let mut results = self.store.query_recent(limit.get()).await?;
        results.truncate(limit.get());
        Ok(History {
            count: results.len(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use textlens_core::record::AnalysisRecord;

    use crate::store::MemoryStore;

    async fn seeded(n: i64) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for i in 0..n {
            let at = Utc.timestamp_opt(1_700_000_000 + i, 0).single().expect("ts");
            store
                .create_document(&AnalysisRecord::new(format!("rec-{i}"), "some text", at))
                .await
                .expect("seed");
        }
        store
    }

    #[tokio::test]
    async fn newest_first() {
        let reader = AnalysisHistoryReader::new(seeded(3).await, &HistorySection::default());
        let h = reader.read(reader.limit_from_param(Some("3"))).await.expect("read");
        assert_eq!(h.count, 3);
        let ids: Vec<&str> = h.results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["rec-2", "rec-1", "rec-0"]);
    }

    #[tokio::test]
    async fn limit_is_capped_and_defaulted() {
        let reader = AnalysisHistoryReader::new(seeded(60).await, &HistorySection::default());

        let h = reader.read(reader.limit_from_param(Some("1000"))).await.expect("read");
        assert_eq!(h.count, 50);

        for raw in [None, Some("abc"), Some("-5")] {
            let h = reader.read(reader.limit_from_param(raw)).await.expect("read");
            assert_eq!(h.count, 10, "raw={raw:?}");
        }
    }

    #[tokio::test]
    async fn fewer_records_than_limit() {
        let reader = AnalysisHistoryReader::new(seeded(2).await, &HistorySection::default());
        let h = reader.read(HistoryLimit::default()).await.expect("read");
        assert_eq!(h.count, 2);
    }
}
