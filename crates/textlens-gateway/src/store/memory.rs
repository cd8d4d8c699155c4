use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use textlens_core::error::{Result, TextLensError};
use textlens_core::record::{AnalysisRecord, AnalysisSummary};

use super::DocumentStore;

struct StoredRecord {
    record: AnalysisRecord,
    /// Insertion order; breaks ties between equal timestamps.
    seq: u64,
}

/// Process-local store backed by `DashMap`. Useful for tests and local runs.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, StoredRecord>,
    seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, record: &AnalysisRecord) -> Result<()> {
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(TextLensError::StoreWrite(format!(
                "document with id {} already exists",
                record.id
            ))),
            Entry::Vacant(slot) => {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredRecord {
                    record: record.clone(),
                    seq,
                });
                Ok(())
            }
        }
    }

    async fn query_recent(&self, limit: usize) -> Result<Vec<AnalysisSummary>> {
        let mut rows: Vec<(i64, u64, AnalysisSummary)> = self
            .records
            .iter()
            .map(|r| {
                let s = r.value();
                let ts = s.record.metadata.timestamp.timestamp_micros();
                (ts, s.seq, s.record.summary())
            })
            .collect();

        rows.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
        Ok(rows.into_iter().take(limit).map(|(_, _, s)| s).collect())
    }

    async fn get_document(&self, id: &str) -> Result<Option<AnalysisRecord>> {
        Ok(self.records.get(id).map(|r| r.value().record.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid ts")
    }

    #[tokio::test]
    async fn newest_first_with_limit() {
        let store = MemoryStore::new();
        for (id, t) in [("a", 10), ("c", 30), ("b", 20)] {
            store
                .create_document(&AnalysisRecord::new(id, "text", at(t)))
                .await
                .expect("insert");
        }

        let ids: Vec<String> = store
            .query_recent(10)
            .await
            .expect("query")
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["c", "b", "a"]);

        let top = store.query_recent(2).await.expect("query");
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "c");
    }

    #[tokio::test]
    async fn equal_timestamps_keep_insertion_order_newest_first() {
        let store = MemoryStore::new();
        for id in ["first", "second", "third"] {
            store
                .create_document(&AnalysisRecord::new(id, "text", at(5)))
                .await
                .expect("insert");
        }
        let got = store.query_recent(3).await.expect("query");
        assert_eq!(got[0].id, "third");
        assert_eq!(got[2].id, "first");
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let store = MemoryStore::new();
        let rec = AnalysisRecord::new("same", "one", at(1));
        store.create_document(&rec).await.expect("first insert");

        let err = store
            .create_document(&AnalysisRecord::new("same", "two", at(2)))
            .await
            .expect_err("duplicate");
        assert_eq!(err.client_code().as_str(), "STORE_WRITE");

        let kept = store.get_document("same").await.expect("get").expect("present");
        assert_eq!(kept.original_text, "one");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn missing_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_document("nope").await.expect("get").is_none());
        assert!(store.is_empty());
    }
}
