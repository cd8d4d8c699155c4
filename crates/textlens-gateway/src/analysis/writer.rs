use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use textlens_core::error::Result;
use textlens_core::metrics::TextMetrics;
use textlens_core::record::AnalysisRecord;

use crate::store::DocumentStore;

/// Persists one analysis per call. Never reads, updates, or retries.
#[derive(Clone)]
pub struct AnalysisRecordWriter {
    store: Arc<dyn DocumentStore>,
}

impl AnalysisRecordWriter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Store `text` with the metrics computed from it under a fresh UUID and
    /// the current UTC time. Returns the new id; store errors pass through.
    pub async fn write(&self, text: &str, analysis: &TextMetrics) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let record = AnalysisRecord::with_analysis(id.clone(), text, analysis.clone(), Utc::now());
        self.store.create_document(&record).await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn written_record_reads_back() {
        let store = Arc::new(MemoryStore::new());
        let writer = AnalysisRecordWriter::new(store.clone());

        let text = "Round trip. Through the store!";
        let analysis = TextMetrics::compute(text);
        let id = writer.write(text, &analysis).await.expect("write");
        assert!(Uuid::parse_str(&id).is_ok());

        let rec = store.get_document(&id).await.expect("get").expect("present");
        assert_eq!(rec.analysis, analysis);
        assert_eq!(rec.original_text, text);
        assert_eq!(rec.metadata.text_preview, text);
    }

    #[tokio::test]
    async fn each_write_gets_a_fresh_id() {
        let store = Arc::new(MemoryStore::new());
        let writer = AnalysisRecordWriter::new(store.clone());
        let analysis = TextMetrics::compute("same");
        let a = writer.write("same", &analysis).await.expect("write a");
        let b = writer.write("same", &analysis).await.expect("write b");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
