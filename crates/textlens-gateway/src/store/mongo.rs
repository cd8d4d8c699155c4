//! MongoDB-backed store (also speaks to Cosmos DB through its MongoDB API).
//!
//! Records are stored as-is; the driver adds its own `_id`, which is
//! projected away on every read. Lookups go through the `id` field, which has
//! a unique index so creates stay atomic per document.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneOptions, FindOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};

use textlens_core::error::{Result, TextLensError};
use textlens_core::record::{AnalysisRecord, AnalysisSummary, SUMMARY_FIELDS, TIMESTAMP_FIELD};

use super::DocumentStore;
use crate::config::StoreEnv;

pub struct MongoStore {
    records: Collection<AnalysisRecord>,
}

impl MongoStore {
    /// Connect and make sure the indexes history and lookups rely on exist.
    pub async fn connect(env: &StoreEnv) -> Result<Self> {
        let client = Client::with_uri_str(&env.connection_string)
            .await
            .map_err(|e| TextLensError::Config(format!("store connect failed: {e}")))?;
        let records = client
            .database(&env.database)
            .collection::<AnalysisRecord>(&env.container);

        let store = Self { records };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<()> {
        let mut newest_first = Document::new();
        newest_first.insert(TIMESTAMP_FIELD, -1);

        let models = [
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder().keys(newest_first).build(),
        ];
        self.records
            .create_indexes(models, None)
            .await
            .map_err(|e| TextLensError::Config(format!("store index setup failed: {e}")))?;
        Ok(())
    }
}

fn summary_projection() -> Document {
    let mut projection = doc! { "_id": 0 };
    for field in SUMMARY_FIELDS {
        projection.insert(field, 1);
    }
    projection
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(&self, record: &AnalysisRecord) -> Result<()> {
        self.records
            .insert_one(record, None)
            .await
            .map(|_| ())
            .map_err(|e| TextLensError::StoreWrite(e.to_string()))
    }

    async fn query_recent(&self, limit: usize) -> Result<Vec<AnalysisSummary>> {
        let mut sort = Document::new();
        sort.insert(TIMESTAMP_FIELD, -1);

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let opts = FindOptions::builder()
            .sort(sort)
            .limit(limit)
            .projection(summary_projection())
            .build();

        let cursor = self
            .records
            .clone_with_type::<AnalysisSummary>()
            .find(None, opts)
            .await
            .map_err(|e| TextLensError::StoreQuery(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| TextLensError::StoreQuery(e.to_string()))
    }

    async fn get_document(&self, id: &str) -> Result<Option<AnalysisRecord>> {
        let opts = FindOneOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();
        self.records
            .find_one(doc! { "id": id }, opts)
            .await
            .map_err(|e| TextLensError::StoreQuery(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_excludes_original_text() {
        let p = summary_projection();
        assert_eq!(p.get_i32("_id").ok(), Some(0));
        for field in SUMMARY_FIELDS {
            assert_eq!(p.get_i32(field).ok(), Some(1), "field={field}");
        }
        assert!(p.get("originalText").is_none());
    }
}
