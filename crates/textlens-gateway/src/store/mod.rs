//! Document store collaborator.
//!
//! Handlers never talk to a database directly: they get an
//! `Arc<dyn DocumentStore>` injected through `AppState`, which makes the
//! in-memory backend a drop-in substitute for tests.

pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;

use textlens_core::error::Result;
use textlens_core::record::{AnalysisRecord, AnalysisSummary};

use crate::config::{StoreBackend, StoreEnv, StoreSection};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Durable single-document insert. The record carries its own unique `id`.
    /// Failures surface as `TextLensError::StoreWrite`.
    async fn create_document(&self, record: &AnalysisRecord) -> Result<()>;

    /// Up to `limit` records, newest `metadata.timestamp` first, without
    /// `originalText`. Failures surface as `TextLensError::StoreQuery`.
    async fn query_recent(&self, limit: usize) -> Result<Vec<AnalysisSummary>>;

    /// Full record lookup by `id`.
    async fn get_document(&self, id: &str) -> Result<Option<AnalysisRecord>>;
}

/// Build the configured backend. Called once at startup.
pub async fn connect<F>(section: &StoreSection, lookup: F) -> Result<Arc<dyn DocumentStore>>
where
    F: Fn(&str) -> Option<String>,
{
    match section.backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory document store; records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Mongo => {
            let env = StoreEnv::from_lookup(lookup)?;
            let store = MongoStore::connect(&env).await?;
            tracing::info!(database = %env.database, collection = %env.container, "document store connected");
            Ok(Arc::new(store))
        }
    }
}
