//! Shared application state for the textlens gateway.
//!
//! The document store handle is built once at startup and injected here;
//! handlers reach it only through the writer and history reader.

use std::sync::Arc;

use crate::analysis::{AnalysisHistoryReader, AnalysisRecordWriter};
use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    writer: AnalysisRecordWriter,
    history: AnalysisHistoryReader,
    metrics: GatewayMetrics,
}

impl AppState {
    pub fn new(cfg: GatewayConfig, store: Arc<dyn DocumentStore>) -> Self {
        let writer = AnalysisRecordWriter::new(Arc::clone(&store));
        let history = AnalysisHistoryReader::new(store, &cfg.history);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                writer,
                history,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn writer(&self) -> &AnalysisRecordWriter {
        &self.inner.writer
    }

    pub fn history(&self) -> &AnalysisHistoryReader {
        &self.inner.history
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
