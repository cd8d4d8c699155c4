#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use textlens_core::error::{Result, TextLensError};
use textlens_core::record::{AnalysisRecord, AnalysisSummary};
use textlens_gateway::app_state::AppState;
use textlens_gateway::config::{self, GatewayConfig};
use textlens_gateway::router::build_router;
use textlens_gateway::store::{DocumentStore, MemoryStore};

/// Store whose every operation fails, like an unreachable database.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _record: &AnalysisRecord) -> Result<()> {
        Err(TextLensError::StoreWrite("connection refused".into()))
    }

    async fn query_recent(&self, _limit: usize) -> Result<Vec<AnalysisSummary>> {
        Err(TextLensError::StoreQuery("connection refused".into()))
    }

    async fn get_document(&self, _id: &str) -> Result<Option<AnalysisRecord>> {
        Err(TextLensError::StoreQuery("connection refused".into()))
    }
}

pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_router(AppState::new(GatewayConfig::default(), store.clone()));
    (app, store)
}

pub fn app_with(cfg: GatewayConfig, store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::new(cfg, store))
}

pub fn config_from(yaml: &str) -> GatewayConfig {
    config::load_from_str(yaml).expect("test config")
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(req).await.expect("infallible");
    let status = resp.status();
    let bytes = resp.into_body().collect().await.expect("body").to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn send_text(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.expect("infallible");
    let status = resp.status();
    let bytes = resp.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
