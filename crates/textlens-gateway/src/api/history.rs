use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::app_state::AppState;

/// Metrics label for this endpoint.
pub const ROUTE: &str = "history";

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Kept raw: invalid values fall back to the default limit instead of failing.
    #[serde(default)]
    pub limit: Option<String>,
}

pub async fn get_analysis_history(
    State(app): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let started = Instant::now();

    // an undecodable query string is treated like an absent limit
    let q = query.map(|Query(q)| q).unwrap_or_default();
    let limit = app.history().limit_from_param(q.limit.as_deref());
    tracing::info!(limit = limit.get(), "analysis history requested");

    let resp = match app.history().read(limit).await {
        Ok(history) => (StatusCode::OK, Json(history)).into_response(),
        Err(e) => {
            let code = e.client_code().as_str();
            app.metrics().store_errors.inc(&[("op", "query"), ("code", code)]);
            tracing::error!(error = %e, code, "reading analysis history failed");
            ApiError(e).into_response()
        }
    };

    app.metrics()
        .observe_request(ROUTE, resp.status().as_u16(), started.elapsed());
    resp
}
