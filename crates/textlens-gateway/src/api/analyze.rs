use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use textlens_core::error::{Result, TextLensError};
use textlens_core::metrics::TextMetrics;

use super::ApiError;
use crate::app_state::AppState;

/// Metrics label for this endpoint.
pub const ROUTE: &str = "analyze";

/// Query string as raw pairs, so a repeated `text` parameter is not a decode error.
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    text: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: String,
    pub analysis: TextMetrics,
}

/// First non-empty `text` value among the query pairs.
pub fn query_text(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(k, v)| k == "text" && !v.is_empty())
        .map(|(_, v)| v)
}

/// Pick the input text: a non-empty `text` query parameter wins, otherwise
/// the JSON body's string `text` field. Unparsable bodies and non-string
/// values count as absent.
pub fn extract_text(query_text: Option<String>, body: &[u8]) -> Result<String> {
    if let Some(text) = query_text.filter(|t| !t.is_empty()) {
        return Ok(text);
    }

    serde_json::from_slice::<AnalyzeBody>(body)
        .ok()
        .and_then(|b| match b.text {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
        .filter(|t| !t.is_empty())
        .ok_or(TextLensError::NoText)
}

pub async fn text_analyzer(
    State(app): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    tracing::info!("text analyzer called");

    let resp = match analyze(&app, query, &body).await {
        Ok(out) => (StatusCode::OK, Json(out)).into_response(),
        Err(e) => ApiError(e).into_response(),
    };

    app.metrics()
        .observe_request(ROUTE, resp.status().as_u16(), started.elapsed());
    resp
}

async fn analyze(
    app: &AppState,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
    body: &[u8],
) -> Result<AnalyzeResponse> {
    let Query(pairs) = query.map_err(|e| TextLensError::BadRequest(e.body_text()))?;
    let text = extract_text(query_text(pairs), body)?;

    let analysis = TextMetrics::compute(&text);
    let id = app.writer().write(&text, &analysis).await.map_err(|e| {
        let code = e.client_code().as_str();
        app.metrics().store_errors.inc(&[("op", "create"), ("code", code)]);
        tracing::error!(error = %e, code, "storing analysis failed");
        e
    })?;

    app.metrics().records_written.inc(&[]);
    tracing::info!(%id, words = analysis.word_count, "analysis stored");
    Ok(AnalyzeResponse { id, analysis })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_text_takes_precedence() {
        let got = extract_text(Some("from query".into()), br#"{"text":"from body"}"#);
        assert_eq!(got.ok().as_deref(), Some("from query"));
    }

    #[test]
    fn repeated_text_parameter_takes_first_non_empty() {
        let pairs = vec![
            ("limit".to_string(), "3".to_string()),
            ("text".to_string(), String::new()),
            ("text".to_string(), "hello".to_string()),
            ("text".to_string(), "world".to_string()),
        ];
        assert_eq!(query_text(pairs).as_deref(), Some("hello"));
        assert_eq!(query_text(Vec::new()), None);
    }

    #[test]
    fn empty_query_falls_back_to_body() {
        let got = extract_text(Some(String::new()), br#"{"text":"from body"}"#);
        assert_eq!(got.ok().as_deref(), Some("from body"));
    }

    #[test]
    fn missing_or_unusable_input_is_no_text() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"not json",
            br#"{}"#,
            br#"{"text":""}"#,
            br#"{"text":42}"#,
            br#"{"text":null}"#,
        ];
        for body in bodies {
            let err = extract_text(None, body).expect_err("no text");
            assert!(matches!(err, TextLensError::NoText), "body={body:?}");
        }
    }

    #[test]
    fn whitespace_only_text_is_accepted() {
        let got = extract_text(None, br#"{"text":"   "}"#);
        assert_eq!(got.ok().as_deref(), Some("   "));
    }
}
