use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use textlens_core::error::TextLensError;

/// HTTP mapping for `TextLensError`: caller mistakes are 400, the rest 500.
/// The body carries the error's message text verbatim.
#[derive(Debug)]
pub struct ApiError(pub TextLensError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TextLensError> for ApiError {
    fn from(e: TextLensError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
