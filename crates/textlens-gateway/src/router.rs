//! Axum router wiring.
//!
//! API routes mount at `gateway.route_prefix` (root when empty); ops routes
//! always live at the root.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/TextAnalyzer",
            get(api::analyze::text_analyzer).post(api::analyze::text_analyzer),
        )
        .route("/GetAnalysisHistory", get(api::history::get_analysis_history));

    let prefix = state.cfg().gateway.route_prefix.clone();
    let app = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(&prefix, api_routes)
    };

    app.route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
