//! Top-level router combining every endpoint group.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::common::AppState;
use super::cycle::cycle_routes;
use super::data::data_routes;
use super::insight::insight_routes;
use super::profile::profile_routes;

/// Builds the full API router. Middleware layers are applied by the caller.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(profile_routes())
        .merge(data_routes())
        .nest("/cycle", cycle_routes())
        .nest("/insights", insight_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
