//! Axum router configuration for cycle endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_stats, list_entries, log_entry};
use crate::adapters::http::common::AppState;

pub fn cycle_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).post(log_entry))
        .route("/stats", get(get_stats))
}
