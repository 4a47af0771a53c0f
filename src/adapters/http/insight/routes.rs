//! Axum router configuration for insight endpoints.

use axum::{routing::post, Router};

use super::handlers::generate_insights;
use crate::adapters::http::common::AppState;

pub fn insight_routes() -> Router<AppState> {
    Router::new().route("/:domain", post(generate_insights))
}
