//! Axum router configuration for data endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{delete_data, export_data};
use crate::adapters::http::common::AppState;

pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_data))
        .route("/data", delete(delete_data))
}
