//! Axum router configuration for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_dashboard_config, get_profile, save_profile};
use crate::adapters::http::common::AppState;

/// # Routes
/// - `GET /profile`, `PUT /profile`
/// - `GET /dashboard-config/:user_type`
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(save_profile))
        .route("/dashboard-config/:user_type", get(get_dashboard_config))
}
