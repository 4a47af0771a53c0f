//! HTTP handlers for profile endpoints.

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{DashboardConfigResponse, ProfileResponse};
use crate::adapters::http::common::{ApiError, AppState, AuthenticatedUser};
use crate::application::handlers::{GetProfileQuery, SaveProfileCommand};
use crate::domain::profile::ProfileRecord;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .get_profile_handler()
        .handle(GetProfileQuery {
            user_id: user.user_id,
        })
        .await?
        .ok_or_else(|| ApiError::NotFound("No profile saved yet".to_string()))?;

    Ok(Json(ProfileResponse {
        profile: result.profile,
        classification: result.classification,
    }))
}

/// PUT /api/profile
pub async fn save_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Result<Json<ProfileRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(profile) = body?;
    let result = state
        .save_profile_handler()
        .handle(SaveProfileCommand {
            user_id: user.user_id,
            profile,
        })
        .await?;

    Ok(Json(ProfileResponse {
        profile: result.profile,
        classification: result.classification,
    }))
}

/// GET /api/dashboard-config/:user_type
///
/// Unknown names resolve to the fallback dashboard rather than a 404.
pub async fn get_dashboard_config(Path(user_type): Path<String>) -> impl IntoResponse {
    Json(DashboardConfigResponse::lookup(&user_type))
}
