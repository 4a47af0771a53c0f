//! HTTP handlers for insight endpoints.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{GenerateInsightsRequest, InsightsResponse};
use crate::adapters::http::common::{parse_optional_json, ApiError, AppState, AuthenticatedUser};
use crate::application::handlers::GenerateInsightsCommand;
use crate::domain::insight::TrackingDomain;

/// POST /api/insights/:domain
///
/// Always 200 once the domain and body are valid; `source` tells whether the
/// AI answered or the static fallback was used.
pub async fn generate_insights(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let domain: TrackingDomain = domain.parse()?;
    let request: GenerateInsightsRequest = parse_optional_json(&body)?.unwrap_or_default();

    let result = state
        .generate_insights_handler()
        .handle(GenerateInsightsCommand {
            user_id: user.user_id,
            domain,
            current_data: request.current_data,
        })
        .await?;

    Ok(Json(InsightsResponse::from(result)))
}
