//! HTTP handlers for export and deletion.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::common::{ApiError, AppState, AuthenticatedUser};
use crate::application::handlers::{DeleteUserDataCommand, ExportUserDataQuery};

/// GET /api/export
pub async fn export_data(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let export = state
        .export_user_data_handler()
        .handle(ExportUserDataQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(export))
}

/// DELETE /api/data
pub async fn delete_data(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_user_data_handler()
        .handle(DeleteUserDataCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
