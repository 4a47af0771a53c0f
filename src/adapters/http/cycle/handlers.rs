//! HTTP handlers for cycle endpoints.

use axum::extract::{rejection::JsonRejection, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{EntriesResponse, LoggedEntryResponse};
use crate::adapters::http::common::{ApiError, AppState, AuthenticatedUser};
use crate::application::handlers::{GetCycleStatsQuery, ListEntriesQuery, LogCycleEntryCommand};
use crate::domain::cycle::NewCycleEntry;

/// GET /api/cycle/entries
pub async fn list_entries(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .list_entries_handler()
        .handle(ListEntriesQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(EntriesResponse::from(entries)))
}

/// POST /api/cycle/entries
pub async fn log_entry(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Result<Json<NewCycleEntry>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(entry) = body?;
    let result = state
        .log_cycle_entry_handler()
        .handle(LogCycleEntryCommand {
            user_id: user.user_id,
            entry,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LoggedEntryResponse::from(result))))
}

/// GET /api/cycle/stats
pub async fn get_stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state
        .get_cycle_stats_handler()
        .handle(GetCycleStatsQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(stats))
}
