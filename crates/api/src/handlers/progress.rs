//! Handlers for derived progress state and the reset operation.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use sprintcoach_core::error::CoreError;
use sprintcoach_core::progress::{self, ProgressSnapshot};
use sprintcoach_core::skill::Skill;
use sprintcoach_core::types::DbId;
use sprintcoach_db::repositories::{ProgressRepo, UserRepo};
use sprintcoach_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/state/{userId}
///
/// Derive the full visible state for a user: current levels for all four
/// skills, today's completions, and the streak.
pub async fn get_state(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ProgressSnapshot>> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let snapshot = derive_snapshot(&state.pool, user_id).await?;
    Ok(Json(snapshot))
}

/// Request payload for `POST /api/reset`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub user_id: Option<DbId>,
}

/// Response payload for `POST /api/reset`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub ok: bool,
}

/// POST /api/reset
///
/// Delete all progress for a user; the next read shows fresh defaults.
/// Succeeds whether or not the user has any history.
pub async fn reset(
    State(state): State<AppState>,
    Json(input): Json<ResetRequest>,
) -> AppResult<Json<ResetResponse>> {
    let user_id = input
        .user_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("Missing userId".to_string())))?;

    ProgressRepo::reset(&state.pool, user_id).await?;

    tracing::info!(user_id, "Progress reset");

    Ok(Json(ResetResponse { ok: true }))
}

/// Load a user's rows and derive the snapshot for the current UTC day.
///
/// Shared by the state and completion handlers; a completion responds
/// with the same re-derived shape a state read would return.
pub(crate) async fn derive_snapshot(pool: &DbPool, user_id: DbId) -> AppResult<ProgressSnapshot> {
    let today = progress::utc_today();

    let state_rows = ProgressRepo::skill_levels(pool, user_id).await?;
    let completed_rows = ProgressRepo::skills_completed_on(pool, user_id, today).await?;
    let dates = ProgressRepo::distinct_completion_dates(pool, user_id).await?;

    // Rows with skill names outside the fixed set cannot be written
    // through this service; skip any rather than failing the read.
    let stored: Vec<(Skill, i64)> = state_rows
        .iter()
        .filter_map(|row| {
            Skill::from_str_value(&row.skill)
                .ok()
                .map(|skill| (skill, row.confidence_level))
        })
        .collect();

    let completed: Vec<Skill> = completed_rows
        .iter()
        .filter_map(|name| Skill::from_str_value(name).ok())
        .collect();

    Ok(ProgressSnapshot::derive(today, &stored, &completed, &dates))
}
