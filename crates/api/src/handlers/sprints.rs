//! Handlers for sprint completion.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use sprintcoach_core::error::CoreError;
use sprintcoach_core::progress::{self, CompletionOutcome, ProgressSnapshot};
use sprintcoach_core::skill::Skill;
use sprintcoach_core::types::DbId;
use sprintcoach_db::repositories::{ProgressRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::progress::derive_snapshot;
use crate::state::AppState;

/// Request payload for `POST /api/sprint/complete`.
///
/// Fields are `Option` so a missing field surfaces as a 400 from our own
/// validation rather than a body-rejection status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSprintRequest {
    pub user_id: Option<DbId>,
    pub skill: Option<String>,
    pub confidence_level: Option<i64>,
}

/// POST /api/sprint/complete
///
/// Record today's sprint for one skill with the self-reported confidence,
/// then return the refreshed state. The raw report picks the ratchet
/// direction and is logged verbatim; it never becomes the level itself.
/// A second completion for the same skill on the same UTC day is a 409.
pub async fn complete(
    State(state): State<AppState>,
    Json(input): Json<CompleteSprintRequest>,
) -> AppResult<Json<ProgressSnapshot>> {
    let (user_id, skill_name, confidence_level) =
        match (input.user_id, input.skill, input.confidence_level) {
            (Some(user_id), Some(skill), Some(confidence)) => (user_id, skill, confidence),
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "Missing fields".to_string(),
                )))
            }
        };

    let skill = Skill::from_str_value(&skill_name)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    progress::validate_confidence(confidence_level)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let today = progress::utc_today();
    let outcome =
        ProgressRepo::record_completion(&state.pool, user_id, skill, confidence_level, today)
            .await?;

    if outcome == CompletionOutcome::AlreadyCompleted {
        return Err(AppError::Core(CoreError::Conflict(
            "Already completed today".to_string(),
        )));
    }

    tracing::info!(
        user_id,
        skill = skill.as_str(),
        confidence_level,
        "Sprint completed",
    );

    let snapshot = derive_snapshot(&state.pool, user_id).await?;
    Ok(Json(snapshot))
}
