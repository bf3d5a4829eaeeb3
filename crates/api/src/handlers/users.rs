//! Handlers for user identification.
//!
//! There are no credentials: a username is enough to create or resume an
//! identity, and a long-lived cookie lets the page skip the name prompt
//! on later visits.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use sprintcoach_core::error::CoreError;
use sprintcoach_core::types::DbId;
use sprintcoach_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Identity cookie lifetime: one year, in seconds.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Request payload for `POST /api/user`.
///
/// Fields are `Option` so a missing field surfaces as a 400 from our own
/// validation rather than a body-rejection status.
#[derive(Debug, Deserialize)]
pub struct IdentifyUserRequest {
    pub username: Option<String>,
}

/// Response payload: the user's id and canonical username.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
}

/// POST /api/user
///
/// Create the user on first sight of the username, otherwise fetch the
/// existing row. Sets the `userId` cookie either way. The cookie is
/// deliberately not `HttpOnly`: the page reads it to resume a session.
pub async fn identify(
    State(state): State<AppState>,
    Json(input): Json<IdentifyUserRequest>,
) -> AppResult<impl IntoResponse> {
    let username = input
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Username required".to_string())))?
        .to_string();

    let user = UserRepo::create_or_fetch(&state.pool, &username).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User identified");

    let cookie = format!(
        "userId={}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax",
        user.id
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserResponse {
            id: user.id,
            username: user.username,
        }),
    ))
}
