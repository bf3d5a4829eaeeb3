pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                create-or-fetch by username, sets userId cookie (POST)
/// /state/{userId}      derived levels, today's completions, streak (GET)
/// /sprint/complete     record today's sprint, returns refreshed state (POST)
/// /reset               delete all progress for a user (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(handlers::users::identify))
        .route("/state/{user_id}", get(handlers::progress::get_state))
        .route("/sprint/complete", post(handlers::sprints::complete))
        .route("/reset", post(handlers::progress::reset))
}
