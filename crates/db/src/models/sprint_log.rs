//! Sprint completion log models.

use chrono::NaiveDate;
use serde::Serialize;
use sprintcoach_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the append-only `sprint_logs` table.
///
/// `reported_confidence` is the raw submitted value; the derived level
/// lives in `skill_states`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SprintLog {
    pub id: DbId,
    pub user_id: DbId,
    pub skill: String,
    pub reported_confidence: i64,
    pub completed_on: NaiveDate,
    pub created_at: Timestamp,
}
