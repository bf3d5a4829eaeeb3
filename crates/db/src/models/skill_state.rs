//! Per-skill confidence state models.

use serde::Serialize;
use sprintcoach_core::types::DbId;
use sqlx::FromRow;

/// A row from the `skill_states` table: the current confidence level for
/// one (user, skill) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillState {
    pub user_id: DbId,
    pub skill: String,
    pub confidence_level: i64,
}
