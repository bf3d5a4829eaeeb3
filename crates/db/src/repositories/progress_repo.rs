//! Repository for skill confidence state and the sprint completion log.

use chrono::NaiveDate;
use sprintcoach_core::progress::{self, CompletionOutcome};
use sprintcoach_core::skill::Skill;
use sprintcoach_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::skill_state::SkillState;
use crate::models::sprint_log::SprintLog;

/// Column list for `skill_states` queries.
const STATE_COLUMNS: &str = "user_id, skill, confidence_level";

/// Column list for `sprint_logs` queries.
const LOG_COLUMNS: &str = "id, user_id, skill, reported_confidence, completed_on, created_at";

/// Provides data access for skill levels and sprint completions.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Fetch all stored skill levels for a user.
    ///
    /// Skills the user has never completed have no row; derivation
    /// defaults them to 0.
    pub async fn skill_levels(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<SkillState>, sqlx::Error> {
        let query = format!("SELECT {STATE_COLUMNS} FROM skill_states WHERE user_id = ?");
        sqlx::query_as::<_, SkillState>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch the skill names the user completed on the given date.
    pub async fn skills_completed_on(
        pool: &SqlitePool,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT skill FROM sprint_logs WHERE user_id = ? AND completed_on = ?")
            .bind(user_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// Fetch the distinct dates on which the user completed any sprint,
    /// most recent first. This is the exact input order the streak walk
    /// expects.
    pub async fn distinct_completion_dates(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT completed_on FROM sprint_logs \
             WHERE user_id = ? ORDER BY completed_on DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch all log rows for a user, oldest first.
    pub async fn logs_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<SprintLog>, sqlx::Error> {
        let query = format!("SELECT {LOG_COLUMNS} FROM sprint_logs WHERE user_id = ? ORDER BY id");
        sqlx::query_as::<_, SprintLog>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Record a sprint completion for `today`, stepping the stored level
    /// toward the reported confidence.
    ///
    /// The gate check, the ratchet, the level upsert, and the log append
    /// run in one transaction, so two attempts for the same
    /// (user, skill, day) cannot both succeed. When a completion already
    /// exists the attempt returns [`CompletionOutcome::AlreadyCompleted`]
    /// and nothing is written. The raw reported value goes into the log
    /// verbatim; only the ratcheted level reaches `skill_states`.
    pub async fn record_completion(
        pool: &SqlitePool,
        user_id: DbId,
        skill: Skill,
        reported_confidence: i64,
        today: NaiveDate,
    ) -> Result<CompletionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM sprint_logs WHERE user_id = ? AND skill = ? AND completed_on = ?",
        )
        .bind(user_id)
        .bind(skill.as_str())
        .bind(today)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Ok(CompletionOutcome::AlreadyCompleted);
        }

        let current: Option<i64> = sqlx::query_scalar(
            "SELECT confidence_level FROM skill_states WHERE user_id = ? AND skill = ?",
        )
        .bind(user_id)
        .bind(skill.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let new_level = progress::ratchet_level(current.unwrap_or(0), reported_confidence);

        sqlx::query(
            "INSERT INTO skill_states (user_id, skill, confidence_level) \
             VALUES (?, ?, ?) \
             ON CONFLICT(user_id, skill) DO UPDATE SET confidence_level = excluded.confidence_level",
        )
        .bind(user_id)
        .bind(skill.as_str())
        .bind(new_level)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO sprint_logs (user_id, skill, reported_confidence, completed_on) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(skill.as_str())
        .bind(reported_confidence)
        .bind(today)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(CompletionOutcome::Recorded)
    }

    /// Delete all skill state and log rows for a user.
    ///
    /// Levels revert to the implicit 0 default on the next read and the
    /// streak drops to 0. Safe to call for a user with no history.
    pub async fn reset(pool: &SqlitePool, user_id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM skill_states WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM sprint_logs WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
