//! Repository for the `users` table.

use sprintcoach_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, created_at";

/// Provides lookup and create-or-fetch operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Fetch the user with the given username, creating the row first if
    /// the username has never been seen.
    ///
    /// Usernames are matched case-sensitively. The insert and the read
    /// run in one transaction so they observe the same state.
    pub async fn create_or_fetch(pool: &SqlitePool, username: &str) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("INSERT INTO users (username) VALUES (?) ON CONFLICT(username) DO NOTHING")
            .bind(username)
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
