//! Repository for the `flash_messages` table.
//!
//! One-shot storage: a message is pushed before a redirect and taken
//! (read plus delete, atomically) by the next rendered response.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::flash_message::FlashMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, message, created_at";

/// Messages older than this are considered abandoned and swept.
const FLASH_TTL_MINUTES: i64 = 10;

/// Provides one-shot flash message storage.
pub struct FlashRepo;

impl FlashRepo {
    /// Store a message under a fresh token, returning the created row.
    pub async fn push(pool: &PgPool, message: &str) -> Result<FlashMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO flash_messages (token, message)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FlashMessage>(&query)
            .bind(Uuid::new_v4())
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// Consume the message stored under `token`, if any.
    ///
    /// The row is deleted in the same statement, so a second take with
    /// the same token returns `None`.
    pub async fn take(pool: &PgPool, token: Uuid) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM flash_messages WHERE token = $1 RETURNING message")
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete abandoned messages (redirects the client never followed).
    /// Returns the count of deleted rows.
    pub async fn cleanup_abandoned(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let cutoff = Utc::now() - Duration::minutes(FLASH_TTL_MINUTES);
        let result = sqlx::query("DELETE FROM flash_messages WHERE created_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
