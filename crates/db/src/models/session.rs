//! Session model.
//!
//! Sessions are consumed by the auth extractor; issuance (login) is
//! outside this service and only appears in test fixtures.

use serde::Serialize;
use sigcolle_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
    pub id: DbId,
    pub token: Uuid,
    pub user_id: DbId,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub token: Uuid,
    pub user_id: DbId,
    pub expires_at: Timestamp,
}
