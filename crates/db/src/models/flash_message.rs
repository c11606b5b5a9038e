//! Flash message model.
//!
//! A flash message is stored server-side, carried across one redirect by
//! an opaque cookie token, and deleted the first time it is read.

use serde::Serialize;
use sigcolle_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `flash_messages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlashMessage {
    pub id: DbId,
    pub token: Uuid,
    pub message: String,
    pub created_at: Timestamp,
}
