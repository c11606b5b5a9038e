//! Campaign model.

use serde::Serialize;
use sigcolle_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `campaigns` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Campaign {
    pub id: DbId,
    pub title: String,
    /// Stored as rendered HTML when Markdown rendering is enabled,
    /// raw source text otherwise.
    pub statement: String,
    pub goal: i64,
    pub create_user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new campaign.
///
/// `create_user_id` is filled in from the authenticated session by the
/// HTTP layer, never from client input.
#[derive(Debug)]
pub struct CreateCampaign {
    pub title: String,
    pub statement: String,
    pub goal: i64,
    pub create_user_id: DbId,
}

/// Read projection joining a campaign with its owner's display data.
///
/// Render-only; never written back.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserCampaign {
    pub id: DbId,
    pub title: String,
    pub statement: String,
    pub goal: i64,
    pub create_user_id: DbId,
    pub created_at: Timestamp,
    pub last_name: String,
    pub first_name: String,
}
