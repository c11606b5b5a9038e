//! Signature model.

use serde::Serialize;
use sigcolle_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `signatures` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Signature {
    pub id: DbId,
    pub campaign_id: DbId,
    pub name: String,
    pub signature_comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new signature.
#[derive(Debug)]
pub struct CreateSignature {
    pub campaign_id: DbId,
    pub name: String,
    pub signature_comment: Option<String>,
}
