//! Repository for the `signatures` table.

use sigcolle_core::types::DbId;
use sqlx::PgPool;

use crate::models::signature::{CreateSignature, Signature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, name, signature_comment, created_at";

/// Provides operations for signatures. Signatures are create-only.
pub struct SignatureRepo;

impl SignatureRepo {
    /// Insert a new signature inside its own transaction, returning the
    /// created row. The insert either fully commits or has no effect.
    pub async fn create(pool: &PgPool, input: &CreateSignature) -> Result<Signature, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO signatures (campaign_id, name, signature_comment)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let signature = sqlx::query_as::<_, Signature>(&query)
            .bind(input.campaign_id)
            .bind(&input.name)
            .bind(&input.signature_comment)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(signature)
    }

    /// Count signatures for a campaign. The count is always derived,
    /// never stored.
    pub async fn count_by_campaign(pool: &PgPool, campaign_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM signatures WHERE campaign_id = $1")
            .bind(campaign_id)
            .fetch_one(pool)
            .await
    }
}
