//! Repository for the `campaigns` table.

use sigcolle_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CreateCampaign, UserCampaign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, statement, goal, create_user_id, created_at";

/// Provides operations for campaigns. Campaigns are create-only.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign inside its own transaction, returning the
    /// created row with the database-assigned id.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO campaigns (title, statement, goal, create_user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.title)
            .bind(&input.statement)
            .bind(input.goal)
            .bind(input.create_user_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(campaign)
    }

    /// Find a campaign by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the campaign/owner read projection used by the campaign page.
    pub async fn find_user_campaign(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserCampaign>, sqlx::Error> {
        sqlx::query_as::<_, UserCampaign>(
            "SELECT c.id, c.title, c.statement, c.goal, c.create_user_id, c.created_at,
                    u.last_name, u.first_name
             FROM campaigns c
             JOIN users u ON u.id = c.create_user_id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
