//! Repository for the `officials` table.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::official::{CreateOfficial, Official, UpdateOfficial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, position, email, phone, is_active, created_at, updated_at";

pub struct OfficialRepo;

impl OfficialRepo {
    /// Insert a new official. New officials start active.
    pub async fn create(pool: &PgPool, input: &CreateOfficial) -> Result<Official, sqlx::Error> {
        let query = format!(
            "INSERT INTO officials (full_name, position, email, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Official>(&query)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find an official by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Official>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM officials WHERE id = $1");
        sqlx::query_as::<_, Official>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List officials, optionally including deactivated ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Official>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM officials \
             WHERE is_active = true OR $1 \
             ORDER BY full_name ASC"
        );
        sqlx::query_as::<_, Official>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update an official. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOfficial,
    ) -> Result<Option<Official>, sqlx::Error> {
        let query = format!(
            "UPDATE officials SET \
                full_name = COALESCE($2, full_name), \
                position = COALESCE($3, position), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Official>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an official. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM officials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
