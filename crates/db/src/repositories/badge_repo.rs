//! Repository for the `badges` table.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::badge::{Badge, CreateBadge, UpdateBadge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, points, created_at, updated_at";

pub struct BadgeRepo;

impl BadgeRepo {
    /// Insert a new badge. Badge names are unique.
    pub async fn create(pool: &PgPool, input: &CreateBadge) -> Result<Badge, sqlx::Error> {
        let query = format!(
            "INSERT INTO badges (name, description, icon, points) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.points)
            .fetch_one(pool)
            .await
    }

    /// Find a badge by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE id = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all badges alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges ORDER BY name ASC");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// Update a badge. Only non-`None` fields in `input` are applied.
    ///
    /// A points change does not rewrite past awards; those keep the value
    /// snapshotted at award time. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBadge,
    ) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!(
            "UPDATE badges SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                icon = COALESCE($4, icon), \
                points = COALESCE($5, points) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.points)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a badge. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while any resident still holds the
    /// badge; revoke the awards first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM badges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
