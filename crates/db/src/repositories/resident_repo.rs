//! Repository for the `residents` table, badge awards, and the leaderboard.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::badge::ResidentBadge;
use crate::models::resident::{CreateResident, LeaderboardEntry, Resident, UpdateResident};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, address, points, created_at, updated_at";

const AWARD_COLUMNS: &str = "id, resident_id, badge_id, points_awarded, awarded_at";

pub struct ResidentRepo;

impl ResidentRepo {
    // ── Standard CRUD ────────────────────────────────────────────────

    /// Register a new resident with zero points.
    pub async fn create(pool: &PgPool, input: &CreateResident) -> Result<Resident, sqlx::Error> {
        let query = format!(
            "INSERT INTO residents (full_name, address) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resident>(&query)
            .bind(&input.full_name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a resident by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM residents WHERE id = $1");
        sqlx::query_as::<_, Resident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List residents alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM residents ORDER BY full_name ASC");
        sqlx::query_as::<_, Resident>(&query).fetch_all(pool).await
    }

    /// Update a resident's details. Points are untouchable here; they only
    /// move through awards and revocations.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResident,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let query = format!(
            "UPDATE residents SET \
                full_name = COALESCE($2, full_name), \
                address = COALESCE($3, address) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resident>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a resident and (via cascade) their badge awards.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM residents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Badge awards ─────────────────────────────────────────────────

    /// List a resident's badge awards, newest first.
    pub async fn badges_for(
        pool: &PgPool,
        resident_id: DbId,
    ) -> Result<Vec<ResidentBadge>, sqlx::Error> {
        let query = format!(
            "SELECT {AWARD_COLUMNS} FROM resident_badges \
             WHERE resident_id = $1 \
             ORDER BY awarded_at DESC, id DESC"
        );
        sqlx::query_as::<_, ResidentBadge>(&query)
            .bind(resident_id)
            .fetch_all(pool)
            .await
    }

    /// Award a badge: insert the join row and add the badge's points to the
    /// resident, in one transaction.
    ///
    /// The badge's current point value is snapshotted on the award row.
    /// Returns `None` (nothing committed) if the badge does not exist.
    /// Awarding the same badge twice violates the award uniqueness
    /// constraint and surfaces as a conflict.
    pub async fn award_badge(
        pool: &PgPool,
        resident_id: DbId,
        badge_id: DbId,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let badge_points: Option<(i32,)> = sqlx::query_as("SELECT points FROM badges WHERE id = $1")
            .bind(badge_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((points,)) = badge_points else {
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO resident_badges (resident_id, badge_id, points_awarded) \
             VALUES ($1, $2, $3)",
        )
        .bind(resident_id)
        .bind(badge_id)
        .bind(points)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE residents SET points = points + $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let resident = sqlx::query_as::<_, Resident>(&query)
            .bind(resident_id)
            .bind(points)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(resident))
    }

    /// Revoke a badge: delete the join row and subtract the points that were
    /// awarded with it, in one transaction.
    ///
    /// Returns `None` (nothing committed) if the resident does not hold the
    /// badge.
    pub async fn revoke_badge(
        pool: &PgPool,
        resident_id: DbId,
        badge_id: DbId,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<(i32,)> = sqlx::query_as(
            "DELETE FROM resident_badges WHERE resident_id = $1 AND badge_id = $2 \
             RETURNING points_awarded",
        )
        .bind(resident_id)
        .bind(badge_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((points,)) = removed else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE residents SET points = points - $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let resident = sqlx::query_as::<_, Resident>(&query)
            .bind(resident_id)
            .bind(points)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(resident))
    }

    // ── Leaderboard ──────────────────────────────────────────────────

    /// Rank residents by points (ties broken alphabetically) with their
    /// badge tallies.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT ROW_NUMBER() OVER (ORDER BY r.points DESC, r.full_name ASC) AS rank, \
                    r.id, r.full_name, r.points, COUNT(rb.id) AS badge_count \
             FROM residents r \
             LEFT JOIN resident_badges rb ON rb.resident_id = r.id \
             GROUP BY r.id \
             ORDER BY r.points DESC, r.full_name ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
