//! Repository for the `complaints` table.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::complaint::{Complaint, CreateComplaint};
use crate::models::status::{ComplaintStatus, StatusId};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, complainant_name, contact, subject, details, status_id, \
    resolved_at, created_at, updated_at";

pub struct ComplaintRepo;

impl ComplaintRepo {
    /// File a new complaint. New complaints start Pending.
    pub async fn create(pool: &PgPool, input: &CreateComplaint) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (complainant_name, contact, subject, details) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.complainant_name)
            .bind(&input.contact)
            .bind(&input.subject)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List complaints newest first, paginated, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints \
             WHERE $1::smallint IS NULL OR status_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Move a complaint to a new workflow status.
    ///
    /// `resolved_at` is stamped on the first move into `Resolved`, preserved
    /// on repeated `Resolved` writes, and cleared when the complaint leaves
    /// `Resolved`. Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET \
                status_id = $2, \
                resolved_at = CASE WHEN $2 = $3 THEN COALESCE(resolved_at, NOW()) ELSE NULL END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(status.id())
            .bind(ComplaintStatus::Resolved.id())
            .fetch_optional(pool)
            .await
    }
}
