//! Repository for the `document_requests` table and its seeded types.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::document_request::{CreateDocumentRequest, DocumentRequest, DocumentType};
use crate::models::status::{DocumentRequestStatus, StatusId};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, requester_name, contact, document_type_id, purpose, status_id, \
    remarks, released_at, created_at, updated_at";

const TYPE_COLUMNS: &str = "id, name, fee, created_at";

pub struct DocumentRequestRepo;

impl DocumentRequestRepo {
    /// List the available document types alphabetically.
    pub async fn list_types(pool: &PgPool) -> Result<Vec<DocumentType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM document_types ORDER BY name ASC");
        sqlx::query_as::<_, DocumentType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a document type by internal ID.
    pub async fn find_type_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DocumentType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM document_types WHERE id = $1");
        sqlx::query_as::<_, DocumentType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// File a new request. New requests start Pending.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDocumentRequest,
    ) -> Result<DocumentRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_requests (requester_name, contact, document_type_id, purpose) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(&input.requester_name)
            .bind(&input.contact)
            .bind(input.document_type_id)
            .bind(&input.purpose)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DocumentRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM document_requests WHERE id = $1");
        sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests newest first, paginated, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_requests \
             WHERE $1::smallint IS NULL OR status_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Move a request to a new workflow status, optionally replacing remarks.
    ///
    /// `released_at` is stamped on the first move into `Released`, preserved
    /// on repeated `Released` writes, and cleared otherwise. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: DocumentRequestStatus,
        remarks: Option<&str>,
    ) -> Result<Option<DocumentRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE document_requests SET \
                status_id = $2, \
                remarks = COALESCE($3, remarks), \
                released_at = CASE WHEN $2 = $4 THEN COALESCE(released_at, NOW()) ELSE NULL END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(id)
            .bind(status.id())
            .bind(remarks)
            .bind(DocumentRequestStatus::Released.id())
            .fetch_optional(pool)
            .await
    }
}
