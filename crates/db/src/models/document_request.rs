//! Document request entity model and DTOs.

use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A document type row from the seeded `document_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentType {
    pub id: DbId,
    pub name: String,
    pub fee: Option<f64>,
    pub created_at: Timestamp,
}

/// A document request row from the `document_requests` table.
///
/// `released_at` is set exactly while the status is `Released`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentRequest {
    pub id: DbId,
    pub requester_name: String,
    pub contact: Option<String>,
    pub document_type_id: DbId,
    pub purpose: String,
    pub status_id: StatusId,
    pub remarks: Option<String>,
    pub released_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a new document request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub requester_name: String,
    pub contact: Option<String>,
    pub document_type_id: DbId,
    pub purpose: String,
}

/// DTO for moving a request through its workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentRequestStatus {
    pub status_id: StatusId,
    pub remarks: Option<String>,
}
