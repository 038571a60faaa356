//! Handlers for the `/document-requests` resource and the seeded
//! `/document-types` lookup.
//!
//! Like complaints, requests are records: create, read, and status moves
//! only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lingkod_core::error::CoreError;
use lingkod_core::pagination::{clamp_limit, clamp_offset};
use lingkod_core::types::DbId;
use lingkod_db::models::document_request::{
    CreateDocumentRequest, DocumentRequest, DocumentType, UpdateDocumentRequestStatus,
};
use lingkod_db::models::status::{DocumentRequestStatus, StatusId};
use lingkod_db::repositories::DocumentRequestRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default page size for request listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for request listing.
const MAX_LIMIT: i64 = 200;

/// Query parameters for `GET /document-requests`.
#[derive(Debug, Deserialize)]
pub struct DocumentRequestQuery {
    /// Restrict the listing to one workflow status.
    pub status_id: Option<StatusId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/document-types
///
/// Lists the seeded document types with their fees.
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<DocumentType>>> {
    let types = DocumentRequestRepo::list_types(&state.pool).await?;
    Ok(Json(types))
}

/// POST /api/v1/document-requests
///
/// The document type must be one of the seeded lookup rows.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDocumentRequest>,
) -> AppResult<(StatusCode, Json<DocumentRequest>)> {
    if input.requester_name.trim().is_empty() || input.purpose.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "requester name and purpose are required".to_string(),
        )));
    }
    let known = DocumentRequestRepo::find_type_by_id(&state.pool, input.document_type_id).await?;
    if known.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown document type id {}",
            input.document_type_id
        ))));
    }

    let request = DocumentRequestRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/document-requests
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DocumentRequestQuery>,
) -> AppResult<Json<Vec<DocumentRequest>>> {
    if let Some(status_id) = params.status_id {
        parse_status(status_id)?;
    }
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let requests = DocumentRequestRepo::list(&state.pool, params.status_id, limit, offset).await?;
    Ok(Json(requests))
}

/// GET /api/v1/document-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DocumentRequest>> {
    let request = DocumentRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DocumentRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// PUT /api/v1/document-requests/{id}/status
///
/// Moves a request through its workflow; `released_at` bookkeeping happens
/// in the repository query.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocumentRequestStatus>,
) -> AppResult<Json<DocumentRequest>> {
    let status = parse_status(input.status_id)?;
    let request =
        DocumentRequestRepo::update_status(&state.pool, id, status, input.remarks.as_deref())
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "DocumentRequest",
                id,
            }))?;
    Ok(Json(request))
}

fn parse_status(status_id: StatusId) -> Result<DocumentRequestStatus, AppError> {
    DocumentRequestStatus::from_id(status_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "unknown document request status id {status_id}"
        )))
    })
}
