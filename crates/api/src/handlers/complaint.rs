//! Handlers for the `/complaints` resource.
//!
//! Complaints are records: they can be filed, read, and moved through their
//! workflow, but never deleted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lingkod_core::error::CoreError;
use lingkod_core::pagination::{clamp_limit, clamp_offset};
use lingkod_core::types::DbId;
use lingkod_db::models::complaint::{Complaint, CreateComplaint, UpdateComplaintStatus};
use lingkod_db::models::status::{ComplaintStatus, StatusId};
use lingkod_db::repositories::ComplaintRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default page size for complaint listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for complaint listing.
const MAX_LIMIT: i64 = 200;

/// Query parameters for `GET /complaints`.
#[derive(Debug, Deserialize)]
pub struct ComplaintQuery {
    /// Restrict the listing to one workflow status.
    pub status_id: Option<StatusId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/complaints
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComplaint>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    if input.complainant_name.trim().is_empty() || input.subject.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "complainant name and subject are required".to_string(),
        )));
    }
    let complaint = ComplaintRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// GET /api/v1/complaints
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ComplaintQuery>,
) -> AppResult<Json<Vec<Complaint>>> {
    if let Some(status_id) = params.status_id {
        parse_status(status_id)?;
    }
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let complaints = ComplaintRepo::list(&state.pool, params.status_id, limit, offset).await?;
    Ok(Json(complaints))
}

/// GET /api/v1/complaints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Complaint>> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(complaint))
}

/// PUT /api/v1/complaints/{id}/status
///
/// Moves a complaint through its workflow; `resolved_at` bookkeeping happens
/// in the repository query.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaintStatus>,
) -> AppResult<Json<Complaint>> {
    let status = parse_status(input.status_id)?;
    let complaint = ComplaintRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(complaint))
}

fn parse_status(status_id: StatusId) -> Result<ComplaintStatus, AppError> {
    ComplaintStatus::from_id(status_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "unknown complaint status id {status_id}"
        )))
    })
}
