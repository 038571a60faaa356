//! Handlers for the `/announcements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingkod_core::error::CoreError;
use lingkod_core::pagination::{clamp_limit, clamp_offset};
use lingkod_core::types::DbId;
use lingkod_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use lingkod_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Default page size for announcement listing.
const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for announcement listing.
const MAX_LIMIT: i64 = 100;

/// POST /api/v1/announcements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title is required".to_string(),
        )));
    }
    let announcement = AnnouncementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// GET /api/v1/announcements
///
/// Newest first, paginated via `?limit=&offset=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Announcement>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let announcements = AnnouncementRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(announcements))
}

/// GET /api/v1/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// PUT /api/v1/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// DELETE /api/v1/announcements/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))
    }
}
