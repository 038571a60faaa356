//! Handlers for the `/badges` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lingkod_core::error::CoreError;
use lingkod_core::types::DbId;
use lingkod_db::models::badge::{Badge, CreateBadge, UpdateBadge};
use lingkod_db::repositories::BadgeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/badges
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBadge>,
) -> AppResult<(StatusCode, Json<Badge>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name is required".to_string(),
        )));
    }
    if input.points < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "points must be non-negative".to_string(),
        )));
    }
    let badge = BadgeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(badge)))
}

/// GET /api/v1/badges
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Badge>>> {
    let badges = BadgeRepo::list(&state.pool).await?;
    Ok(Json(badges))
}

/// GET /api/v1/badges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Badge>> {
    let badge = BadgeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Badge", id }))?;
    Ok(Json(badge))
}

/// PUT /api/v1/badges/{id}
///
/// Re-valuing a badge only affects future awards; points already granted
/// were snapshotted at award time.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBadge>,
) -> AppResult<Json<Badge>> {
    if input.points.is_some_and(|p| p < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "points must be non-negative".to_string(),
        )));
    }
    let badge = BadgeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Badge", id }))?;
    Ok(Json(badge))
}

/// DELETE /api/v1/badges/{id}
///
/// Fails with 409 while any resident still holds the badge; revoke the
/// awards first.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BadgeRepo::delete(&state.pool, id)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Core(
                CoreError::Conflict("Badge is still awarded to residents".to_string()),
            ),
            other => AppError::Database(other),
        })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Badge", id }))
    }
}
