//! Handlers for the `/officials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lingkod_core::error::CoreError;
use lingkod_core::types::DbId;
use lingkod_db::models::official::{CreateOfficial, Official, UpdateOfficial};
use lingkod_db::repositories::OfficialRepo;

use crate::error::{AppError, AppResult};
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// POST /api/v1/officials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOfficial>,
) -> AppResult<(StatusCode, Json<Official>)> {
    if input.full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "full name is required".to_string(),
        )));
    }
    let official = OfficialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(official)))
}

/// GET /api/v1/officials
///
/// Deactivated officials stay on record but are hidden unless
/// `?include_inactive=true`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Official>>> {
    let officials = OfficialRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(officials))
}

/// GET /api/v1/officials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Official>> {
    let official = OfficialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Official",
            id,
        }))?;
    Ok(Json(official))
}

/// PUT /api/v1/officials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOfficial>,
) -> AppResult<Json<Official>> {
    let official = OfficialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Official",
            id,
        }))?;
    Ok(Json(official))
}

/// DELETE /api/v1/officials/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OfficialRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Official",
            id,
        }))
    }
}
