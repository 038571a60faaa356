//! Handlers for the `/residents` resource, badge awards, and the
//! leaderboard.
//!
//! A resident's points only move through badge awards and revocations; the
//! plain update endpoint cannot touch them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lingkod_core::error::CoreError;
use lingkod_core::pagination::clamp_limit;
use lingkod_core::types::DbId;
use lingkod_db::models::badge::ResidentBadge;
use lingkod_db::models::resident::{CreateResident, LeaderboardEntry, Resident, UpdateResident};
use lingkod_db::repositories::ResidentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default number of leaderboard rows.
const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

/// Maximum number of leaderboard rows.
const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Resident CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/residents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateResident>,
) -> AppResult<(StatusCode, Json<Resident>)> {
    if input.full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "full name is required".to_string(),
        )));
    }
    let resident = ResidentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(resident)))
}

/// GET /api/v1/residents
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Resident>>> {
    let residents = ResidentRepo::list(&state.pool).await?;
    Ok(Json(residents))
}

/// GET /api/v1/residents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Resident>> {
    let resident = ResidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    Ok(Json(resident))
}

/// PUT /api/v1/residents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResident>,
) -> AppResult<Json<Resident>> {
    let resident = ResidentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    Ok(Json(resident))
}

/// DELETE /api/v1/residents/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ResidentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Badge awards
// ---------------------------------------------------------------------------

/// GET /api/v1/residents/{id}/badges
pub async fn list_badges(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ResidentBadge>>> {
    ensure_resident_exists(&state, id).await?;
    let awards = ResidentRepo::badges_for(&state.pool, id).await?;
    Ok(Json(awards))
}

/// POST /api/v1/residents/{id}/badges/{badge_id}
///
/// Awards the badge and adds its points to the resident in one transaction.
/// Awarding the same badge twice returns 409.
pub async fn award_badge(
    State(state): State<AppState>,
    Path((id, badge_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<Resident>)> {
    ensure_resident_exists(&state, id).await?;
    let resident = ResidentRepo::award_badge(&state.pool, id, badge_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Badge",
            id: badge_id,
        }))?;
    Ok((StatusCode::CREATED, Json(resident)))
}

/// DELETE /api/v1/residents/{id}/badges/{badge_id}
///
/// Revokes the badge and subtracts the points that were awarded with it.
pub async fn revoke_badge(
    State(state): State<AppState>,
    Path((id, badge_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Resident>> {
    ensure_resident_exists(&state, id).await?;
    let resident = ResidentRepo::revoke_badge(&state.pool, id, badge_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "resident {id} does not hold badge {badge_id}"
            )))
        })?;
    Ok(Json(resident))
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// GET /api/v1/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT);
    let entries = ResidentRepo::leaderboard(&state.pool, limit).await?;
    Ok(Json(entries))
}

async fn ensure_resident_exists(state: &AppState, id: DbId) -> AppResult<()> {
    let found = ResidentRepo::find_by_id(&state.pool, id).await?;
    if found.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }));
    }
    Ok(())
}
