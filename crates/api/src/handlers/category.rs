//! Handlers for the `/categories` lookup resource.

use axum::extract::State;
use axum::Json;
use lingkod_db::models::category::Category;
use lingkod_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// Lists the seeded project categories alphabetically.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}
