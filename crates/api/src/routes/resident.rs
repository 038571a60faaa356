//! Route definitions for the `/residents` resource and the leaderboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::resident;
use crate::state::AppState;

/// Routes mounted at `/residents`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
///
/// GET    /{id}/badges              -> list_badges
/// POST   /{id}/badges/{badge_id}   -> award_badge
/// DELETE /{id}/badges/{badge_id}   -> revoke_badge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resident::list).post(resident::create))
        .route(
            "/{id}",
            get(resident::get_by_id)
                .put(resident::update)
                .delete(resident::delete),
        )
        .route("/{id}/badges", get(resident::list_badges))
        .route(
            "/{id}/badges/{badge_id}",
            post(resident::award_badge).delete(resident::revoke_badge),
        )
}

/// Routes mounted at `/leaderboard`.
///
/// ```text
/// GET /  -> leaderboard (?limit)
/// ```
pub fn leaderboard_router() -> Router<AppState> {
    Router::new().route("/", get(resident::leaderboard))
}
