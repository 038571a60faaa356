//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
///
/// ```text
/// GET    /      -> list (?limit, offset)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcement::list).post(announcement::create))
        .route(
            "/{id}",
            get(announcement::get_by_id)
                .put(announcement::update)
                .delete(announcement::delete),
        )
}
