//! Route definitions for the `/badges` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::badge;
use crate::state::AppState;

/// Routes mounted at `/badges`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(badge::list).post(badge::create))
        .route(
            "/{id}",
            get(badge::get_by_id)
                .put(badge::update)
                .delete(badge::delete),
        )
}
