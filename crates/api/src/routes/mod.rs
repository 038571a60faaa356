pub mod announcement;
pub mod badge;
pub mod category;
pub mod complaint;
pub mod document_request;
pub mod health;
pub mod official;
pub mod project;
pub mod resident;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                list, create
/// /projects/{id}                           get, update (multipart)
/// /projects/{id}/cancel                    cancel (POST)
/// /projects/{id}/images                    upload images (POST, multipart)
/// /projects/{id}/images/{image_id}         delete image
///
/// /categories                              list
///
/// /officials                               list (?include_inactive), create
/// /officials/{id}                          get, update, delete
///
/// /announcements                           list (?limit, offset), create
/// /announcements/{id}                      get, update, delete
///
/// /complaints                              list (?status_id, limit, offset), create
/// /complaints/{id}                         get
/// /complaints/{id}/status                  update status (PUT)
///
/// /document-types                          list
/// /document-requests                       list (?status_id, limit, offset), create
/// /document-requests/{id}                  get
/// /document-requests/{id}/status           update status (PUT)
///
/// /residents                               list, create
/// /residents/{id}                          get, update, delete
/// /residents/{id}/badges                   list awarded badges
/// /residents/{id}/badges/{badge_id}        award (POST), revoke (DELETE)
/// /leaderboard                             resident ranking (?limit)
///
/// /badges                                  list, create
/// /badges/{id}                             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Infrastructure projects: stages, photos, cancellation.
        .nest("/projects", project::router())
        // Fixed project category catalog.
        .nest("/categories", category::router())
        // Barangay officials directory.
        .nest("/officials", official::router())
        // Public announcements.
        .nest("/announcements", announcement::router())
        // Complaint intake and status workflow.
        .nest("/complaints", complaint::router())
        // Document issuance: request lifecycle plus the type catalog.
        .nest("/document-requests", document_request::router())
        .nest("/document-types", document_request::types_router())
        // Residents, badge awards, and the points leaderboard.
        .nest("/residents", resident::router())
        .nest("/leaderboard", resident::leaderboard_router())
        // Badge catalog.
        .nest("/badges", badge::router())
}
