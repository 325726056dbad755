pub mod attachments;
pub mod auth;
pub mod classes;
pub mod groups;
pub mod health;
pub mod notes;
pub mod study;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                       signup (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
/// /auth/me                           current user (requires auth)
///
/// /notes                             list, create
/// /notes/{id}                        get, update, delete
///
/// /classes                           list, create
/// /classes/{id}                      delete
///
/// /groups                            list (membership), create
/// /groups/{id}/members               add member (POST)
/// /groups/{id}/members/{email}       remove member (DELETE)
///
/// /attachments                       upload (multipart POST)
///
/// /study/embed                       YouTube embed extraction (GET)
/// ```
///
/// Everything except signup/login/refresh requires a Bearer access token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
        .nest("/classes", classes::router())
        .nest("/groups", groups::router())
        .nest("/attachments", attachments::router())
        .nest("/study", study::router())
}
