//! Route definitions for the `/groups` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// Routes mounted at `/groups` (all require auth).
///
/// ```text
/// GET    /                       -> list (groups the caller belongs to)
/// POST   /                       -> create
/// POST   /{id}/members           -> add member (idempotent)
/// DELETE /{id}/members/{email}   -> remove member (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(groups::list_groups).post(groups::create_group))
        .route("/{id}/members", post(groups::add_member))
        .route("/{id}/members/{email}", delete(groups::remove_member))
}
