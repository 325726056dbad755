//! Route definitions for the `/classes` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Routes mounted at `/classes` (all require auth).
///
/// ```text
/// GET    /          -> list (lexicographic; fallback set when empty)
/// POST   /          -> create
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(classes::list_classes).post(classes::create_class),
        )
        .route("/{id}", delete(classes::delete_class))
}
