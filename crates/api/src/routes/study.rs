//! Route definitions for the `/study` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::study;
use crate::state::AppState;

/// Routes mounted at `/study` (requires auth).
///
/// ```text
/// GET /embed?url= -> YouTube embed id extraction
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/embed", get(study::embed))
}
