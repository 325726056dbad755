//! Route definitions for the `/attachments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::attachments;
use crate::state::AppState;

/// Routes mounted at `/attachments` (requires auth).
///
/// ```text
/// POST / -> upload (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(attachments::upload))
}
