//! Study mode handlers: YouTube embed extraction.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use studynotes_core::video::{embed_url, extract_embed_id};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmbedQuery {
    pub url: String,
}

/// Embed extraction result. `embed_id` is null when the URL does not carry
/// a recognizable 11-character video id.
#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    pub embed_id: Option<String>,
    pub embed_url: Option<String>,
}

/// `GET /api/v1/study/embed?url=`
pub async fn embed(
    State(_state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EmbedQuery>,
) -> AppResult<Json<DataResponse<EmbedResponse>>> {
    let response = match extract_embed_id(&params.url) {
        Some(id) => EmbedResponse {
            embed_url: Some(embed_url(id)),
            embed_id: Some(id.to_string()),
        },
        None => EmbedResponse {
            embed_id: None,
            embed_url: None,
        },
    };
    Ok(Json(DataResponse { data: response }))
}
