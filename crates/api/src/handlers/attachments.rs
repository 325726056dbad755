//! Attachment upload handler.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::object_key;

/// Default folder when the multipart form does not name one.
const DEFAULT_FOLDER: &str = "attachments";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    /// Object key within the store.
    pub path: String,
}

/// `POST /api/v1/attachments`
///
/// Multipart form with a `file` field (required, must carry a filename) and
/// an optional `folder` field. The stored key is
/// `{folder}/{epoch_millis}_{filename}`; two uploads of the same filename
/// land under distinct keys.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let mut folder = DEFAULT_FOLDER.to_string();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("folder") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid folder field: {e}")))?;
                if !value.trim().is_empty() {
                    folder = value.trim().to_string();
                }
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::BadRequest("File must have a filename".into()))?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    let key = object_key(&folder, &filename);
    let stored = state.object_store.put_bytes(&key, &bytes).await?;

    tracing::info!(
        key = %stored.key,
        size = bytes.len(),
        user_id = user.user_id,
        "Attachment uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse {
                url: stored.url,
                filename,
                path: stored.key,
            },
        }),
    ))
}
