//! Note CRUD handlers.
//!
//! Request DTOs carry `tags` and `shared_with` as comma-separated strings;
//! they are parsed into trimmed, empty-filtered, order-preserving lists
//! before reaching the repository. Create and update require a non-blank
//! title before touching the store.
//!
//! The listing endpoint merges two queries (owned, shared-with) without
//! deduplication: a note the caller owns that also lists the caller's own
//! email in `shared_with` appears twice, once per side.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use studynotes_core::error::CoreError;
use studynotes_core::notes::{matches_search, parse_comma_list};
use studynotes_core::types::DbId;
use studynotes_db::models::note::{CreateNote, Note, NoteWithOwnership, UpdateNote};
use studynotes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub subject: String,
    /// Comma-separated tag list, e.g. `"math, physics"`.
    #[serde(default)]
    pub tags: String,
    /// Comma-separated emails to share with.
    #[serde(default)]
    pub shared_with: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    /// Comma-separated tag list; omit to leave tags untouched.
    pub tags: Option<String>,
    /// Comma-separated emails; omit to leave the share list untouched.
    pub shared_with: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListNotesQuery {
    /// Case-insensitive substring matched against title, subject, and tags.
    pub q: Option<String>,
}

/// `GET /api/v1/notes`
///
/// Owned and shared queries run concurrently; results are concatenated
/// owned-then-shared and stably sorted by `updated_at` descending, so ties
/// keep their per-query order.
pub async fn list_notes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListNotesQuery>,
) -> AppResult<Json<DataResponse<Vec<NoteWithOwnership>>>> {
    let (owned, shared) = tokio::try_join!(
        NoteRepo::list_owned(&state.pool, user.user_id),
        NoteRepo::list_shared_with(&state.pool, &user.email),
    )?;

    let mut notes: Vec<NoteWithOwnership> = owned
        .into_iter()
        .map(|note| NoteWithOwnership {
            note,
            is_owner: true,
        })
        .chain(shared.into_iter().map(|note| NoteWithOwnership {
            note,
            is_owner: false,
        }))
        .collect();

    notes.sort_by(|a, b| b.note.updated_at.cmp(&a.note.updated_at));

    if let Some(q) = params.q.as_deref() {
        notes.retain(|n| matches_search(q, &n.note.title, &n.note.subject, &n.note.tags));
    }

    Ok(Json(DataResponse { data: notes }))
}

/// `GET /api/v1/notes/{id}`
pub async fn get_note(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Note>>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
    Ok(Json(DataResponse { data: note }))
}

/// `POST /api/v1/notes`
pub async fn create_note(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }

    let input = CreateNote {
        title: req.title,
        markdown: req.markdown,
        content: req.content,
        subject: req.subject,
        tags: parse_comma_list(&req.tags),
        shared_with: parse_comma_list(&req.shared_with),
    };

    let note = NoteRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(note_id = note.id, user_id = user.user_id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// `PUT /api/v1/notes/{id}`
///
/// No ownership check: any authenticated caller holding the id may update.
pub async fn update_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(req): Json<UpdateNoteRequest>,
) -> AppResult<Json<DataResponse<Note>>> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".into()));
        }
    }

    let input = UpdateNote {
        title: req.title,
        markdown: req.markdown,
        content: req.content,
        subject: req.subject,
        tags: req.tags.as_deref().map(parse_comma_list),
        shared_with: req.shared_with.as_deref().map(parse_comma_list),
    };

    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
    tracing::info!(note_id = id, user_id = user.user_id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// `DELETE /api/v1/notes/{id}`
///
/// No ownership check: any authenticated caller holding the id may delete.
pub async fn delete_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "note", id }));
    }
    tracing::info!(note_id = id, user_id = user.user_id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}
