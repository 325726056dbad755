//! Study group registry handlers.
//!
//! Membership changes are idempotent: adding an existing member or removing
//! an absent one succeeds and returns the (unchanged) group.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use studynotes_core::error::CoreError;
use studynotes_core::types::DbId;
use studynotes_db::models::group::StudyGroup;
use studynotes_db::repositories::GroupRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub email: String,
}

/// `POST /api/v1/groups`
///
/// The creator's email is automatically the first member.
pub async fn create_group(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateGroupRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<StudyGroup>>)> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Group name is required".into()));
    }

    let group = GroupRepo::create(&state.pool, &req.name, &user.email).await?;
    tracing::info!(group_id = group.id, user_id = user.user_id, "Group created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: group })))
}

/// `GET /api/v1/groups`
///
/// Lists the groups the caller's email is a member of.
pub async fn list_groups(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<StudyGroup>>>> {
    let groups = GroupRepo::list_for_member(&state.pool, &user.email).await?;
    Ok(Json(DataResponse { data: groups }))
}

/// `POST /api/v1/groups/{id}/members`
pub async fn add_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(req): Json<AddMemberRequest>,
) -> AppResult<Json<DataResponse<StudyGroup>>> {
    let group = GroupRepo::add_member(&state.pool, id, &req.email)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "group",
            id,
        }))?;
    tracing::info!(group_id = id, member = %req.email, user_id = user.user_id, "Member added");
    Ok(Json(DataResponse { data: group }))
}

/// `DELETE /api/v1/groups/{id}/members/{email}`
pub async fn remove_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, email)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<StudyGroup>>> {
    let group = GroupRepo::remove_member(&state.pool, id, &email)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "group",
            id,
        }))?;
    tracing::info!(group_id = id, member = %email, user_id = user.user_id, "Member removed");
    Ok(Json(DataResponse { data: group }))
}
