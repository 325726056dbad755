//! Class (subject) registry handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use studynotes_core::error::CoreError;
use studynotes_core::notes::FALLBACK_CLASS_NAMES;
use studynotes_core::types::DbId;
use studynotes_db::models::class::Class;
use studynotes_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
}

/// A class as presented to clients.
///
/// Fallback entries carry synthetic negative ids so they are
/// distinguishable from persisted rows.
#[derive(Debug, Serialize)]
pub struct ClassOption {
    pub id: DbId,
    pub name: String,
}

/// `POST /api/v1/classes`
pub async fn create_class(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateClassRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Class>>)> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Class name is required".into()));
    }

    let class = ClassRepo::create(&state.pool, &req.name).await?;
    tracing::info!(class_id = class.id, user_id = user.user_id, "Class created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: class })))
}

/// `GET /api/v1/classes`
///
/// Lists classes ordered lexicographically. An empty table yields the
/// hardcoded fallback list; those entries are never persisted.
pub async fn list_classes(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<ClassOption>>>> {
    let classes = ClassRepo::list(&state.pool).await?;

    let options: Vec<ClassOption> = if classes.is_empty() {
        FALLBACK_CLASS_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| ClassOption {
                id: -(i as DbId) - 1,
                name: (*name).to_string(),
            })
            .collect()
    } else {
        classes
            .into_iter()
            .map(|c| ClassOption {
                id: c.id,
                name: c.name,
            })
            .collect()
    };

    Ok(Json(DataResponse { data: options }))
}

/// `DELETE /api/v1/classes/{id}`
///
/// Unconditional delete; notes keep their denormalized subject strings.
pub async fn delete_class(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClassRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "class",
            id,
        }));
    }
    tracing::info!(class_id = id, user_id = user.user_id, "Class deleted");
    Ok(StatusCode::NO_CONTENT)
}
