//! Authentication handlers: signup, login, token refresh, logout, me.
//!
//! Signup and login run their validation pre-checks (institutional email
//! domain, minimum password length) before touching the database, in that
//! order. Login failures never reveal whether the email or the password
//! was wrong.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use studynotes_core::error::CoreError;
use studynotes_core::identity::{validate_email_domain, validate_password_length};
use studynotes_core::types::DbId;
use studynotes_db::models::session::CreateSession;
use studynotes_db::models::user::{CreateUser, User};
use studynotes_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Token pair plus user identity returned by signup, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Issue an access/refresh token pair for `user` and persist the session.
async fn create_auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to generate token: {e}")))?;

    let (refresh_token, refresh_token_hash) = generate_refresh_token();
    let expires_at = chrono::Utc::now()
        + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(user),
    })
}

/// `POST /api/v1/auth/signup`
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // Pre-checks run before any database access, domain first.
    validate_email_domain(&req.email, &state.config.allowed_email_domain)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_password_length(&req.password, state.config.min_password_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already in use".into(),
        )));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    // The unique constraint on email backstops the check above under races.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "User signed up");

    let response = create_auth_response(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/v1/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_email_domain(&req.email, &state.config.allowed_email_domain)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_password_length(&req.password, state.config.min_password_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let user = UserRepo::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password.".into()))
        })?;

    let verified = verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))?;
    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password.".into(),
        )));
    }

    tracing::info!(user_id = user.id, "User logged in");

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/refresh`
///
/// Rotates the refresh token: the presented session is revoked and a fresh
/// token pair is issued.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&req.refresh_token);

    let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/logout`
///
/// Revokes every session belonging to the caller. Idempotent.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    tracing::info!(user_id = user.user_id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/auth/me`
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: user.user_id,
        }))?;
    Ok(Json(UserResponse::from(&user)))
}
