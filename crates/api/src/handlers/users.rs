//! Handlers for the `/users` resource. All require the `hr` role.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::roles::Role;
use hrm_core::types::DbId;
use hrm_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use hrm_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::middleware::rbac::RequireHr;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Query parameters for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub role: Option<Role>,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, role = %input.role, by = hr.user_id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::try_from(&user)?)))
}

/// GET /api/v1/users?role=
pub async fn list(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = match params.role {
        Some(role) => UserRepo::list_by_role(&state.pool, role).await?,
        None => UserRepo::list(&state.pool).await?,
    };
    Ok(Json(to_responses(&users)?))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::try_from(&user)?))
}

/// PUT /api/v1/users/{id}
///
/// Also used to change a user's role (e.g. promote a hired guest to employee).
pub async fn update(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    if id == hr.user_id && input.role.is_some_and(|r| r != Role::Hr) {
        return Err(AppError::Core(CoreError::Conflict(
            "You cannot remove your own hr role".into(),
        )));
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    if let Some(role) = input.role {
        tracing::info!(user_id = id, role = %role, by = hr.user_id, "User role changed");
    }
    if input.is_active == Some(false) {
        SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    }
    Ok(Json(UserResponse::try_from(&user)?))
}

/// DELETE /api/v1/users/{id}
///
/// Deactivates the account and revokes its sessions; records owned by the
/// user are kept.
pub async fn delete(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == hr.user_id {
        return Err(AppError::Core(CoreError::Conflict(
            "You cannot deactivate your own account".into(),
        )));
    }
    if !UserRepo::deactivate(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    tracing::info!(user_id = id, revoked, by = hr.user_id, "User deactivated");
    Ok(StatusCode::NO_CONTENT)
}

fn to_responses(users: &[User]) -> Result<Vec<UserResponse>, CoreError> {
    users.iter().map(UserResponse::try_from).collect()
}
