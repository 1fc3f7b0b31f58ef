//! User entity model and DTOs.

use hrm_core::error::CoreError;
use hrm_core::roles::Role;
use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: i16,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Resolve the stored `user_type` into a [`Role`].
    pub fn role(&self) -> Result<Role, CoreError> {
        Role::try_from(self.user_type)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl TryFrom<&User> for UserResponse {
    type Error = CoreError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role()?,
            is_active: user.is_active,
            created_at: user.created_at,
        })
    }
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}
