//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and runs the access gate
//! ([`hrm_core::access::authorize`]) against a fixed required-role set.
//! A missing or invalid token is rejected as 401 by [`AuthUser`] before any
//! role is looked at; a role mismatch is 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hrm_core::access::authorize;
use hrm_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

macro_rules! role_extractor {
    ($(#[$meta:meta])* $name:ident => [$($role:expr),*]) => {
        $(#[$meta])*
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let user = AuthUser::from_request_parts(parts, state).await?;
                authorize(Some(user.role), &[$($role),*])?;
                Ok($name(user))
            }
        }
    };
}

role_extractor! {
    /// Requires the `hr` role. Rejects with 403 Forbidden otherwise.
    RequireHr => [Role::Hr]
}

role_extractor! {
    /// Requires `employee` (or `hr`, which satisfies every role).
    RequireEmployee => [Role::Employee]
}

role_extractor! {
    /// Requires `guest`, which every principal satisfies.
    RequireGuest => [Role::Guest]
}

role_extractor! {
    /// Requires any authenticated principal; no role requirement.
    RequireAuth => []
}
