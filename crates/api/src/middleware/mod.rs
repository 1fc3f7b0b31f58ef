//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the principal from a JWT Bearer token.
//! - [`rbac::RequireGuest`] -- Any principal (guest, employee or hr).
//! - [`rbac::RequireEmployee`] -- `employee` or `hr`.
//! - [`rbac::RequireHr`] -- `hr` only.
//! - [`rbac::RequireAuth`] -- Any principal; no role requirement.

pub mod auth;
pub mod rbac;
