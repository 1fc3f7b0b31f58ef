//! The access gate: decides whether a principal may reach a route class.

use crate::error::CoreError;
use crate::roles::Role;

/// Check `principal` against a set of required roles.
///
/// The principal is allowed when it satisfies any role in `required`.
/// A missing principal is always `Unauthorized`, even for routes with no
/// role requirement; role evaluation happens only after that.
pub fn authorize(principal: Option<Role>, required: &[Role]) -> Result<(), CoreError> {
    let role = principal
        .ok_or_else(|| CoreError::Unauthorized("Authentication required".into()))?;

    if required.is_empty() || role == Role::Hr {
        return Ok(());
    }

    if required.iter().any(|r| role.satisfies(*r)) {
        return Ok(());
    }

    let names: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
    Err(CoreError::Forbidden(format!(
        "Role '{role}' may not access this resource (requires {})",
        names.join(" or ")
    )))
}
