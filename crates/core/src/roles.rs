//! Principal roles.
//!
//! Stored as the SMALLINT `users.user_type` column; the discriminants below
//! are the persisted values. Anything else read from the database or a token
//! is rejected at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_GUEST: &str = "guest";
pub const ROLE_EMPLOYEE: &str = "employee";
pub const ROLE_HR: &str = "hr";

/// Role of an authenticated principal.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest = 0,
    Employee = 1,
    Hr = 2,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Guest, Role::Employee, Role::Hr];

    /// The persisted `user_type` value.
    pub fn id(self) -> i16 {
        self as i16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => ROLE_GUEST,
            Role::Employee => ROLE_EMPLOYEE,
            Role::Hr => ROLE_HR,
        }
    }

    /// Whether a principal holding `self` meets a single required role.
    pub fn satisfies(self, required: Role) -> bool {
        match self {
            Role::Hr => true,
            Role::Employee => matches!(required, Role::Employee | Role::Guest),
            Role::Guest => required == Role::Guest,
        }
    }
}

impl TryFrom<i16> for Role {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::Guest),
            1 => Ok(Role::Employee),
            2 => Ok(Role::Hr),
            other => Err(CoreError::Validation(format!(
                "Unknown user_type {other}"
            ))),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_GUEST => Ok(Role::Guest),
            ROLE_EMPLOYEE => Ok(Role::Employee),
            ROLE_HR => Ok(Role::Hr),
            other => Err(CoreError::Validation(format!(
                "Unknown role '{other}'. Must be one of: guest, employee, hr"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_ids_match_storage() {
        assert_eq!(Role::Guest.id(), 0);
        assert_eq!(Role::Employee.id(), 1);
        assert_eq!(Role::Hr.id(), 2);
    }

    #[test]
    fn unknown_user_type_is_rejected() {
        assert!(Role::try_from(3).is_err());
        assert!(Role::try_from(-1).is_err());
    }

    #[test]
    fn names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }
}
