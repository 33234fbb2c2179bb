//! User roles and the centralized authorization policy.
//!
//! Roles are stored as smallint in the database (1 = admin, 2 = staff,
//! 3 = customer). Handlers never compare raw integers; they go through
//! [`require_role`] or the typed extractors in the API crate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    /// Decode a role from its stored smallint value.
    pub const fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Role::Admin),
            2 => Some(Role::Staff),
            3 => Some(Role::Customer),
            _ => None,
        }
    }

    /// The smallint value persisted in the `users.role` column.
    pub const fn as_i16(self) -> i16 {
        match self {
            Role::Admin => 1,
            Role::Staff => 2,
            Role::Customer => 3,
        }
    }

    /// Lowercase role name used in API responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }
}

/// Check that `caller` holds one of the `allowed` roles.
///
/// Returns `CoreError::Forbidden` naming the required roles otherwise.
/// Every role-gated operation funnels through this single check.
pub fn require_role(caller: Role, allowed: &[Role]) -> Result<(), CoreError> {
    if allowed.contains(&caller) {
        return Ok(());
    }
    let names: Vec<&str> = allowed.iter().map(|r| r.as_str()).collect();
    Err(CoreError::Forbidden(format!(
        "Requires role: {}",
        names.join(" or ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::Admin, Role::Staff, Role::Customer] {
            assert_eq!(Role::from_i16(role.as_i16()), Some(role));
        }
        assert_eq!(Role::from_i16(0), None);
        assert_eq!(Role::from_i16(4), None);
    }

    #[test]
    fn test_require_role_allows_listed_roles() {
        assert!(require_role(Role::Admin, &[Role::Admin]).is_ok());
        assert!(require_role(Role::Staff, &[Role::Admin, Role::Staff]).is_ok());
    }

    #[test]
    fn test_require_role_rejects_others() {
        let err = require_role(Role::Customer, &[Role::Admin, Role::Staff]).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
        assert!(err.to_string().contains("admin or staff"));
    }
}
