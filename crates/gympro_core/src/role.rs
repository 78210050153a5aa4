//! User roles
//!
//! A role decides which dashboard, drawer entry and tab set the navigator
//! mounts. Roles arrive as free-form strings from storage and the auth
//! server; [`Role::parse_or_default`] is the single place they are normalised.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
    /// Least-privileged role, used whenever a role string is not recognised
    #[default]
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Trainer, Role::Member];

    /// Strict, case-insensitive parse. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "trainer" => Some(Role::Trainer),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    /// Parse with the member fallback applied to unknown or absent values.
    pub fn parse_or_default(value: Option<&str>) -> Role {
        match value.and_then(Role::parse) {
            Some(role) => role,
            None => {
                tracing::debug!(value = ?value, "Unrecognised role, defaulting to member");
                Role::default()
            }
        }
    }

    /// Lower-case wire/storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
            Role::Member => "member",
        }
    }

    /// Capitalised display label, used for the drawer entry and headers
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Trainer => "Trainer",
            Role::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
