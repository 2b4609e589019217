//! User roles and identity records.
//!
//! Roles are the only authority for access decisions. Every ad hoc
//! "is this an admin" check goes through [`Role`] and the route/menu
//! logic in `dpm-nav`, never through raw string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including user management, audit logs and settings.
    Administrator,
    /// Runs and monitors pipeline studies.
    Technician,
    /// Reads studies and reports.
    Radiologist,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Returns the canonical name as stored and displayed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Technician => "Technician",
            Role::Radiologist => "Radiologist",
            Role::Viewer => "Viewer",
        }
    }

    /// All roles in declaration order.
    pub const fn all() -> &'static [Role] {
        &[
            Role::Administrator,
            Role::Technician,
            Role::Radiologist,
            Role::Viewer,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    /// Parse a role name, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ModelError::InvalidRole {
                value: s.to_string(),
            })
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Two-letter initials used for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|part| !part.ends_with('.'))
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Untrusted login input, as produced by a login form or demo button.
///
/// The role is still a raw string here; [`LoginRequest::into_user`] is the
/// single place it is checked against [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl LoginRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Validate the role and produce a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRole`] when the role is not one of the
    /// four known roles.
    pub fn into_user(self) -> crate::Result<User> {
        let role = self.role.parse()?;
        Ok(User {
            name: self.name,
            email: self.email,
            role,
        })
    }
}
