//! Session value and its persisted wire form.

use serde::{Deserialize, Serialize};

use crate::role::{Role, User};

/// Who is signed in, if anyone.
///
/// `is_authenticated()` is derived from the presence of a user, so the two
/// can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// A signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
        }
    }
}

/// JSON stored under the `auth-storage` key:
/// `{"user": {...} | null, "isAuthenticated": bool}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl PersistedSession {
    /// Convert to a [`Session`].
    ///
    /// A record whose flag and user disagree is treated as signed out.
    pub fn into_session(self) -> Session {
        match (self.user, self.is_authenticated) {
            (Some(user), true) => Session::signed_in(user),
            _ => Session::anonymous(),
        }
    }
}
