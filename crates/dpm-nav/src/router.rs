//! Path resolution through the route guard.

use dpm_model::{Route, RouteId, Session};

use crate::guard::{Access, authorize};
use crate::permissions::PermissionTable;

/// Where a navigation attempt ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show this route.
    Render(Route),
    /// Replace the current location with this route.
    Redirect(RouteId),
}

impl Navigation {
    /// Path the address bar should show afterwards.
    pub fn path(&self) -> String {
        match self {
            Self::Render(route) => route.path(),
            Self::Redirect(id) => id.pattern().to_string(),
        }
    }
}

/// Router over a permission table.
#[derive(Debug, Clone)]
pub struct Router {
    permissions: PermissionTable,
    login: RouteId,
    default: RouteId,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(PermissionTable::standard())
    }
}

impl Router {
    pub fn new(permissions: PermissionTable) -> Self {
        Self {
            permissions,
            login: RouteId::Login,
            default: RouteId::Dashboard,
        }
    }

    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Guard decision for an already-parsed route.
    pub fn access(&self, route: &Route, session: &Session) -> Access {
        if route.id() == self.login {
            return Access::Allow;
        }
        authorize(session, self.permissions.required_roles(route.id()))
    }

    /// Resolve an address-bar path for `session`.
    ///
    /// `/` and unknown paths redirect to the default route, which is then
    /// subject to the guard on the following navigation.
    pub fn navigate(&self, path: &str, session: &Session) -> Navigation {
        let route = match Route::parse(path) {
            Ok(route) => route,
            Err(e) => {
                if path.trim_end_matches('/').is_empty() {
                    tracing::debug!("Root path, redirecting to {}", self.default);
                } else {
                    tracing::debug!("{e}, redirecting to {}", self.default);
                }
                return self.redirect_default(session);
            }
        };

        match self.access(&route, session) {
            Access::Allow => Navigation::Render(route),
            Access::RedirectToLogin => {
                tracing::debug!(path, "Not signed in, redirecting to login");
                Navigation::Redirect(self.login)
            }
            Access::RedirectToDefault => {
                tracing::debug!(path, "Role not permitted, redirecting to default");
                Navigation::Redirect(self.default)
            }
        }
    }

    fn redirect_default(&self, session: &Session) -> Navigation {
        if session.is_authenticated() {
            Navigation::Redirect(self.default)
        } else {
            Navigation::Redirect(self.login)
        }
    }
}
