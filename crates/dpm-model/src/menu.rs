//! Navigation menu entries.

use crate::role::Role;
use crate::route::RouteId;

/// Icon shown next to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Studies,
    Viewer,
    Reports,
    Users,
    Audit,
    Settings,
}

/// One entry of the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub route: RouteId,
    pub icon: Icon,
    /// Roles allowed to see the entry; `None` means every role.
    pub roles: Option<Vec<Role>>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, route: RouteId, icon: Icon) -> Self {
        Self {
            label: label.into(),
            route,
            icon,
            roles: None,
        }
    }

    /// Restrict the entry to the given roles.
    #[must_use]
    pub fn restricted_to(mut self, roles: &[Role]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    /// Whether a user with `role` may see this entry.
    ///
    /// Restricted entries are hidden when there is no role at all.
    pub fn permits(&self, role: Option<Role>) -> bool {
        match (&self.roles, role) {
            (None, _) => true,
            (Some(allowed), Some(role)) => allowed.contains(&role),
            (Some(_), None) => false,
        }
    }
}
