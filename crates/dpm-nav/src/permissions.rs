//! Role-permission table.

use std::collections::HashMap;

use dpm_model::{Role, RouteId};

/// Roles permitted per route.
///
/// A route without an entry is open to every authenticated role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    restricted: HashMap<RouteId, Vec<Role>>,
}

impl PermissionTable {
    /// An empty table: every route open to every signed-in role.
    pub fn open() -> Self {
        Self::default()
    }

    /// The application's table: user management, audit logs and settings
    /// are for administrators only.
    pub fn standard() -> Self {
        Self::open()
            .restrict(RouteId::Users, &[Role::Administrator])
            .restrict(RouteId::AuditLogs, &[Role::Administrator])
            .restrict(RouteId::Settings, &[Role::Administrator])
    }

    /// Restrict `route` to `roles`, replacing any previous entry.
    ///
    /// An empty role list removes the restriction.
    #[must_use]
    pub fn restrict(mut self, route: RouteId, roles: &[Role]) -> Self {
        if roles.is_empty() {
            self.restricted.remove(&route);
        } else {
            self.restricted.insert(route, roles.to_vec());
        }
        self
    }

    /// Required roles for `route`; empty when unrestricted.
    pub fn required_roles(&self, route: RouteId) -> &[Role] {
        self.restricted
            .get(&route)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Required roles as an optional restriction, the shape menu items use.
    pub fn restriction(&self, route: RouteId) -> Option<Vec<Role>> {
        self.restricted.get(&route).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_restricts_admin_routes() {
        let table = PermissionTable::standard();
        assert_eq!(table.required_roles(RouteId::Users), &[Role::Administrator]);
        assert_eq!(table.required_roles(RouteId::AuditLogs), &[Role::Administrator]);
        assert_eq!(table.required_roles(RouteId::Settings), &[Role::Administrator]);
        for open in [
            RouteId::Dashboard,
            RouteId::Studies,
            RouteId::StudyDetails,
            RouteId::Viewer,
            RouteId::Reports,
            RouteId::Login,
        ] {
            assert!(table.required_roles(open).is_empty(), "{open} should be open");
        }
    }

    #[test]
    fn empty_restriction_removes_entry() {
        let table = PermissionTable::standard().restrict(RouteId::Users, &[]);
        assert!(table.required_roles(RouteId::Users).is_empty());
        assert_eq!(table.restriction(RouteId::Users), None);
    }
}
