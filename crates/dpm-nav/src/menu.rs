//! Sidebar menu definition and filtering.

use dpm_model::{Icon, MenuItem, Role, RouteId};

use crate::permissions::PermissionTable;

/// Entries in declaration order: label, route, icon.
const MENU: &[(&str, RouteId, Icon)] = &[
    ("Dashboard", RouteId::Dashboard, Icon::Dashboard),
    ("Studies", RouteId::Studies, Icon::Studies),
    ("Viewer", RouteId::Viewer, Icon::Viewer),
    ("Reports", RouteId::Reports, Icon::Reports),
    ("Users", RouteId::Users, Icon::Users),
    ("Audit Logs", RouteId::AuditLogs, Icon::Audit),
    ("Settings", RouteId::Settings, Icon::Settings),
];

/// The seven-entry application menu, with role restrictions taken from
/// `permissions` so menu and guard cannot drift apart.
pub fn standard_menu(permissions: &PermissionTable) -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(label, route, icon)| MenuItem {
            roles: permissions.restriction(route),
            ..MenuItem::new(label, route, icon)
        })
        .collect()
}

/// Entries visible to `role` whose label contains `query`.
///
/// Stable filter: declaration order is preserved. A blank query matches
/// everything; otherwise matching is a case-insensitive substring test
/// against the label.
pub fn visible_items<'a>(
    items: &'a [MenuItem],
    role: Option<Role>,
    query: &str,
) -> Vec<&'a MenuItem> {
    let needle = (!query.trim().is_empty()).then(|| query.to_lowercase());
    items
        .iter()
        .filter(|item| item.permits(role))
        .filter(|item| match &needle {
            Some(needle) => item.label.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}
