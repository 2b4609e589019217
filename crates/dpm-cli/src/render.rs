//! Plain-text and table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use dpm_model::{MenuItem, Role, Session};
use dpm_nav::Navigation;
use dpm_state::{LayoutState, Sidebar};

/// Shared table look for every listing.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Menu listing: label, path and the roles allowed to see the entry.
pub fn menu_table(items: &[&MenuItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entry"),
        header_cell("Path"),
        header_cell("Roles"),
    ]);
    apply_table_style(&mut table);
    for item in items {
        let roles = match &item.roles {
            Some(roles) => Cell::new(
                roles
                    .iter()
                    .map(Role::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            None => dim_cell("all"),
        };
        table.add_row(vec![
            Cell::new(&item.label),
            Cell::new(item.route.pattern()),
            roles,
        ]);
    }
    table
}

fn sidebar_label(sidebar: Sidebar) -> &'static str {
    match sidebar {
        Sidebar::Collapsed => "collapsed",
        Sidebar::Hovered => "expanded (hover)",
        Sidebar::Pinned { hovered: false } => "expanded (pinned)",
        Sidebar::Pinned { hovered: true } => "expanded (pinned, hover)",
        Sidebar::Frozen { hovered: false } => "expanded (frozen)",
        Sidebar::Frozen { hovered: true } => "expanded (frozen, hover)",
    }
}

/// Multi-line summary of the layout and its resolved geometry.
pub fn layout_summary(state: &LayoutState) -> String {
    let resolved = state.resolved();
    let mode = if state.is_mobile() { "mobile" } else { "desktop" };
    let sidebar = if resolved.sidebar_visible {
        format!(
            "{}, {}px",
            sidebar_label(state.sidebar()),
            resolved.sidebar_width
        )
    } else {
        "hidden".to_string()
    };
    let drawer = if resolved.drawer_open {
        format!("open, {}px", resolved.drawer_width)
    } else {
        "closed".to_string()
    };
    [
        format!("viewport: {}px ({mode})", state.viewport_width()),
        format!("sidebar:  {sidebar}"),
        format!("drawer:   {drawer}"),
        format!(
            "header:   offset {}px, height {}px",
            resolved.header_offset, resolved.header_height
        ),
        format!("content:  offset {}px", resolved.content_offset),
        format!("theme:    {}", resolved.theme),
    ]
    .join("\n")
}

/// Who is signed in, or a note that nobody is.
pub fn session_summary(session: &Session, timeout_secs: u64) -> String {
    match session.user() {
        Some(user) => format!(
            "signed in: {} ({})\nrole:      {}\ninitials:  {}\ntimeout:   {}s",
            user.name,
            user.email,
            user.role,
            user.initials(),
            timeout_secs
        ),
        None => "signed out".to_string(),
    }
}

/// One line describing a navigation outcome.
pub fn navigation_summary(requested: &str, navigation: &Navigation) -> String {
    match navigation {
        Navigation::Render(route) => format!("render   {}", route.path()),
        Navigation::Redirect(target) => format!("redirect {requested} -> {target}"),
    }
}
