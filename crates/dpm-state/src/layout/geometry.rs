//! Derived layout geometry.

use dpm_model::Theme;

use super::LayoutState;

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Desktop sidebar width when expanded.
pub const SIDEBAR_EXPANDED_WIDTH: u32 = 256;

/// Desktop sidebar width when collapsed to the icon rail.
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 80;

/// Width of the mobile drawer.
pub const DRAWER_WIDTH: u32 = 288;

/// Height of the fixed header.
pub const HEADER_HEIGHT: u32 = 64;

/// Visual layout computed from [`LayoutState`]. All sizes in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Whether the desktop sidebar is rendered at all
    pub sidebar_visible: bool,
    /// Whether the desktop sidebar shows labels (expanded)
    pub sidebar_expanded: bool,
    /// Desktop sidebar width; 0 on mobile
    pub sidebar_width: u32,
    /// Left margin of the main content
    pub content_offset: u32,
    /// Left edge of the fixed header
    pub header_offset: u32,
    pub header_height: u32,
    /// Whether the mobile drawer is shown
    pub drawer_open: bool,
    /// Drawer width; 0 when closed
    pub drawer_width: u32,
    pub theme: Theme,
}

impl ResolvedLayout {
    pub fn resolve(state: &LayoutState) -> Self {
        if state.is_mobile() {
            let drawer_open = state.mobile_menu_open();
            return Self {
                sidebar_visible: false,
                sidebar_expanded: false,
                sidebar_width: 0,
                content_offset: 0,
                header_offset: 0,
                header_height: HEADER_HEIGHT,
                drawer_open,
                drawer_width: if drawer_open { DRAWER_WIDTH } else { 0 },
                theme: state.theme(),
            };
        }

        let expanded = state.sidebar_open();
        let width = if expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        };
        Self {
            sidebar_visible: true,
            sidebar_expanded: expanded,
            sidebar_width: width,
            content_offset: width,
            header_offset: width,
            header_height: HEADER_HEIGHT,
            drawer_open: false,
            drawer_width: 0,
            theme: state.theme(),
        }
    }
}

/// Whether a viewport of `width` pixels counts as mobile.
pub fn is_mobile_width(width: u32) -> bool {
    width < MOBILE_BREAKPOINT
}
