//! UI layout state - sidebar, mobile drawer and theme.
//!
//! This module separates concerns into:
//!
//! - **Sidebar**: the desktop sidebar state machine
//! - **LayoutState**: the full transient layout plus a pure reducer
//! - **LayoutStore**: persistence of the theme and subscriber notification
//! - **ResolvedLayout**: widths and offsets derived for rendering
//!
//! Only the theme is persisted. Everything else starts fresh from the
//! viewport probe at process start.

mod geometry;
mod message;
mod sidebar;

pub use geometry::{
    DRAWER_WIDTH, HEADER_HEIGHT, MOBILE_BREAKPOINT, ResolvedLayout, SIDEBAR_COLLAPSED_WIDTH,
    SIDEBAR_EXPANDED_WIDTH, is_mobile_width,
};
pub use message::LayoutMessage;
pub use sidebar::Sidebar;

use std::rc::Rc;

use dpm_model::Theme;

use crate::error::StorageError;
use crate::storage::{KeyValueStore, THEME_KEY};
use crate::subscribers::{SubscriptionId, Subscribers};

// ============================================================================
// Layout State
// ============================================================================

/// All layout state in one place.
///
/// While the viewport is mobile the desktop sidebar is not rendered and
/// ignores input, so its state is exactly what it was before the viewport
/// shrank (minus the pointer, which cannot be over a hidden sidebar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    sidebar: Sidebar,
    viewport_width: u32,
    mobile: bool,
    mobile_menu_open: bool,
    theme: Theme,
}

impl LayoutState {
    pub fn new(viewport_width: u32, theme: Theme) -> Self {
        Self {
            sidebar: Sidebar::Collapsed,
            viewport_width,
            mobile: is_mobile_width(viewport_width),
            mobile_menu_open: false,
            theme,
        }
    }

    pub fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    /// Desktop sidebar expanded.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn sidebar_pinned(&self) -> bool {
        self.sidebar.is_pinned()
    }

    pub fn sidebar_hover_frozen(&self) -> bool {
        self.sidebar.is_frozen()
    }

    pub fn sidebar_hovered(&self) -> bool {
        self.sidebar.is_hovered()
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn resolved(&self) -> ResolvedLayout {
        ResolvedLayout::resolve(self)
    }

    /// Apply one input. Returns `true` if anything changed.
    pub fn apply(&mut self, message: LayoutMessage) -> bool {
        let before = *self;
        match message {
            LayoutMessage::PointerEntered => {
                if !self.mobile {
                    self.sidebar = self.sidebar.pointer_entered();
                }
            }
            LayoutMessage::PointerLeft => self.sidebar = self.sidebar.pointer_left(),
            LayoutMessage::SetPinned(pinned) => self.on_desktop(|s| s.with_pinned(pinned)),
            LayoutMessage::TogglePin => {
                let pinned = !self.sidebar.is_pinned();
                self.on_desktop(|s| s.with_pinned(pinned));
            }
            LayoutMessage::SetFrozen(frozen) => self.on_desktop(|s| s.with_frozen(frozen)),
            LayoutMessage::ToggleFreeze => {
                let frozen = !self.sidebar.is_frozen();
                self.on_desktop(|s| s.with_frozen(frozen));
            }
            LayoutMessage::HeaderMenuClicked => {
                if self.mobile {
                    self.mobile_menu_open = !self.mobile_menu_open;
                } else if self.sidebar.is_open() {
                    self.sidebar = self.sidebar.released_all();
                } else {
                    self.sidebar = self.sidebar.with_pinned(true);
                }
            }
            LayoutMessage::Resized(width) => self.resize(width),
            LayoutMessage::SetMobileMenuOpen(open) => self.mobile_menu_open = open && self.mobile,
            LayoutMessage::ToggleMobileMenu => {
                self.mobile_menu_open = self.mobile && !self.mobile_menu_open;
            }
            LayoutMessage::CloseMobileMenu | LayoutMessage::BackdropClicked => {
                self.mobile_menu_open = false;
            }
            LayoutMessage::Navigated => {
                if self.mobile {
                    self.mobile_menu_open = false;
                }
            }
            LayoutMessage::SetTheme(theme) => self.theme = theme,
            LayoutMessage::ToggleTheme => self.theme = self.theme.toggled(),
        }
        *self != before
    }

    fn on_desktop(&mut self, transition: impl FnOnce(Sidebar) -> Sidebar) {
        if !self.mobile {
            self.sidebar = transition(self.sidebar);
        }
    }

    fn resize(&mut self, width: u32) {
        self.viewport_width = width;
        let mobile = is_mobile_width(width);
        if mobile == self.mobile {
            return;
        }
        if mobile {
            tracing::debug!(width, "Viewport switched to mobile");
            self.sidebar = self.sidebar.pointer_left();
        } else {
            tracing::debug!(width, "Viewport switched to desktop");
            self.mobile_menu_open = false;
        }
        self.mobile = mobile;
    }
}

// ============================================================================
// Layout Store
// ============================================================================

/// Owns [`LayoutState`], persists the theme, and notifies subscribers.
pub struct LayoutStore {
    storage: Rc<dyn KeyValueStore>,
    state: LayoutState,
    subscribers: Subscribers<LayoutState>,
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl LayoutStore {
    /// Build the store from the persisted theme and a viewport probe.
    ///
    /// The resolved theme is written back immediately so the stored value
    /// is always well-formed after startup.
    pub fn restore(storage: Rc<dyn KeyValueStore>, viewport_width: u32) -> Self {
        let theme = match read_theme(storage.as_ref()) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("{e}, using dark theme");
                Theme::Dark
            }
        };
        let store = Self {
            storage,
            state: LayoutState::new(viewport_width, theme),
            subscribers: Subscribers::new(),
        };
        store.persist_theme();
        store
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn resolved(&self) -> ResolvedLayout {
        self.state.resolved()
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Apply one input, persisting and notifying on change.
    pub fn update(&mut self, message: LayoutMessage) -> bool {
        let previous_theme = self.state.theme();
        let changed = self.state.apply(message);
        if !changed {
            return false;
        }
        tracing::trace!(?message, "Layout changed");
        if self.state.theme() != previous_theme {
            tracing::info!(theme = %self.state.theme(), "Theme changed");
            self.persist_theme();
        }
        self.subscribers.notify(&self.state);
        true
    }

    pub fn subscribe(&mut self, callback: impl Fn(&LayoutState) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn persist_theme(&self) {
        if let Err(e) = self.storage.set(THEME_KEY, self.state.theme().as_str()) {
            tracing::warn!("Failed to save theme: {e}");
        }
    }
}

/// Read the persisted theme.
///
/// Absent and malformed values both resolve to [`Theme::Dark`].
///
/// # Errors
///
/// Returns [`StorageError`] only when the backend itself fails.
pub fn read_theme(storage: &dyn KeyValueStore) -> Result<Theme, StorageError> {
    let raw = storage.get(THEME_KEY)?;
    let theme = Theme::from_stored(raw.as_deref());
    if let Some(raw) = raw.as_deref().filter(|raw| *raw != theme.as_str()) {
        tracing::warn!("Unrecognised theme {raw:?} under {THEME_KEY:?}, using dark theme");
    }
    Ok(theme)
}
