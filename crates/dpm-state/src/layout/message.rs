//! Input events accepted by the layout store.

use dpm_model::Theme;

/// A discrete UI input.
///
/// Handlers are idempotent: sending the same setter twice leaves the state
/// as if it had been sent once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMessage {
    /// Pointer moved onto the desktop sidebar
    PointerEntered,
    /// Pointer moved off the desktop sidebar
    PointerLeft,
    /// Set the pin explicitly (expand/collapse chevrons)
    SetPinned(bool),
    /// Flip the pin
    ///
    /// Not idempotent: a second toggle undoes the first. Chevrons that
    /// show the current state should send `SetPinned(!open)` instead.
    TogglePin,
    /// Set the hover freeze explicitly
    SetFrozen(bool),
    /// Flip the hover freeze (freeze indicator)
    ///
    /// Not idempotent, like [`LayoutMessage::TogglePin`].
    ToggleFreeze,
    /// Header hamburger button
    HeaderMenuClicked,
    /// Viewport width changed, in CSS pixels
    Resized(u32),
    /// Open or close the mobile drawer
    SetMobileMenuOpen(bool),
    /// Flip the mobile drawer
    ToggleMobileMenu,
    /// Drawer close button
    CloseMobileMenu,
    /// Click on the dimmed area behind the drawer
    BackdropClicked,
    /// A menu entry was followed
    Navigated,
    SetTheme(Theme),
    ToggleTheme,
}
