//! Layout event tokens accepted by `dpm layout`.

use dpm_state::LayoutMessage;

/// Parse one event token into a layout message.
///
/// # Errors
///
/// Returns a message naming the token when it is not a known event or
/// when a `resize=` width is not a whole number.
pub fn parse_event(token: &str) -> Result<LayoutMessage, String> {
    if let Some(width) = token.strip_prefix("resize=") {
        return width
            .parse()
            .map(LayoutMessage::Resized)
            .map_err(|_| format!("invalid width in {token:?}"));
    }

    let message = match token {
        "enter" => LayoutMessage::PointerEntered,
        "leave" => LayoutMessage::PointerLeft,
        "pin" => LayoutMessage::SetPinned(true),
        "unpin" => LayoutMessage::SetPinned(false),
        "toggle-pin" => LayoutMessage::TogglePin,
        "freeze" => LayoutMessage::SetFrozen(true),
        "unfreeze" => LayoutMessage::SetFrozen(false),
        "toggle-freeze" => LayoutMessage::ToggleFreeze,
        "header" => LayoutMessage::HeaderMenuClicked,
        "menu" => LayoutMessage::ToggleMobileMenu,
        "close-menu" => LayoutMessage::CloseMobileMenu,
        "backdrop" => LayoutMessage::BackdropClicked,
        "nav" => LayoutMessage::Navigated,
        "theme" => LayoutMessage::ToggleTheme,
        other => {
            return Err(format!(
                "unknown event {other:?} (expected enter, leave, pin, unpin, toggle-pin, \
                 freeze, unfreeze, toggle-freeze, header, resize=<W>, menu, close-menu, \
                 backdrop, nav, theme)"
            ));
        }
    };
    Ok(message)
}
