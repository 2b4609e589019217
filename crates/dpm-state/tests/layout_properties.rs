//! Property tests for the layout reducer.

use dpm_model::Theme;
use dpm_state::{LayoutMessage, LayoutState};
use proptest::prelude::*;

const DESKTOP: u32 = 1440;
const PHONE: u32 = 414;

fn desktop_message() -> impl Strategy<Value = LayoutMessage> {
    prop_oneof![
        Just(LayoutMessage::PointerEntered),
        Just(LayoutMessage::PointerLeft),
        any::<bool>().prop_map(LayoutMessage::SetPinned),
        Just(LayoutMessage::TogglePin),
        any::<bool>().prop_map(LayoutMessage::SetFrozen),
        Just(LayoutMessage::ToggleFreeze),
        Just(LayoutMessage::HeaderMenuClicked),
    ]
}

fn setter_message() -> impl Strategy<Value = LayoutMessage> {
    prop_oneof![
        Just(LayoutMessage::PointerEntered),
        Just(LayoutMessage::PointerLeft),
        any::<bool>().prop_map(LayoutMessage::SetPinned),
        any::<bool>().prop_map(LayoutMessage::SetFrozen),
        any::<bool>().prop_map(LayoutMessage::SetMobileMenuOpen),
        Just(LayoutMessage::CloseMobileMenu),
        Just(LayoutMessage::BackdropClicked),
        Just(LayoutMessage::Navigated),
        prop_oneof![Just(Theme::Dark), Just(Theme::Light)].prop_map(LayoutMessage::SetTheme),
        prop_oneof![Just(PHONE), Just(DESKTOP)].prop_map(LayoutMessage::Resized),
    ]
}

fn mobile_message() -> impl Strategy<Value = LayoutMessage> {
    prop_oneof![
        Just(LayoutMessage::ToggleMobileMenu),
        any::<bool>().prop_map(LayoutMessage::SetMobileMenuOpen),
        Just(LayoutMessage::HeaderMenuClicked),
        Just(LayoutMessage::Navigated),
        Just(LayoutMessage::BackdropClicked),
        Just(LayoutMessage::PointerEntered),
        Just(LayoutMessage::TogglePin),
    ]
}

proptest! {
    #[test]
    fn collapsed_iff_nothing_holds_it_open(
        messages in proptest::collection::vec(desktop_message(), 0..40)
    ) {
        let mut state = LayoutState::new(DESKTOP, Theme::Dark);
        let mut pointer_over = false;
        for message in messages {
            state.apply(message);
            match message {
                LayoutMessage::PointerEntered => pointer_over = true,
                LayoutMessage::PointerLeft => pointer_over = false,
                _ => {}
            }
            prop_assert_eq!(state.sidebar_hovered(), pointer_over);
            let held_open = state.sidebar_pinned()
                || state.sidebar_hover_frozen()
                || state.sidebar_hovered();
            prop_assert_eq!(state.sidebar_open(), held_open);
            prop_assert!(!(state.sidebar_pinned() && state.sidebar_hover_frozen()));
        }
    }

    #[test]
    fn setters_are_idempotent(
        prefix in proptest::collection::vec(setter_message(), 0..20),
        message in setter_message(),
    ) {
        let mut state = LayoutState::new(DESKTOP, Theme::Dark);
        for m in prefix {
            state.apply(m);
        }
        state.apply(message);
        let once = state;
        prop_assert!(!state.apply(message));
        prop_assert_eq!(state, once);
    }

    #[test]
    fn drawer_closed_whenever_on_desktop(
        messages in proptest::collection::vec(
            prop_oneof![setter_message(), desktop_message(), mobile_message()],
            0..60,
        )
    ) {
        let mut state = LayoutState::new(DESKTOP, Theme::Dark);
        for message in messages {
            state.apply(message);
            if !state.is_mobile() {
                prop_assert!(!state.mobile_menu_open());
                prop_assert!(!state.resolved().drawer_open);
            } else {
                prop_assert!(!state.resolved().sidebar_visible);
            }
        }
    }

    #[test]
    fn mobile_detour_leaves_desktop_sidebar_alone(
        setup in proptest::collection::vec(desktop_message(), 0..20),
        detour in proptest::collection::vec(mobile_message(), 0..20),
    ) {
        let mut state = LayoutState::new(DESKTOP, Theme::Dark);
        for m in setup {
            state.apply(m);
        }
        state.apply(LayoutMessage::PointerLeft);
        let sidebar_before = state.sidebar();

        state.apply(LayoutMessage::Resized(PHONE));
        state.apply(LayoutMessage::SetMobileMenuOpen(true));
        for m in detour {
            state.apply(m);
        }
        state.apply(LayoutMessage::Resized(DESKTOP));

        prop_assert!(!state.mobile_menu_open());
        prop_assert_eq!(state.sidebar(), sidebar_before);
    }
}
