//! Desktop sidebar state machine.
//!
//! The sidebar is expanded whenever it is pinned, hover-frozen, or the
//! pointer is over it, and collapsed otherwise. Pinned and frozen are
//! mutually exclusive: pinning clears the freeze, and freezing a pinned
//! sidebar changes nothing. The pointer position is tracked inside the
//! pinned/frozen variants so that releasing them falls back correctly.

/// Current desktop sidebar state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sidebar {
    /// Narrow icon rail
    #[default]
    Collapsed,
    /// Expanded because the pointer is over it
    Hovered,
    /// Expanded by explicit user action
    Pinned {
        /// Pointer currently over the sidebar
        hovered: bool,
    },
    /// Temporarily held open without pinning
    Frozen {
        /// Pointer currently over the sidebar
        hovered: bool,
    },
}

impl Sidebar {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen { .. })
    }

    pub fn is_hovered(&self) -> bool {
        match self {
            Self::Collapsed => false,
            Self::Hovered => true,
            Self::Pinned { hovered } | Self::Frozen { hovered } => *hovered,
        }
    }

    /// Fall-back state when neither pinned nor frozen.
    fn released(hovered: bool) -> Self {
        if hovered {
            Self::Hovered
        } else {
            Self::Collapsed
        }
    }

    #[must_use]
    pub fn pointer_entered(self) -> Self {
        self.with_hover(true)
    }

    #[must_use]
    pub fn pointer_left(self) -> Self {
        self.with_hover(false)
    }

    #[must_use]
    pub fn with_hover(self, hovered: bool) -> Self {
        match self {
            Self::Collapsed | Self::Hovered => Self::released(hovered),
            Self::Pinned { .. } => Self::Pinned { hovered },
            Self::Frozen { .. } => Self::Frozen { hovered },
        }
    }

    #[must_use]
    pub fn with_pinned(self, pinned: bool) -> Self {
        let hovered = self.is_hovered();
        match (self, pinned) {
            (_, true) => Self::Pinned { hovered },
            (Self::Pinned { .. }, false) => Self::released(hovered),
            (other, false) => other,
        }
    }

    #[must_use]
    pub fn with_frozen(self, frozen: bool) -> Self {
        let hovered = self.is_hovered();
        match (self, frozen) {
            (Self::Pinned { .. }, _) => self,
            (_, true) => Self::Frozen { hovered },
            (Self::Frozen { .. }, false) => Self::released(hovered),
            (other, false) => other,
        }
    }

    /// Release both pin and freeze, keeping only hover.
    #[must_use]
    pub fn released_all(self) -> Self {
        Self::released(self.is_hovered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_opens_and_closes_unpinned() {
        let s = Sidebar::Collapsed.pointer_entered();
        assert_eq!(s, Sidebar::Hovered);
        assert_eq!(s.pointer_left(), Sidebar::Collapsed);
    }

    #[test]
    fn pinned_survives_pointer_leave() {
        let s = Sidebar::Collapsed.pointer_entered().with_pinned(true).pointer_left();
        assert_eq!(s, Sidebar::Pinned { hovered: false });
        assert!(s.is_open());
    }

    #[test]
    fn frozen_survives_pointer_leave() {
        let s = Sidebar::Hovered.with_frozen(true).pointer_left();
        assert_eq!(s, Sidebar::Frozen { hovered: false });
        assert!(s.is_open());
    }

    #[test]
    fn unpin_falls_back_to_hover_or_collapse() {
        let hovered = Sidebar::Pinned { hovered: true }.with_pinned(false);
        assert_eq!(hovered, Sidebar::Hovered);
        let away = Sidebar::Pinned { hovered: false }.with_pinned(false);
        assert_eq!(away, Sidebar::Collapsed);
    }

    #[test]
    fn unfreeze_away_collapses_immediately() {
        let s = Sidebar::Frozen { hovered: false }.with_frozen(false);
        assert_eq!(s, Sidebar::Collapsed);
    }

    #[test]
    fn pin_clears_freeze_and_freeze_ignores_pin() {
        let pinned = Sidebar::Frozen { hovered: true }.with_pinned(true);
        assert_eq!(pinned, Sidebar::Pinned { hovered: true });
        assert_eq!(pinned.with_frozen(true), pinned);
        assert_eq!(pinned.with_frozen(false), pinned);
    }

    #[test]
    fn setters_are_idempotent() {
        for start in [
            Sidebar::Collapsed,
            Sidebar::Hovered,
            Sidebar::Pinned { hovered: false },
            Sidebar::Frozen { hovered: true },
        ] {
            for value in [true, false] {
                assert_eq!(
                    start.with_pinned(value).with_pinned(value),
                    start.with_pinned(value)
                );
                assert_eq!(
                    start.with_frozen(value).with_frozen(value),
                    start.with_frozen(value)
                );
                assert_eq!(
                    start.with_hover(value).with_hover(value),
                    start.with_hover(value)
                );
            }
        }
    }
}
