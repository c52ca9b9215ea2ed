//! Selection state of a carousel item.

use std::fmt;

/// The tri-state selection state every item carries.
///
/// The state machine itself accepts any transition. Exclusivity among
/// siblings is enforced by the owning group, not by the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemState {
    /// Not visible and not interactive. Every item starts here.
    #[default]
    Collapsed,
    /// Visible and selectable.
    NotSelected,
    /// The one active choice within its group.
    Selected,
}

impl ItemState {
    /// Whether this is [`ItemState::Selected`].
    pub fn is_selected(self) -> bool {
        self == Self::Selected
    }

    /// Whether this is [`ItemState::Collapsed`].
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Collapsed => "collapsed",
            Self::NotSelected => "not-selected",
            Self::Selected => "selected",
        };
        f.write_str(name)
    }
}
