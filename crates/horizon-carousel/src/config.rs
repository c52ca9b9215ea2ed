//! Configuration for a [`SelectionTree`](crate::SelectionTree).

use crate::state::ItemState;

/// How a group reacts when it is selected without a selected child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Children are only selected by explicit calls.
    #[default]
    Manual,
    /// A selected group keeps one of its visible children selected.
    ///
    /// When the group becomes selected with no selected child, its first
    /// visible child is selected. When a filter pass or a removal leaves it
    /// without a selected child, the visible child nearest to the previous
    /// selection is selected instead.
    Eager,
}

/// Tree-wide behaviour switches.
#[derive(Clone, Debug)]
pub struct CarouselConfig {
    /// State the root group starts in.
    pub root_state: ItemState,
    /// Policy applied to the root and to groups created without an explicit one.
    pub default_policy: SelectionPolicy,
    /// Move a selected item to `NotSelected` when a filter pass hides it.
    pub deselect_filtered: bool,
    /// Hide groups with content whose children are all filtered.
    pub filter_empty_groups: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            root_state: ItemState::Selected,
            default_policy: SelectionPolicy::Manual,
            deselect_filtered: true,
            filter_empty_groups: false,
        }
    }
}

impl CarouselConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state of the root group.
    pub fn root_state(mut self, state: ItemState) -> Self {
        self.root_state = state;
        self
    }

    /// Set the policy used for the root and for new groups.
    pub fn default_policy(mut self, policy: SelectionPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Enable or disable deselecting items hidden by a filter pass.
    pub fn deselect_filtered(mut self, enabled: bool) -> Self {
        self.deselect_filtered = enabled;
        self
    }

    /// Enable or disable hiding groups whose children are all filtered.
    pub fn filter_empty_groups(mut self, enabled: bool) -> Self {
        self.filter_empty_groups = enabled;
        self
    }
}
