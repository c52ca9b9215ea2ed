//! Change notifications emitted by a [`SelectionTree`](crate::SelectionTree).
//!
//! Every signal is emitted synchronously from inside the operation that
//! caused it. Slots receive event values, not the tree, so they cannot
//! re-enter it while a cascade is running.
//!
//! # Ordering
//!
//! - A state change is announced right after the new state is stored and
//!   before any cascade it triggers runs. Events therefore arrive in causal
//!   order: the child that was clicked, then its siblings, then the group.
//! - `item_removed` is emitted after the item left the group and before the
//!   item is collapsed, so the collapse is announced with `group == None`.

use horizon_carousel_core::Signal;

use crate::item::ItemId;
use crate::state::ItemState;

/// A single state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// The item whose state changed.
    pub item: ItemId,
    /// The group owning the item at the moment of the change.
    pub group: Option<ItemId>,
    /// State before the change.
    pub old: ItemState,
    /// State after the change.
    pub new: ItemState,
}

/// Signals emitted by a [`SelectionTree`](crate::SelectionTree).
#[derive(Debug, Default)]
pub struct CarouselSignals {
    /// Emitted for every state transition.
    pub state_changed: Signal<StateChange>,

    /// Emitted when a filter pass flips an item's filtered flag.
    /// Args: (item, filtered)
    pub filtered_changed: Signal<(ItemId, bool)>,

    /// Emitted after an item was inserted into a group.
    /// Args: (group, item, index)
    pub item_added: Signal<(ItemId, ItemId, usize)>,

    /// Emitted after an item left a group, before it is collapsed.
    /// Args: (group, item, former index)
    pub item_removed: Signal<(ItemId, ItemId, usize)>,

    /// Emitted when a filter pass changed the order of a group's children.
    pub items_sorted: Signal<ItemId>,
}

impl CarouselSignals {
    /// Create a new set of signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Block or unblock every signal at once.
    pub fn set_blocked(&self, blocked: bool) {
        self.state_changed.set_blocked(blocked);
        self.filtered_changed.set_blocked(blocked);
        self.item_added.set_blocked(blocked);
        self.item_removed.set_blocked(blocked);
        self.items_sorted.set_blocked(blocked);
    }

    /// Disconnect every slot from every signal.
    pub fn disconnect_all(&self) {
        self.state_changed.disconnect_all();
        self.filtered_changed.disconnect_all();
        self.item_added.disconnect_all();
        self.item_removed.disconnect_all();
        self.items_sorted.disconnect_all();
    }
}
