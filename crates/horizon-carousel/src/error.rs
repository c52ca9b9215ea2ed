//! Error types for the carousel tree.

use crate::item::ItemId;

/// Result type alias for carousel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by [`SelectionTree`](crate::SelectionTree).
///
/// Removing an item that is not a member of a group is *not* an error; see
/// [`SelectionTree::remove_item`](crate::SelectionTree::remove_item).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The id does not refer to a live item of this tree.
    #[error("Unknown item {0:?}")]
    UnknownItem(ItemId),

    /// A group operation was applied to a leaf item.
    #[error("Item {0:?} is not a group")]
    NotAGroup(ItemId),

    /// The item is already owned by a group.
    #[error("Item {item:?} is already attached to group {parent:?}")]
    AlreadyAttached { item: ItemId, parent: ItemId },

    /// Adding the item would make a group its own descendant.
    #[error("Adding {item:?} to {group:?} would create a cycle")]
    WouldCycle { group: ItemId, item: ItemId },

    /// Only detached items can be discarded.
    #[error("Item {item:?} is still attached to group {parent:?}")]
    StillAttached { item: ItemId, parent: ItemId },

    /// The root group cannot be attached to another group or discarded.
    #[error("The root group cannot be moved or discarded")]
    RootPinned,
}
