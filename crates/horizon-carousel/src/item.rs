//! Nodes stored in a [`SelectionTree`](crate::SelectionTree).

use std::sync::Arc;

use horizon_carousel_core::Property;
use slotmap::new_key_type;

use crate::config::SelectionPolicy;
use crate::criteria::{Comparator, SortKey};
use crate::sequence::{ChildId, ChildIdSequence};
use crate::state::ItemState;

new_key_type! {
    /// Handle to an item (or group) owned by a [`SelectionTree`](crate::SelectionTree).
    ///
    /// Handles stay valid until the item is discarded. Using a handle after
    /// that yields [`Error::UnknownItem`](crate::Error::UnknownItem).
    pub struct ItemId;
}

/// Group-only bookkeeping.
pub(crate) struct GroupData<C> {
    /// Children in sort order.
    pub(crate) items: Vec<ItemId>,
    pub(crate) sequence: ChildIdSequence,
    /// Comparator bound to the last applied criteria. `None` until the first
    /// filter pass; until then children are kept in insertion order.
    pub(crate) comparator: Option<Comparator<C>>,
    pub(crate) policy: SelectionPolicy,
    /// Most recently selected child, kept as a hint for eager reselection.
    pub(crate) last_selected: Option<ItemId>,
}

impl<C> GroupData<C> {
    pub(crate) fn new(policy: SelectionPolicy) -> Self {
        Self {
            items: Vec::new(),
            sequence: ChildIdSequence::new(),
            comparator: None,
            policy,
            last_selected: None,
        }
    }

    pub(crate) fn last_criteria(&self) -> Option<&Arc<C>> {
        self.comparator.as_ref().map(Comparator::criteria)
    }

    pub(crate) fn position(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|&child| child == item)
    }
}

pub(crate) struct Node<T, C> {
    pub(crate) content: Option<T>,
    pub(crate) state: Property<ItemState>,
    pub(crate) filtered: Property<bool>,
    pub(crate) child_id: Option<ChildId>,
    /// Owning group. Used for upward notification only.
    pub(crate) parent: Option<ItemId>,
    pub(crate) group: Option<GroupData<C>>,
}

impl<T, C> Node<T, C> {
    pub(crate) fn leaf(content: T) -> Self {
        Self::with_parts(Some(content), None, ItemState::Collapsed)
    }

    pub(crate) fn group(content: Option<T>, policy: SelectionPolicy, state: ItemState) -> Self {
        Self::with_parts(content, Some(GroupData::new(policy)), state)
    }

    fn with_parts(content: Option<T>, group: Option<GroupData<C>>, state: ItemState) -> Self {
        Self {
            content,
            state: Property::new(state),
            filtered: Property::new(false),
            child_id: None,
            parent: None,
            group,
        }
    }

    pub(crate) fn state(&self) -> ItemState {
        self.state.get()
    }

    pub(crate) fn is_filtered(&self) -> bool {
        self.filtered.get()
    }

    /// Not collapsed and not filtered.
    pub(crate) fn is_visible(&self) -> bool {
        !self.state().is_collapsed() && !self.is_filtered()
    }

    pub(crate) fn children(&self) -> &[ItemId] {
        self.group.as_ref().map_or(&[], |group| group.items.as_slice())
    }

    pub(crate) fn sort_key(&self) -> SortKey<'_, T> {
        SortKey {
            content: self.content.as_ref(),
            child_id: self.child_id,
        }
    }
}
