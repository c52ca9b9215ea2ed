//! The selection tree: an arena of carousel items organised into groups.
//!
//! `SelectionTree` owns every item. Groups hold the ordered list of their
//! children's [`ItemId`]s and each item remembers its owning group, which is
//! only ever used to notify the group about state changes.
//!
//! # Cascades
//!
//! All cascades run synchronously inside the call that triggered them:
//!
//! - **Upward**: a child becoming `Selected` forces every sibling to
//!   `NotSelected` and then selects the owning group, recursively.
//! - **Downward**: a group becoming `Collapsed` or `NotSelected` collapses all
//!   of its children; a group becoming `Selected` wakes its collapsed children
//!   to `NotSelected` and leaves any existing selection alone.
//!
//! Cascades iterate over a snapshot of the child list.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use horizon_carousel::{CarouselItem, ItemState, SelectionTree};
//!
//! struct Title(&'static str);
//!
//! impl CarouselItem<()> for Title {
//!     type Drawable = &'static str;
//!
//!     fn compare(&self, other: &Self, _criteria: &()) -> Ordering {
//!         self.0.cmp(other.0)
//!     }
//!
//!     fn create_drawable(&self) -> Option<&'static str> {
//!         Some(self.0)
//!     }
//! }
//!
//! let mut tree = SelectionTree::<Title, ()>::new();
//! let root = tree.root();
//! let b = tree.create_item(Title("b"));
//! let a = tree.create_item(Title("a"));
//! tree.add_item(root, b)?;
//! tree.add_item(root, a)?;
//!
//! tree.filter(root, ())?;
//! assert_eq!(tree.items(root)?, &[a, b]);
//!
//! tree.select(b)?;
//! assert_eq!(tree.state(a)?, ItemState::NotSelected);
//! # Ok::<(), horizon_carousel::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_carousel_core::PerfSpan;
use horizon_carousel_core::logging::{span_names, targets};
use slotmap::SlotMap;

use crate::config::{CarouselConfig, SelectionPolicy};
use crate::criteria::{CarouselItem, Comparator, SortKey};
use crate::error::{Error, Result};
use crate::item::{GroupData, ItemId, Node};
use crate::sequence::ChildId;
use crate::signals::{CarouselSignals, StateChange};
use crate::state::ItemState;

/// Arena owning a tree of carousel items.
///
/// `T` is the payload carried by items, `C` the filter criteria type.
pub struct SelectionTree<T, C> {
    nodes: SlotMap<ItemId, Node<T, C>>,
    root: ItemId,
    config: CarouselConfig,
    signals: CarouselSignals,
}

impl<T: CarouselItem<C>, C> Default for SelectionTree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CarouselItem<C>, C> SelectionTree<T, C> {
    /// Creates a tree holding only an empty root group.
    pub fn new() -> Self {
        Self::with_config(CarouselConfig::default())
    }

    /// Creates a tree with custom configuration.
    pub fn with_config(config: CarouselConfig) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::group(None, config.default_policy, config.root_state));
        Self {
            nodes,
            root,
            config,
            signals: CarouselSignals::new(),
        }
    }

    /// The root group. It has no payload and cannot be detached.
    pub fn root(&self) -> ItemId {
        self.root
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Signals for observing the tree.
    pub fn signals(&self) -> &CarouselSignals {
        &self.signals
    }

    /// Number of items in the arena, attached or not, including the root.
    pub fn item_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the id refers to a live item.
    pub fn contains(&self, id: ItemId) -> bool {
        self.nodes.contains_key(id)
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Creates a detached leaf item in the `Collapsed` state.
    pub fn create_item(&mut self, content: T) -> ItemId {
        self.nodes.insert(Node::leaf(content))
    }

    /// Creates a detached group using the configured default policy.
    ///
    /// A group without payload is a pure grouping item: it is never filtered
    /// by its own predicate and has no drawable representation.
    pub fn create_group(&mut self, content: Option<T>) -> ItemId {
        self.create_group_with_policy(content, self.config.default_policy)
    }

    /// Creates a detached group with an explicit selection policy.
    pub fn create_group_with_policy(&mut self, content: Option<T>, policy: SelectionPolicy) -> ItemId {
        self.nodes
            .insert(Node::group(content, policy, ItemState::Collapsed))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    fn node(&self, id: ItemId) -> Result<&Node<T, C>> {
        self.nodes.get(id).ok_or(Error::UnknownItem(id))
    }

    fn group_data(&self, id: ItemId) -> Result<&GroupData<C>> {
        self.node(id)?.group.as_ref().ok_or(Error::NotAGroup(id))
    }

    fn group_data_mut(&mut self, id: ItemId) -> Result<&mut GroupData<C>> {
        self.nodes
            .get_mut(id)
            .ok_or(Error::UnknownItem(id))?
            .group
            .as_mut()
            .ok_or(Error::NotAGroup(id))
    }

    /// Whether the item is a group.
    pub fn is_group(&self, id: ItemId) -> Result<bool> {
        Ok(self.node(id)?.group.is_some())
    }

    /// Current selection state.
    pub fn state(&self, id: ItemId) -> Result<ItemState> {
        Ok(self.node(id)?.state())
    }

    /// Whether the last filter pass excluded the item.
    pub fn is_filtered(&self, id: ItemId) -> Result<bool> {
        Ok(self.node(id)?.is_filtered())
    }

    /// Neither collapsed nor filtered.
    pub fn is_visible(&self, id: ItemId) -> Result<bool> {
        Ok(self.node(id)?.is_visible())
    }

    /// Sequence number assigned when the item was last added to a group.
    pub fn child_id(&self, id: ItemId) -> Result<Option<ChildId>> {
        Ok(self.node(id)?.child_id)
    }

    /// Owning group, `None` for the root and for detached items.
    pub fn parent(&self, id: ItemId) -> Result<Option<ItemId>> {
        Ok(self.node(id)?.parent)
    }

    /// Payload of the item, `None` for pure grouping items.
    pub fn content(&self, id: ItemId) -> Result<Option<&T>> {
        Ok(self.node(id)?.content.as_ref())
    }

    /// Children of a group in their current order.
    ///
    /// Before the group's first filter pass this is insertion order; after it,
    /// the order of the last applied criteria.
    pub fn items(&self, group: ItemId) -> Result<&[ItemId]> {
        Ok(self.group_data(group)?.items.as_slice())
    }

    /// Children of a group that are currently visible.
    pub fn visible_items(&self, group: ItemId) -> Result<Vec<ItemId>> {
        Ok(self
            .items(group)?
            .iter()
            .copied()
            .filter(|&child| self.nodes.get(child).is_some_and(Node::is_visible))
            .collect())
    }

    /// The selected child of a group, if any.
    pub fn selected_child(&self, group: ItemId) -> Result<Option<ItemId>> {
        Ok(self.find_selected(self.items(group)?))
    }

    /// Chain of selected items below `from`, outermost first.
    pub fn selected_path(&self, from: ItemId) -> Result<Vec<ItemId>> {
        let mut path = Vec::new();
        let mut current = self.node(from)?;
        while let Some(next) = self.find_selected(current.children()) {
            path.push(next);
            current = self.node(next)?;
        }
        Ok(path)
    }

    /// Criteria of the group's last filter pass.
    pub fn last_criteria(&self, group: ItemId) -> Result<Option<&C>> {
        Ok(self.group_data(group)?.last_criteria().map(Arc::as_ref))
    }

    /// Selection policy of a group.
    pub fn policy(&self, group: ItemId) -> Result<SelectionPolicy> {
        Ok(self.group_data(group)?.policy)
    }

    /// Change the selection policy of a group.
    ///
    /// Switching a selected group to [`SelectionPolicy::Eager`] selects a
    /// child right away if none is selected.
    pub fn set_policy(&mut self, group: ItemId, policy: SelectionPolicy) -> Result<()> {
        self.group_data_mut(group)?.policy = policy;
        self.ensure_selection(group, None);
        Ok(())
    }

    /// Renderable peer for the item, `None` for pure grouping items.
    pub fn create_drawable_representation(&self, id: ItemId) -> Result<Option<T::Drawable>> {
        Ok(self
            .node(id)?
            .content
            .as_ref()
            .and_then(<T as CarouselItem<C>>::create_drawable))
    }

    fn find_selected(&self, items: &[ItemId]) -> Option<ItemId> {
        items
            .iter()
            .copied()
            .find(|&child| self.node_state(child).is_selected())
    }

    fn node_state(&self, id: ItemId) -> ItemState {
        self.nodes.get(id).map_or(ItemState::Collapsed, Node::state)
    }

    fn sort_key(&self, id: ItemId) -> SortKey<'_, T> {
        self.nodes.get(id).map_or(
            SortKey {
                content: None,
                child_id: None,
            },
            Node::sort_key,
        )
    }

    /// Whether `candidate` is `id` or one of its ancestors.
    fn is_self_or_ancestor(&self, candidate: ItemId, id: ItemId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == candidate {
                return true;
            }
            current = self.nodes.get(node_id).and_then(|node| node.parent);
        }
        false
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Adds a detached item to a group and returns the index it landed at.
    ///
    /// The item receives the group's next [`ChildId`]. If the group has been
    /// filtered before, the item is filtered with the same criteria and
    /// inserted at its sorted position; otherwise it is appended. The item is
    /// a member of the group before the filter runs, so any `filtered_changed`
    /// it raises is reported for an item already listed in [`items`](Self::items).
    ///
    /// After insertion the item's state is brought in line with the group: an
    /// item arriving `Selected` selects through the group as if it had just
    /// been clicked, a collapsed item entering a selected group is woken, and
    /// an expanded item entering an unselected group is collapsed.
    ///
    /// # Errors
    ///
    /// Fails if either id is unknown, `group` is not a group, the item already
    /// has an owner, the item is the root, or the item is `group` itself or
    /// one of its ancestors.
    pub fn add_item(&mut self, group: ItemId, item: ItemId) -> Result<usize> {
        self.group_data(group)?;
        let node = self.node(item)?;
        if item == self.root {
            return Err(Error::RootPinned);
        }
        if let Some(parent) = node.parent {
            return Err(Error::AlreadyAttached { item, parent });
        }
        if self.is_self_or_ancestor(item, group) {
            return Err(Error::WouldCycle { group, item });
        }

        let group_data = self.group_data_mut(group)?;
        let child_id = group_data.sequence.next_id();
        let criteria = group_data.last_criteria().cloned();
        if let Some(node) = self.nodes.get_mut(item) {
            node.child_id = Some(child_id);
        }

        // The sort key does not depend on the filtered flag, so the slot can
        // be found before the predicate runs.
        let group_data = self.group_data(group)?;
        let index = match &group_data.comparator {
            Some(comparator) => {
                let key = self.sort_key(item);
                match group_data
                    .items
                    .binary_search_by(|&sibling| comparator.compare(self.sort_key(sibling), key))
                {
                    Ok(index) | Err(index) => index,
                }
            }
            None => group_data.items.len(),
        };
        self.group_data_mut(group)?.items.insert(index, item);
        if let Some(node) = self.nodes.get_mut(item) {
            node.parent = Some(group);
        }

        if let Some(criteria) = &criteria {
            self.filter_node(item, criteria);
        }

        tracing::debug!(target: targets::TREE, ?group, ?item, %child_id, index, "item added");
        self.signals.item_added.emit((group, item, index));

        let group_state = self.node_state(group);
        match self.node_state(item) {
            ItemState::Selected => self.child_state_changed(group, item, ItemState::Selected),
            ItemState::Collapsed if group_state.is_selected() => {
                self.apply_state(item, ItemState::NotSelected);
            }
            ItemState::NotSelected if !group_state.is_selected() => {
                self.apply_state(item, ItemState::Collapsed);
            }
            _ => {}
        }
        self.ensure_selection(group, Some(index));

        Ok(index)
    }

    /// Removes an item from a group and collapses it.
    ///
    /// Removal completes before the item is collapsed, so the collapse is
    /// reported with no owning group. The item stays in the arena, detached,
    /// and can be re-added or [discarded](Self::discard).
    ///
    /// Removing an item that is not a child of `group` is a no-op and
    /// returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Fails if `group` is unknown or not a group.
    pub fn remove_item(&mut self, group: ItemId, item: ItemId) -> Result<bool> {
        let group_data = self.group_data_mut(group)?;
        let Some(index) = group_data.position(item) else {
            tracing::trace!(target: targets::TREE, ?group, ?item, "remove_item ignored: not a member");
            return Ok(false);
        };
        group_data.items.remove(index);
        if group_data.last_selected == Some(item) {
            group_data.last_selected = None;
        }

        let was_selected = self.node_state(item).is_selected();
        if let Some(node) = self.nodes.get_mut(item) {
            node.parent = None;
        }

        tracing::debug!(target: targets::TREE, ?group, ?item, index, "item removed");
        self.signals.item_removed.emit((group, item, index));

        self.apply_state(item, ItemState::Collapsed);
        if was_selected {
            self.ensure_selection(group, Some(index));
        }
        Ok(true)
    }

    /// Drops a detached item and everything below it, returning its payload.
    ///
    /// # Errors
    ///
    /// Fails if the item is unknown, still attached, or the root.
    pub fn discard(&mut self, item: ItemId) -> Result<Option<T>> {
        if item == self.root {
            return Err(Error::RootPinned);
        }
        if let Some(parent) = self.node(item)?.parent {
            return Err(Error::StillAttached { item, parent });
        }

        let mut pending = vec![item];
        let mut content = None;
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.remove(id) {
                if let Some(group) = &node.group {
                    pending.extend_from_slice(&group.items);
                }
                if id == item {
                    content = node.content;
                }
            }
        }
        tracing::debug!(target: targets::TREE, ?item, "item discarded");
        Ok(content)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Sets an item's state and runs the resulting cascades.
    ///
    /// Setting the current state again does nothing.
    ///
    /// # Errors
    ///
    /// Fails if the item is unknown.
    pub fn set_state(&mut self, item: ItemId, state: ItemState) -> Result<()> {
        self.node(item)?;
        let _perf = PerfSpan::new("set_state");
        self.apply_state(item, state);
        Ok(())
    }

    /// Shorthand for `set_state(item, ItemState::Selected)`.
    pub fn select(&mut self, item: ItemId) -> Result<()> {
        self.set_state(item, ItemState::Selected)
    }

    fn apply_state(&mut self, id: ItemId, new: ItemState) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let Some(old) = node.state.replace(new) else {
            return;
        };
        let parent = node.parent;
        let is_group = node.group.is_some();

        tracing::trace!(target: targets::TREE, ?id, %old, %new, "state changed");
        self.signals.state_changed.emit(StateChange {
            item: id,
            group: parent,
            old,
            new,
        });

        if is_group {
            self.group_state_changed(id, new);
        }
        if let Some(parent) = parent {
            self.child_state_changed(parent, id, new);
        }
    }

    /// Reaction of a group to one of its children changing state.
    fn child_state_changed(&mut self, group: ItemId, item: ItemId, new: ItemState) {
        if !new.is_selected() {
            return;
        }
        let siblings = match self.group_data_mut(group) {
            Ok(data) => {
                data.last_selected = Some(item);
                data.items.clone()
            }
            Err(_) => return,
        };
        let _span = tracing::trace_span!(target: targets::TREE, span_names::CASCADE, ?group, ?item).entered();
        for sibling in siblings.into_iter().filter(|&sibling| sibling != item) {
            self.apply_state(sibling, ItemState::NotSelected);
        }
        self.apply_state(group, ItemState::Selected);
    }

    /// Reaction of a group to its own state changing.
    fn group_state_changed(&mut self, group: ItemId, new: ItemState) {
        let children = match self.group_data(group) {
            Ok(data) => data.items.clone(),
            Err(_) => return,
        };
        match new {
            ItemState::Collapsed | ItemState::NotSelected => {
                for child in children {
                    self.apply_state(child, ItemState::Collapsed);
                }
            }
            ItemState::Selected => {
                for child in children {
                    if self.node_state(child).is_collapsed() {
                        self.apply_state(child, ItemState::NotSelected);
                    }
                }
                self.ensure_selection(group, None);
            }
        }
    }

    /// Give a selected eager group a selected child if it lacks one.
    ///
    /// `near` is the index to search from; without it the position of the
    /// last selected child is used.
    fn ensure_selection(&mut self, group: ItemId, near: Option<usize>) {
        let Some(node) = self.nodes.get(group) else {
            return;
        };
        let Some(data) = node.group.as_ref() else {
            return;
        };
        if data.policy != SelectionPolicy::Eager
            || !node.state().is_selected()
            || self.find_selected(&data.items).is_some()
        {
            return;
        }

        let start = near
            .or_else(|| data.last_selected.and_then(|last| data.position(last)))
            .unwrap_or(0);
        let visible = |id: ItemId| self.nodes.get(id).is_some_and(Node::is_visible);
        let candidate = data
            .items
            .iter()
            .copied()
            .skip(start)
            .find(|&id| visible(id))
            .or_else(|| {
                data.items
                    .iter()
                    .copied()
                    .take(start)
                    .rev()
                    .find(|&id| visible(id))
            });

        if let Some(child) = candidate {
            tracing::debug!(target: targets::TREE, ?group, ?child, "eager group selecting child");
            self.apply_state(child, ItemState::Selected);
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Applies criteria to an item and, for groups, to the whole subtree.
    ///
    /// Each item's filtered flag is updated before its children are visited.
    /// Every group below (and including) `item` is then re-sorted with a
    /// stable sort whose comparator falls back to [`ChildId`], and remembers
    /// the criteria for later insertions.
    ///
    /// # Errors
    ///
    /// Fails if the item is unknown.
    pub fn filter(&mut self, item: ItemId, criteria: C) -> Result<()> {
        self.filter_shared(item, Arc::new(criteria))
    }

    /// Like [`filter`](Self::filter), for criteria that are already shared.
    pub fn filter_shared(&mut self, item: ItemId, criteria: Arc<C>) -> Result<()> {
        self.node(item)?;
        let _span = tracing::debug_span!(target: targets::FILTER, span_names::FILTER, ?item).entered();
        let _perf = PerfSpan::new("filter");
        self.filter_node(item, &criteria);
        Ok(())
    }

    fn filter_node(&mut self, id: ItemId, criteria: &Arc<C>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let filtered = node
            .content
            .as_ref()
            .is_some_and(|content| !content.matches(criteria));
        self.set_filtered(id, filtered);

        let children = match self.group_data(id) {
            Ok(data) => data.items.clone(),
            Err(_) => return,
        };
        for &child in &children {
            self.filter_node(child, criteria);
        }

        let comparator = Comparator::new(Arc::clone(criteria));
        let mut sorted = children.clone();
        sorted.sort_by(|&a, &b| comparator.compare(self.sort_key(a), self.sort_key(b)));
        let reordered = sorted != children;
        if let Ok(data) = self.group_data_mut(id) {
            data.items = sorted;
            data.comparator = Some(comparator);
        }
        if reordered {
            tracing::trace!(target: targets::FILTER, ?id, "children reordered");
            self.signals.items_sorted.emit(id);
        }

        let has_content = self.nodes.get(id).is_some_and(|node| node.content.is_some());
        if self.config.filter_empty_groups
            && has_content
            && !children.is_empty()
            && children
                .iter()
                .all(|&child| self.nodes.get(child).is_some_and(Node::is_filtered))
        {
            self.set_filtered(id, true);
        }

        self.ensure_selection(id, None);
    }

    fn set_filtered(&mut self, id: ItemId, filtered: bool) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.filtered.set(filtered) {
            return;
        }
        let state = node.state();
        self.signals.filtered_changed.emit((id, filtered));

        if filtered && state.is_selected() && self.config.deselect_filtered {
            self.apply_state(id, ItemState::NotSelected);
        }
    }
}

impl<T, C> fmt::Debug for SelectionTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTree")
            .field("items", &self.nodes.len())
            .field("root", &self.root)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SelectionTree<String, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str);

    #[derive(Debug, Default)]
    struct Query {
        contains: &'static str,
        descending: bool,
    }

    impl CarouselItem<Query> for Tag {
        type Drawable = String;

        fn matches(&self, criteria: &Query) -> bool {
            self.0.contains(criteria.contains)
        }

        fn compare(&self, other: &Self, criteria: &Query) -> Ordering {
            let ordering = self.0.cmp(other.0);
            if criteria.descending {
                ordering.reverse()
            } else {
                ordering
            }
        }

        fn create_drawable(&self) -> Option<String> {
            Some(self.0.to_uppercase())
        }
    }

    fn tree() -> SelectionTree<Tag, Query> {
        SelectionTree::new()
    }

    #[test]
    fn test_new_tree_has_selected_root() {
        let tree = tree();
        assert_eq!(tree.item_count(), 1);
        assert_eq!(tree.state(tree.root()).unwrap(), ItemState::Selected);
        assert!(tree.is_group(tree.root()).unwrap());
        assert!(tree.items(tree.root()).unwrap().is_empty());
    }

    #[test]
    fn test_created_items_start_collapsed_and_detached() {
        let mut tree = tree();
        let item = tree.create_item(Tag("a"));
        assert_eq!(tree.state(item).unwrap(), ItemState::Collapsed);
        assert_eq!(tree.parent(item).unwrap(), None);
        assert_eq!(tree.child_id(item).unwrap(), None);
    }

    #[test]
    fn test_add_assigns_increasing_child_ids() {
        let mut tree = tree();
        let root = tree.root();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                let item = tree.create_item(Tag(name));
                tree.add_item(root, item).unwrap();
                tree.child_id(item).unwrap().unwrap().get()
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_wakes_items_in_selected_group() {
        let mut tree = tree();
        let root = tree.root();
        let item = tree.create_item(Tag("a"));
        tree.add_item(root, item).unwrap();
        assert_eq!(tree.state(item).unwrap(), ItemState::NotSelected);
        assert_eq!(tree.parent(item).unwrap(), Some(root));
    }

    #[test]
    fn test_add_rejects_attached_item() {
        let mut tree = tree();
        let root = tree.root();
        let group = tree.create_group(None);
        let item = tree.create_item(Tag("a"));
        tree.add_item(root, item).unwrap();
        assert_eq!(
            tree.add_item(group, item),
            Err(Error::AlreadyAttached { item, parent: root })
        );
    }

    #[test]
    fn test_add_rejects_cycles_and_leaves() {
        let mut tree = tree();
        let outer = tree.create_group(None);
        let inner = tree.create_group(None);
        tree.add_item(outer, inner).unwrap();

        assert_eq!(
            tree.add_item(inner, outer),
            Err(Error::WouldCycle { group: inner, item: outer })
        );
        assert_eq!(
            tree.add_item(outer, outer),
            Err(Error::WouldCycle { group: outer, item: outer })
        );

        let leaf = tree.create_item(Tag("leaf"));
        let other = tree.create_item(Tag("other"));
        assert_eq!(tree.add_item(leaf, other), Err(Error::NotAGroup(leaf)));
        assert_eq!(tree.add_item(outer, tree.root()), Err(Error::RootPinned));
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut tree = tree();
        let root = tree.root();
        let stray = tree.create_item(Tag("stray"));
        assert_eq!(tree.remove_item(root, stray), Ok(false));

        let leaf = tree.create_item(Tag("leaf"));
        assert_eq!(tree.remove_item(leaf, stray), Err(Error::NotAGroup(leaf)));
    }

    #[test]
    fn test_removed_item_is_collapsed_and_detached() {
        let mut tree = tree();
        let root = tree.root();
        let item = tree.create_item(Tag("a"));
        tree.add_item(root, item).unwrap();
        tree.select(item).unwrap();

        assert_eq!(tree.remove_item(root, item), Ok(true));
        assert_eq!(tree.state(item).unwrap(), ItemState::Collapsed);
        assert_eq!(tree.parent(item).unwrap(), None);
        assert!(tree.items(root).unwrap().is_empty());
    }

    #[test]
    fn test_discard_drops_subtree() {
        let mut tree = tree();
        let root = tree.root();
        let group = tree.create_group(Some(Tag("set")));
        let child = tree.create_item(Tag("child"));
        tree.add_item(group, child).unwrap();
        tree.add_item(root, group).unwrap();

        assert_eq!(
            tree.discard(group),
            Err(Error::StillAttached { item: group, parent: root })
        );
        tree.remove_item(root, group).unwrap();
        assert_eq!(tree.discard(group), Ok(Some(Tag("set"))));
        assert!(!tree.contains(group));
        assert!(!tree.contains(child));
        assert_eq!(tree.state(child), Err(Error::UnknownItem(child)));
        assert_eq!(tree.discard(root), Err(Error::RootPinned));
    }

    #[test]
    fn test_filter_marks_and_sorts() {
        let mut tree = tree();
        let root = tree.root();
        let names = ["cherry", "apple", "banana"];
        let ids: Vec<_> = names
            .into_iter()
            .map(|name| {
                let item = tree.create_item(Tag(name));
                tree.add_item(root, item).unwrap();
                item
            })
            .collect();

        tree.filter(root, Query { contains: "an", descending: false }).unwrap();
        assert_eq!(tree.items(root).unwrap(), &[ids[1], ids[2], ids[0]]);
        assert!(tree.is_filtered(ids[0]).unwrap());
        assert!(tree.is_filtered(ids[1]).unwrap());
        assert!(!tree.is_filtered(ids[2]).unwrap());
        assert_eq!(tree.visible_items(root).unwrap(), vec![ids[2]]);
        assert_eq!(tree.last_criteria(root).unwrap().map(|q| q.contains), Some("an"));

        tree.filter(root, Query { contains: "", descending: true }).unwrap();
        assert_eq!(tree.items(root).unwrap(), &[ids[0], ids[2], ids[1]]);
        assert_eq!(tree.visible_items(root).unwrap().len(), 3);
    }

    #[test]
    fn test_add_after_filter_inserts_sorted_and_filters() {
        let mut tree = tree();
        let root = tree.root();
        let a = tree.create_item(Tag("a"));
        let c = tree.create_item(Tag("c"));
        tree.add_item(root, c).unwrap();
        tree.add_item(root, a).unwrap();
        tree.filter(root, Query::default()).unwrap();

        let b = tree.create_item(Tag("b"));
        assert_eq!(tree.add_item(root, b), Ok(1));
        assert_eq!(tree.items(root).unwrap(), &[a, b, c]);

        tree.filter(root, Query { contains: "c", descending: false }).unwrap();
        let bb = tree.create_item(Tag("bb"));
        assert_eq!(tree.add_item(root, bb), Ok(2));
        assert!(tree.is_filtered(bb).unwrap());
    }

    #[test]
    fn test_filter_deselects_hidden_selection() {
        let mut tree = tree();
        let root = tree.root();
        let a = tree.create_item(Tag("a"));
        tree.add_item(root, a).unwrap();
        tree.select(a).unwrap();

        tree.filter(root, Query { contains: "zzz", descending: false }).unwrap();
        assert_eq!(tree.state(a).unwrap(), ItemState::NotSelected);
    }

    #[test]
    fn test_filter_keeps_hidden_selection_when_disabled() {
        let mut tree: SelectionTree<Tag, Query> =
            SelectionTree::with_config(CarouselConfig::new().deselect_filtered(false));
        let root = tree.root();
        let a = tree.create_item(Tag("a"));
        tree.add_item(root, a).unwrap();
        tree.select(a).unwrap();

        tree.filter(root, Query { contains: "zzz", descending: false }).unwrap();
        assert!(tree.is_filtered(a).unwrap());
        assert_eq!(tree.state(a).unwrap(), ItemState::Selected);
    }

    #[test]
    fn test_filter_empty_groups() {
        let mut tree: SelectionTree<Tag, Query> =
            SelectionTree::with_config(CarouselConfig::new().filter_empty_groups(true));
        let root = tree.root();
        let set = tree.create_group(Some(Tag("set")));
        let easy = tree.create_item(Tag("easy"));
        let hard = tree.create_item(Tag("hard"));
        tree.add_item(set, easy).unwrap();
        tree.add_item(set, hard).unwrap();
        tree.add_item(root, set).unwrap();

        tree.filter(root, Query { contains: "s", descending: false }).unwrap();
        assert!(!tree.is_filtered(set).unwrap());
        assert!(tree.is_filtered(hard).unwrap());

        // "set" matches on its own, but none of its children do.
        tree.filter(root, Query { contains: "t", descending: false }).unwrap();
        assert!(tree.is_filtered(easy).unwrap());
        assert!(tree.is_filtered(hard).unwrap());
        assert!(tree.is_filtered(set).unwrap());

        tree.filter(root, Query { contains: "", descending: false }).unwrap();
        assert!(!tree.is_filtered(set).unwrap());
    }

    #[test]
    fn test_drawable_representation() {
        let mut tree = tree();
        let item = tree.create_item(Tag("song"));
        let group = tree.create_group(None);
        assert_eq!(
            tree.create_drawable_representation(item).unwrap(),
            Some("SONG".to_string())
        );
        assert_eq!(tree.create_drawable_representation(group).unwrap(), None);
        assert_eq!(tree.create_drawable_representation(tree.root()).unwrap(), None);
    }

    #[test]
    fn test_selected_path_follows_nested_selection() {
        let mut tree = tree();
        let root = tree.root();
        let set = tree.create_group(Some(Tag("set")));
        let diff = tree.create_item(Tag("diff"));
        tree.add_item(set, diff).unwrap();
        tree.add_item(root, set).unwrap();

        tree.select(diff).unwrap();
        assert_eq!(tree.selected_path(root).unwrap(), vec![set, diff]);
        assert_eq!(tree.selected_child(set).unwrap(), Some(diff));
    }
}
