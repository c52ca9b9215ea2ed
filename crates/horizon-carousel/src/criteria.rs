//! Filter criteria contract and the comparator derived from it.
//!
//! The criteria type `C` is opaque to the engine. Everything the engine needs
//! to know about it is expressed through [`CarouselItem`], which the payload
//! type of a tree implements.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::sequence::ChildId;

/// Payload carried by carousel items.
///
/// A tree holds one payload type; heterogeneous carousels use an enum and
/// dispatch in the methods below.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use horizon_carousel::CarouselItem;
///
/// struct Search { text: String }
///
/// struct Song { title: String }
///
/// impl CarouselItem<Search> for Song {
///     type Drawable = String;
///
///     fn matches(&self, criteria: &Search) -> bool {
///         self.title.contains(&criteria.text)
///     }
///
///     fn compare(&self, other: &Self, _criteria: &Search) -> Ordering {
///         self.title.cmp(&other.title)
///     }
///
///     fn create_drawable(&self) -> Option<String> {
///         Some(self.title.clone())
///     }
/// }
/// ```
pub trait CarouselItem<C: ?Sized> {
    /// Renderable peer produced by [`create_drawable`](Self::create_drawable).
    type Drawable;

    /// Visibility predicate. Returning `false` marks the item as filtered.
    fn matches(&self, _criteria: &C) -> bool {
        true
    }

    /// Order this item relative to a sibling under the active criteria.
    ///
    /// Must be a strict weak ordering; the engine does not verify it. Ties are
    /// broken by insertion order. Siblings without payload are never passed
    /// here; they sort ahead of every item that has one.
    fn compare(&self, _other: &Self, _criteria: &C) -> Ordering {
        Ordering::Equal
    }

    /// Create the renderable peer for this item, if it has one.
    fn create_drawable(&self) -> Option<Self::Drawable>;
}

/// What the comparator looks at for one sibling.
#[derive(Debug)]
pub struct SortKey<'a, T> {
    /// Payload, `None` for pure grouping items.
    pub content: Option<&'a T>,
    /// Insertion sequence number within the owning group.
    pub child_id: Option<ChildId>,
}

impl<T> Clone for SortKey<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortKey<'_, T> {}

/// Comparator bound to one set of criteria.
///
/// Items without payload rank before every item with one and keep their
/// insertion order among themselves. The child id is always folded in as the
/// final tie-break, which makes the order total for members of one group.
pub struct Comparator<C> {
    criteria: Arc<C>,
}

impl<C> Comparator<C> {
    /// Bind a comparator to the given criteria.
    pub fn new(criteria: Arc<C>) -> Self {
        Self { criteria }
    }

    /// The criteria this comparator was built from.
    pub fn criteria(&self) -> &Arc<C> {
        &self.criteria
    }

    /// Compare two siblings.
    pub fn compare<T: CarouselItem<C>>(&self, a: SortKey<'_, T>, b: SortKey<'_, T>) -> Ordering {
        let by_content = match (a.content, b.content) {
            (Some(x), Some(y)) => x.compare(y, &self.criteria),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_content.then_with(|| a.child_id.cmp(&b.child_id))
    }
}

impl<C> Clone for Comparator<C> {
    fn clone(&self) -> Self {
        Self {
            criteria: Arc::clone(&self.criteria),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Comparator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("criteria", &self.criteria)
            .finish()
    }
}
