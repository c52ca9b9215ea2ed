//! Horizon Carousel - hierarchical selection and filtering for carousels.
//!
//! A [`SelectionTree`] owns items arranged in nested groups. Each item is
//! `Collapsed`, `NotSelected` or `Selected`, and may be hidden by the last
//! filter pass. Changing one item's state cascades through the tree:
//!
//! - selecting an item deselects its siblings and selects its group, all
//!   the way up to the root;
//! - deselecting or collapsing a group collapses everything inside it;
//! - selecting a group expands its collapsed children.
//!
//! Filtering applies caller-defined criteria to a whole subtree, marks the
//! items that do not match and stably re-sorts every group. Items added
//! later are slotted into place under the same criteria.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
//!
//! use horizon_carousel::prelude::*;
//!
//! #[derive(Debug)]
//! struct Beatmap {
//!     title: &'static str,
//!     stars: f32,
//! }
//!
//! #[derive(Debug)]
//! struct Search {
//!     max_stars: f32,
//! }
//!
//! impl CarouselItem<Search> for Beatmap {
//!     type Drawable = String;
//!
//!     fn matches(&self, criteria: &Search) -> bool {
//!         self.stars <= criteria.max_stars
//!     }
//!
//!     fn compare(&self, other: &Self, _criteria: &Search) -> Ordering {
//!         self.stars.total_cmp(&other.stars)
//!     }
//!
//!     fn create_drawable(&self) -> Option<String> {
//!         Some(format!("{} ({:.1}*)", self.title, self.stars))
//!     }
//! }
//!
//! let mut tree: SelectionTree<Beatmap, Search> = SelectionTree::new();
//! let root = tree.root();
//!
//! let changes = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&changes);
//! tree.signals().state_changed.connect(move |_| {
//!     counter.fetch_add(1, AtomicOrdering::Relaxed);
//! });
//!
//! let insane = tree.create_item(Beatmap { title: "Insane", stars: 5.2 });
//! let normal = tree.create_item(Beatmap { title: "Normal", stars: 2.1 });
//! tree.add_item(root, insane)?;
//! tree.add_item(root, normal)?;
//!
//! tree.filter(root, Search { max_stars: 4.0 })?;
//! assert_eq!(tree.items(root)?, &[normal, insane]);
//! assert_eq!(tree.visible_items(root)?, vec![normal]);
//!
//! tree.select(normal)?;
//! assert_eq!(tree.selected_child(root)?, Some(normal));
//! assert_eq!(
//!     tree.create_drawable_representation(normal)?.as_deref(),
//!     Some("Normal (2.1*)")
//! );
//! assert!(changes.load(AtomicOrdering::Relaxed) > 0);
//! # Ok::<(), horizon_carousel::Error>(())
//! ```

pub mod config;
pub mod criteria;
pub mod debug;
pub mod error;
mod item;
pub mod prelude;
pub mod sequence;
pub mod signals;
pub mod state;
pub mod tree;

pub use config::{CarouselConfig, SelectionPolicy};
pub use criteria::{CarouselItem, Comparator, SortKey};
pub use error::{Error, Result};
pub use item::ItemId;
pub use sequence::{ChildId, ChildIdSequence};
pub use signals::{CarouselSignals, StateChange};
pub use state::ItemState;
pub use tree::SelectionTree;

pub use horizon_carousel_core::{ConnectionGuard, ConnectionId, Property, Signal};

/// Logging targets and helpers shared with the core crate.
pub mod logging {
    pub use horizon_carousel_core::logging::*;
}
