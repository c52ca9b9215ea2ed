//! Text dumps of a selection tree for logs and test failures.
//!
//! ```
//! use horizon_carousel::{CarouselItem, SelectionTree};
//! use horizon_carousel::debug::{TreeDebug, TreeFormatOptions};
//!
//! #[derive(Debug)]
//! struct Track(&'static str);
//!
//! impl CarouselItem<()> for Track {
//!     type Drawable = ();
//!     fn create_drawable(&self) -> Option<()> { None }
//! }
//!
//! let mut tree = SelectionTree::<Track, ()>::new();
//! let track = tree.create_item(Track("intro"));
//! tree.add_item(tree.root(), track)?;
//!
//! let dump = TreeDebug::with_options(TreeFormatOptions::minimal()).format(&tree)?;
//! assert_eq!(dump, "(root)\n\u{2514}\u{2500}\u{2500} Track(\"intro\")\n");
//! # Ok::<(), horizon_carousel::Error>(())
//! ```

use std::fmt;

use crate::criteria::CarouselItem;
use crate::error::Result;
use crate::item::ItemId;
use crate::tree::SelectionTree;

/// Branch drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// What to include in a dump.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    /// Append each item's child id.
    pub show_child_ids: bool,
    /// Append each item's state.
    pub show_states: bool,
    /// Include filtered items, marked as such.
    pub show_filtered: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_child_ids: true,
            show_states: true,
            show_filtered: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Labels only, filtered items left out.
    pub fn minimal() -> Self {
        Self {
            show_child_ids: false,
            show_states: false,
            show_filtered: false,
            ..Default::default()
        }
    }
}

/// Renders a [`SelectionTree`] as an indented outline.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Dump the whole tree, starting at the root.
    pub fn format<T, C>(&self, tree: &SelectionTree<T, C>) -> Result<String>
    where
        T: CarouselItem<C> + fmt::Debug,
    {
        self.format_subtree(tree, tree.root())
    }

    /// Dump the subtree below `from`.
    pub fn format_subtree<T, C>(&self, tree: &SelectionTree<T, C>, from: ItemId) -> Result<String>
    where
        T: CarouselItem<C> + fmt::Debug,
    {
        let mut output = String::new();
        let mut open = Vec::new();
        self.format_into(tree, from, &mut open, &mut output)?;
        Ok(output)
    }

    /// `open` holds, per ancestor level, whether more siblings follow.
    fn format_into<T, C>(
        &self,
        tree: &SelectionTree<T, C>,
        id: ItemId,
        open: &mut Vec<bool>,
        output: &mut String,
    ) -> Result<()>
    where
        T: CarouselItem<C> + fmt::Debug,
    {
        output.push_str(&self.build_prefix(open));

        match tree.content(id)? {
            Some(content) => output.push_str(&format!("{content:?}")),
            None if id == tree.root() => output.push_str("(root)"),
            None => output.push_str("(group)"),
        }
        if self.options.show_child_ids {
            if let Some(child_id) = tree.child_id(id)? {
                output.push_str(&format!(" {child_id}"));
            }
        }
        if self.options.show_states {
            output.push_str(&format!(" [{}]", tree.state(id)?));
        }
        if tree.is_filtered(id)? {
            output.push_str(" (filtered)");
        }
        output.push('\n');

        if !tree.is_group(id)? || self.options.max_depth.is_some_and(|max| open.len() >= max) {
            return Ok(());
        }

        let children: Vec<ItemId> = if self.options.show_filtered {
            tree.items(id)?.to_vec()
        } else {
            tree.items(id)?
                .iter()
                .copied()
                .filter(|&child| tree.is_filtered(child).is_ok_and(|filtered| !filtered))
                .collect()
        };
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            open.push(i + 1 < count);
            self.format_into(tree, child, open, output)?;
            open.pop();
        }
        Ok(())
    }

    fn build_prefix(&self, open: &[bool]) -> String {
        let Some((&last_open, ancestors)) = open.split_last() else {
            return String::new();
        };
        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
        };

        let mut prefix = String::new();
        for &more in ancestors {
            prefix.push_str(if more { branch } else { " " });
            prefix.push_str("   ");
        }
        prefix.push_str(if last_open { tee } else { corner });
        prefix.push(' ');
        prefix
    }
}
