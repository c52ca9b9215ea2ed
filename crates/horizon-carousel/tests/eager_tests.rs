//! Tests for groups with the eager selection policy.

use std::cmp::Ordering;

use horizon_carousel::{
    CarouselConfig, CarouselItem, ItemId, ItemState, SelectionPolicy, SelectionTree,
};

#[derive(Debug)]
struct Track(&'static str);

/// Hides one title, sorts the rest by name.
#[derive(Debug, Default)]
struct Hide(Option<&'static str>);

impl CarouselItem<Hide> for Track {
    type Drawable = ();

    fn matches(&self, criteria: &Hide) -> bool {
        criteria.0 != Some(self.0)
    }

    fn compare(&self, other: &Self, _criteria: &Hide) -> Ordering {
        self.0.cmp(other.0)
    }

    fn create_drawable(&self) -> Option<()> {
        None
    }
}

type Tree = SelectionTree<Track, Hide>;

fn eager_tree() -> Tree {
    Tree::with_config(CarouselConfig::new().default_policy(SelectionPolicy::Eager))
}

fn add(tree: &mut Tree, group: ItemId, name: &'static str) -> ItemId {
    let item = tree.create_item(Track(name));
    tree.add_item(group, item).unwrap();
    item
}

#[test]
fn test_first_item_in_selected_group_is_selected() {
    let mut tree = eager_tree();
    let root = tree.root();
    let alpha = add(&mut tree, root, "alpha");
    let beta = add(&mut tree, root, "beta");

    assert_eq!(tree.state(alpha).unwrap(), ItemState::Selected);
    assert_eq!(tree.state(beta).unwrap(), ItemState::NotSelected);
}

#[test]
fn test_filter_moves_selection_to_nearest_visible() {
    let mut tree = eager_tree();
    let root = tree.root();
    let alpha = add(&mut tree, root, "alpha");
    let beta = add(&mut tree, root, "beta");
    let gamma = add(&mut tree, root, "gamma");
    tree.select(beta).unwrap();

    tree.filter(root, Hide(Some("beta"))).unwrap();
    assert_eq!(tree.state(beta).unwrap(), ItemState::NotSelected);
    assert_eq!(tree.selected_child(root).unwrap(), Some(gamma));

    tree.filter(root, Hide(Some("gamma"))).unwrap();
    // Nothing visible after gamma, so the search walks back.
    assert_eq!(tree.selected_child(root).unwrap(), Some(beta));
    assert_eq!(tree.state(alpha).unwrap(), ItemState::NotSelected);
}

#[test]
fn test_removal_selects_neighbour() {
    let mut tree = eager_tree();
    let root = tree.root();
    let alpha = add(&mut tree, root, "alpha");
    let beta = add(&mut tree, root, "beta");
    let gamma = add(&mut tree, root, "gamma");

    tree.select(beta).unwrap();
    tree.remove_item(root, beta).unwrap();
    assert_eq!(tree.selected_child(root).unwrap(), Some(gamma));

    tree.remove_item(root, gamma).unwrap();
    assert_eq!(tree.selected_child(root).unwrap(), Some(alpha));

    // Removing an unselected item leaves the selection where it is.
    let delta = add(&mut tree, root, "delta");
    tree.remove_item(root, delta).unwrap();
    assert_eq!(tree.selected_child(root).unwrap(), Some(alpha));
}

#[test]
fn test_selecting_eager_group_selects_a_child() {
    let mut tree = Tree::new();
    let root = tree.root();
    let set = tree.create_group_with_policy(Some(Track("set")), SelectionPolicy::Eager);
    let easy = add(&mut tree, set, "easy");
    let hard = add(&mut tree, set, "hard");
    tree.add_item(root, set).unwrap();
    assert_eq!(tree.state(easy).unwrap(), ItemState::Collapsed);

    tree.select(set).unwrap();
    assert_eq!(tree.state(easy).unwrap(), ItemState::Selected);
    assert_eq!(tree.state(hard).unwrap(), ItemState::NotSelected);
    assert_eq!(tree.selected_path(root).unwrap(), vec![set, easy]);
}

#[test]
fn test_manual_groups_stay_empty_handed() {
    let mut tree = Tree::new();
    let root = tree.root();
    let set = tree.create_group(Some(Track("set")));
    add(&mut tree, set, "easy");
    tree.add_item(root, set).unwrap();

    tree.select(set).unwrap();
    assert_eq!(tree.policy(set).unwrap(), SelectionPolicy::Manual);
    assert_eq!(tree.selected_child(set).unwrap(), None);

    tree.set_policy(set, SelectionPolicy::Eager).unwrap();
    assert!(tree.selected_child(set).unwrap().is_some());
}

#[test]
fn test_everything_hidden_leaves_no_selection() {
    let mut tree = eager_tree();
    let root = tree.root();
    let only = add(&mut tree, root, "only");
    assert_eq!(tree.state(only).unwrap(), ItemState::Selected);

    tree.filter(root, Hide(Some("only"))).unwrap();
    assert_eq!(tree.selected_child(root).unwrap(), None);

    tree.filter(root, Hide::default()).unwrap();
    assert_eq!(tree.selected_child(root).unwrap(), Some(only));
}
