use kindling::{AvlTree, BinarySearchTree, BinaryTree, LookupError, Tree};
use test_case::test_case;

//         1
//       /   \
//      2     3
//     / \   / \
//    4   5 6   7
//           \
//            8
fn wire<T: Tree<Key = i32>>(mut tree: T) -> T {
    let mut root = tree.root_mut().unwrap();
    root.set_left(Some(2)).set_right(Some(3));
    root.left_mut().unwrap().set_left(Some(4)).set_right(Some(5));
    let mut three = root.into_right().unwrap();
    three.set_left(Some(6)).set_right(Some(7));
    three.into_left().unwrap().set_right(Some(8));
    tree
}

fn hand_built() -> BinaryTree<i32> {
    wire(BinaryTree::with_root(1))
}

fn hand_built_search_tree() -> BinarySearchTree<i32> {
    wire(BinarySearchTree::with_root(1))
}

#[test_case(4, 5 => 2 ; "siblings")]
#[test_case(4, 6 => 4 ; "cousins")]
#[test_case(3, 4 => 3 ; "uncle")]
#[test_case(2, 4 => 1 ; "parent")]
#[test_case(8, 5 => 5 ; "deepest")]
#[test_case(7, 7 => 0 ; "same node")]
fn distance(key1: i32, key2: i32) -> usize {
    let tree = hand_built();
    let root = tree.root().unwrap();
    tree.distance(root, &key1, &key2).unwrap()
}

#[test_case(4, 5 => (2, 2) ; "siblings")]
#[test_case(4, 6 => (1, 4) ; "cousins")]
#[test_case(3, 4 => (1, 3) ; "uncle")]
#[test_case(2, 4 => (2, 1) ; "parent")]
#[test_case(8, 5 => (1, 5) ; "deepest")]
fn search_tree_ancestor_and_distance(key1: i32, key2: i32) -> (i32, usize) {
    let tree = hand_built_search_tree();
    let root = tree.root().unwrap();
    let ancestor = *tree.lowest_common_ancestor(root, &key1, &key2).unwrap().key();
    (ancestor, tree.distance(root, &key1, &key2).unwrap())
}

#[test_case(4, 5 => 2 ; "siblings")]
#[test_case(4, 8 => 1 ; "across the root")]
#[test_case(6, 8 => 6 ; "ancestor of the other")]
#[test_case(7, 8 => 3 ; "within right subtree")]
fn lowest_common_ancestor(key1: i32, key2: i32) -> i32 {
    let tree = hand_built();
    let root = tree.root().unwrap();
    *tree.lowest_common_ancestor(root, &key1, &key2).unwrap().key()
}

#[test_case(1 => Some(0))]
#[test_case(2 => Some(1))]
#[test_case(3 => Some(1))]
#[test_case(4 => Some(2))]
#[test_case(7 => Some(2))]
#[test_case(8 => Some(3))]
#[test_case(9 => None ; "absent")]
fn level(key: i32) -> Option<usize> {
    let tree = hand_built();
    let root = tree.root().unwrap();
    tree.level(root, &key, 0)
}

#[test]
fn level_within_subtree() {
    let tree = hand_built();
    let three = tree.root().unwrap().right().unwrap();
    assert_eq!(tree.level(three, &8, 1), Some(3));
    assert_eq!(tree.level(three, &4, 1), None);
    assert_eq!(
        tree.distance(three, &4, &8),
        Err(LookupError::FirstKeyMissing),
    );
    assert_eq!(
        tree.lowest_common_ancestor(three, &8, &5),
        Err(LookupError::SecondKeyMissing),
    );
}

#[test]
fn hand_built_shape() {
    let tree = hand_built();
    assert_eq!(tree.size(), 8);
    assert_eq!(tree.height(), 4);
    assert!(!tree.is_full());
    assert_eq!(tree.last(), Some(&8));
    assert_eq!(tree.level_order(), [&1, &2, &3, &4, &5, &6, &7, &8]);
}

#[test]
#[should_panic(expected = "does not belong to this tree")]
fn foreign_node_ref() {
    let tree = hand_built();
    let other = hand_built();
    let _ = tree.level(other.root().unwrap(), &1, 0);
}

#[test_case(&[] => 0 ; "empty")]
#[test_case(&[5] => 1 ; "single")]
#[test_case(&[2, 4, 6, 8, 10, 12, 14, 16, 18, 20] => 4 ; "ascending")]
#[test_case(&[20, 18, 16, 14, 12, 10, 8, 6, 4, 2] => 4 ; "descending")]
fn avl_height(keys: &[i32]) -> usize {
    keys.iter().copied().collect::<AvlTree<_>>().height()
}

#[test_case(&[2, 4, 6, 8, 10, 12, 14, 16, 18, 20] => 10 ; "ascending")]
#[test_case(&[10, 5, 15] => 2 ; "balanced")]
fn search_tree_height(keys: &[i32]) -> usize {
    keys.iter().copied().collect::<BinarySearchTree<_>>().height()
}

#[test]
fn single_node() {
    let trees: (BinaryTree<_>, BinarySearchTree<_>, AvlTree<_>) = (
        BinaryTree::with_root(5),
        BinarySearchTree::with_root(5),
        AvlTree::with_root(5),
    );
    assert_eq!((trees.0.min(), trees.0.max()), (Some(&5), Some(&5)));
    assert_eq!((trees.1.min(), trees.1.max()), (Some(&5), Some(&5)));
    assert_eq!((trees.2.min(), trees.2.max()), (Some(&5), Some(&5)));
    assert_eq!(trees.2.height(), 1);
    assert!(trees.2.is_full());
}

#[test]
fn empty() {
    let tree = AvlTree::<i32>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.min(), None);
    assert!(tree.root().is_none());
    assert!(tree.in_order().is_empty());
    assert!(tree.level_order().is_empty());
    let tree = BinarySearchTree::<i32>::with_capacity(16);
    assert!(tree.is_empty());
    assert_eq!(tree.max(), None);
}

#[test]
fn extend_rebuilds_from_keys() {
    let mut tree = AvlTree::new();
    tree.extend(vec![3, 1, 2]);
    tree.extend(4..=6);
    assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6]);
    assert_eq!(format!("{:?}", tree), "AvlTree { keys: [1, 2, 3, 4, 5, 6] }");
}
