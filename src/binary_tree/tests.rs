use super::*;

fn hand_built() -> BinaryTree<u32> {
    //       1
    //     /   \
    //    2     3
    //   / \   /
    //  4   5 6
    let mut tree = BinaryTree::with_root(1);
    let mut root = tree.root_mut().unwrap();
    root.set_left(Some(2)).set_right(Some(3));
    root.left_mut().unwrap().set_left(Some(4)).set_right(Some(5));
    root.right_mut().unwrap().set_left(Some(6));
    tree
}

#[test]
fn basic() {
    let mut tree = BinaryTree::new();
    tree.insert(1987_u64).insert(83).insert(2020);
    let root = tree.root().unwrap();
    assert_eq!(root.key(), &1987);
    assert_eq!(root.left().map(|x| *x.key()), Some(83));
    assert_eq!(root.right().map(|x| *x.key()), Some(2020));
    assert!(root.is_full_branch());
    assert_eq!(tree.size(), 3);
}

#[test]
fn traversals() {
    let tree = hand_built();
    assert_eq!(tree.pre_order(), [&1, &2, &4, &5, &3, &6]);
    assert_eq!(tree.in_order(), [&4, &2, &5, &1, &6, &3]);
    assert_eq!(tree.post_order(), [&4, &5, &2, &6, &3, &1]);
    assert_eq!(tree.level_order(), [&1, &2, &3, &4, &5, &6]);
    let left = tree.root().unwrap().left().unwrap();
    assert_eq!(tree.in_order_from(left), [&4, &2, &5]);
}

#[test]
fn scans_ignore_ordering() {
    let tree = hand_built();
    assert!(tree.contains(&6));
    assert!(!tree.contains(&7));
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&6));
    assert_eq!(tree.last(), Some(&6));
    assert!(!tree.is_full());
}

#[test]
fn delete_promotes_last() {
    let mut tree = hand_built();
    tree.delete(&2);
    assert_eq!(tree.level_order(), [&1, &6, &3, &4, &5]);
    assert_eq!(tree.size(), 5);
    assert!(tree.is_full());

    tree.delete(&5);
    assert_eq!(tree.level_order(), [&1, &6, &3, &4]);
    tree.delete(&42);
    assert_eq!(tree.size(), 4);
}

#[test]
fn delete_down_to_empty() {
    let mut tree = hand_built();
    for key in 1..=6 {
        tree.delete(&key);
        assert!(!tree.contains(&key));
        assert_eq!(tree.size(), 6 - key as usize);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.last(), None);
}

#[test]
fn replacing_children_releases_subtrees() {
    let mut tree = hand_built();
    tree.root_mut().unwrap().set_left(None);
    assert_eq!(tree.pre_order(), [&1, &3, &6]);
    tree.root_mut().unwrap().set_right(Some(7));
    assert_eq!(tree.pre_order(), [&1, &7]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn sideways() {
    let tree: BinaryTree<_> = [2, 1, 3].iter().copied().collect();
    let drawing = tree.sideways().to_string();
    let lines: Vec<_> = drawing.lines().collect();
    assert_eq!(lines, [" /-- 3:1", "2:2", " \\-- 1:1"]);
    assert_eq!(BinaryTree::<u8>::new().to_string(), "(empty)\n");
}

#[test]
fn sideways_from_node() {
    let tree = hand_built();
    let two = tree.root().unwrap().left().unwrap();
    let drawing = two.sideways().to_string();
    let lines: Vec<_> = drawing.lines().collect();
    assert_eq!(lines, [" /-- 5:1", "2:2", " \\-- 4:1"]);
    let six = tree.root().unwrap().right().unwrap().left().unwrap();
    assert_eq!(six.sideways().to_string(), "6:1\n");
}
