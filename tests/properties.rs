use std::collections::BTreeSet;
use kindling::{AvlTree, BinarySearchTree, BinaryTree, Tree};
use proptest::prelude::*;

fn keys() -> impl Strategy<Value = Vec<i16>> {
    proptest::collection::vec(any::<i16>(), 0..200)
}

proptest! {
    #[test]
    fn search_tree_stays_ordered(inserted in keys(), deleted in keys()) {
        let mut tree: BinarySearchTree<_> = inserted.iter().copied().collect();
        prop_assert_eq!(tree.validate(), Ok(()));
        for key in &deleted {
            tree.delete(key);
        }
        prop_assert_eq!(tree.validate(), Ok(()));

        let expected: BTreeSet<_> = inserted.iter().filter(|key| !deleted.contains(key)).collect();
        prop_assert_eq!(tree.in_order(), expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn avl_tree_stays_balanced(inserted in keys(), deleted in keys()) {
        let mut tree: AvlTree<_> = inserted.iter().copied().collect();
        prop_assert_eq!(tree.validate(), Ok(()));
        for key in &deleted {
            tree.delete(key);
            prop_assert_eq!(tree.validate(), Ok(()));
        }

        let expected: BTreeSet<_> = inserted.iter().filter(|key| !deleted.contains(key)).collect();
        prop_assert_eq!(tree.in_order(), expected.into_iter().collect::<Vec<_>>());
        // A balanced tree of n nodes is at most about 1.44 log2(n) high
        let bound = 1.45 * ((tree.size() + 2) as f64).log2();
        prop_assert!((tree.height() as f64) <= bound);
    }

    #[test]
    fn size_matches_traversals(inserted in keys()) {
        let trees = (
            inserted.iter().copied().collect::<BinaryTree<_>>(),
            inserted.iter().copied().collect::<BinarySearchTree<_>>(),
            inserted.iter().copied().collect::<AvlTree<_>>(),
        );
        let distinct = inserted.iter().collect::<BTreeSet<_>>().len();
        for (size, orders) in [
            (trees.0.size(), [trees.0.in_order(), trees.0.pre_order(), trees.0.post_order(), trees.0.level_order()]),
            (trees.1.size(), [trees.1.in_order(), trees.1.pre_order(), trees.1.post_order(), trees.1.level_order()]),
            (trees.2.size(), [trees.2.in_order(), trees.2.pre_order(), trees.2.post_order(), trees.2.level_order()]),
        ] {
            prop_assert_eq!(size, distinct);
            for order in &orders {
                prop_assert_eq!(order.len(), size);
            }
        }
        prop_assert_eq!(trees.0.is_empty(), inserted.is_empty());
    }

    #[test]
    fn traversals_do_not_mutate(inserted in keys()) {
        let tree: BinarySearchTree<_> = inserted.iter().copied().collect();
        let first = (tree.in_order(), tree.pre_order(), tree.post_order(), tree.level_order());
        let second = (tree.in_order(), tree.pre_order(), tree.post_order(), tree.level_order());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inserted_keys_are_found(inserted in keys(), probe in any::<i16>()) {
        let tree: AvlTree<_> = inserted.iter().copied().collect();
        for key in &inserted {
            prop_assert_eq!(tree.search(key).map(|node| node.key()), Some(key));
        }
        prop_assert_eq!(tree.contains(&probe), inserted.contains(&probe));
        prop_assert_eq!(tree.min(), inserted.iter().min());
        prop_assert_eq!(tree.max(), inserted.iter().max());
    }

    #[test]
    fn delete_restores_size(inserted in keys(), extra in any::<i16>()) {
        prop_assume!(!inserted.contains(&extra));
        let mut tree: BinaryTree<_> = inserted.iter().copied().collect();
        let size = tree.size();
        tree.insert(extra);
        prop_assert_eq!(tree.size(), size + 1);
        tree.delete(&extra);
        prop_assert_eq!(tree.size(), size);
        prop_assert!(!tree.contains(&extra));
    }

    #[test]
    fn successor_follows_in_order(inserted in keys()) {
        let tree: BinarySearchTree<_> = inserted.iter().copied().collect();
        let order = tree.in_order();
        for pair in order.windows(2) {
            let node = tree.search(pair[0]).unwrap();
            prop_assert_eq!(tree.in_order_successor(node).map(|node| node.key()), Some(pair[1]));
        }
    }
}
