use tracing::trace;
use crate::base::RawTree;

impl<T> RawTree<T> {
    /// Rotates the subtree rooted at `pivot` to the left, making its right child the new root of the subtree, and returns the new root. Linking it into the parent slot is up to the caller.
    ///
    /// Does nothing and returns `pivot` if there is no right child.
    pub(super) fn rotate_left(&mut self, pivot: usize) -> usize {
        let right = match self.right(pivot) {
            Some(right) => right,
            None => return pivot,
        };
        let moved = self.left(right);
        self.node_mut(pivot).right = moved;
        self.node_mut(right).left = Some(pivot);
        trace!(pivot, new_root = right, "rotated left");
        right
    }
    /// Rotates the subtree rooted at `pivot` to the right, making its left child the new root of the subtree, and returns the new root. Linking it into the parent slot is up to the caller.
    ///
    /// Does nothing and returns `pivot` if there is no left child.
    pub(super) fn rotate_right(&mut self, pivot: usize) -> usize {
        let left = match self.left(pivot) {
            Some(left) => left,
            None => return pivot,
        };
        let moved = self.right(left);
        self.node_mut(pivot).left = moved;
        self.node_mut(left).right = Some(pivot);
        trace!(pivot, new_root = left, "rotated right");
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_inverse() {
        //     2            4
        //    / \          / \
        //   1   4   <->  2   5
        //      / \      / \
        //     3   5    1   3
        let mut tree = RawTree::with_root(2);
        let root = tree.root.unwrap();
        let one = tree.add(1);
        let four = tree.add(4);
        let three = tree.add(3);
        let five = tree.add(5);
        tree.node_mut(root).left = Some(one);
        tree.node_mut(root).right = Some(four);
        tree.node_mut(four).left = Some(three);
        tree.node_mut(four).right = Some(five);

        let new_root = tree.rotate_left(root);
        assert_eq!(new_root, four);
        tree.root = Some(new_root);
        assert_eq!(tree.keys(tree.pre_order(tree.root)), [&4, &2, &1, &3, &5]);

        let new_root = tree.rotate_right(four);
        assert_eq!(new_root, root);
        tree.root = Some(new_root);
        assert_eq!(tree.keys(tree.pre_order(tree.root)), [&2, &1, &4, &3, &5]);
    }

    #[test]
    fn rotating_without_child_is_noop() {
        let mut tree = RawTree::with_root(1);
        let root = tree.root.unwrap();
        assert_eq!(tree.rotate_left(root), root);
        assert_eq!(tree.rotate_right(root), root);
    }
}
