//! AVL trees, binary search trees which balance themselves after every insertion and deletion.
//!
//! For every node, the heights of its left and right subtrees differ by at most 1, which keeps the height of the whole tree logarithmic in the number of nodes. This is restored with at most two rotations per node on the path from the changed node up to the root.
//!
//! Heights are not cached in the nodes: they are recomputed whenever a balance needs to be checked. Because the height of a balanced tree is small, insertion and deletion are written recursively, unlike the algorithms shared with unbalanced trees.
//!
//! # Example
//! ```rust
//! use kindling::{AvlTree, Tree};
//!
//! // Ascending insertion would produce a list in an unbalanced tree.
//! let mut tree: AvlTree<_> = (1..=15).collect();
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(8));
//!
//! tree.delete(&8).delete(&9).delete(&10);
//! assert!(tree.validate().is_ok());
//! assert_eq!(tree.size(), 12);
//! ```

use core::cmp::Ordering;
use tracing::{debug, trace};
use crate::{
    base::RawTree,
    util::Stack,
    InvariantViolation,
    LookupError,
    NodeRef,
    Tree,
};

mod rotation;

/// A self-balancing binary search tree. See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct AvlTree<T> {
    raw: RawTree<T>,
}
impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self { raw: RawTree::new() }
    }
    /// Creates an empty tree with space for at least the specified number of nodes before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawTree::with_capacity(capacity),
        }
    }
    /// Creates a tree with a single node holding the specified key.
    #[inline]
    pub fn with_root(key: T) -> Self {
        Self {
            raw: RawTree::with_root(key),
        }
    }

    /// Returns the height of the left subtree of the node minus the height of its right subtree.
    #[track_caller]
    pub fn balance(&self, node: NodeRef<'_, T>) -> isize {
        self.raw.balance(node.index_in(&self.raw))
    }
    /// Checks the ordering of the keys and the balance of every node.
    ///
    /// # Errors
    /// Returns the first violation found. Ordering is checked before balance.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.raw.check_ordering()?;
        let mut pending: Stack<(usize, usize)> = Stack::new();
        pending.extend(self.raw.root.map(|root| (root, 0)));
        while let Some((index, depth)) = pending.pop() {
            let difference = self.raw.balance(index);
            if difference.abs() > 1 {
                return Err(InvariantViolation::Unbalanced { depth, difference });
            }
            pending.extend(self.raw.node(index).children().into_iter().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}
impl<T: Ord> Tree for AvlTree<T> {
    type Key = T;

    #[inline(always)]
    fn raw(&self) -> &RawTree<T> {
        &self.raw
    }
    #[inline(always)]
    fn raw_mut(&mut self) -> &mut RawTree<T> {
        &mut self.raw
    }

    /// Inserts a key and rebalances the nodes on the path back up to the root.
    fn insert(&mut self, key: T) -> &mut Self {
        let mut inserted = None;
        let root = self.raw.root;
        let root = self.raw.insert_balanced(root, key, &mut inserted);
        self.raw.root = Some(root);
        self
    }
    /// Deletes the node with the specified key and rebalances the nodes on the path back up to the root. A node with two children is replaced by its in-order successor.
    fn delete(&mut self, key: &T) -> &mut Self {
        let mut removed = None;
        let root = self.raw.root;
        self.raw.root = self.raw.delete_balanced(root, key, &mut removed);
        match removed {
            Some(index) => {
                self.raw.release(index);
                debug!(index, "deleted node");
            }
            None => trace!("key not found, nothing to delete"),
        }
        self
    }
    #[inline]
    fn min(&self) -> Option<&T> {
        self.raw.root.map(|root| self.raw.key(self.raw.leftmost(root)))
    }
    #[inline]
    fn max(&self) -> Option<&T> {
        self.raw.root.map(|root| self.raw.key(self.raw.rightmost(root)))
    }
    #[track_caller]
    fn lowest_common_ancestor<'a>(
        &'a self,
        subtree: NodeRef<'a, T>,
        key1: &T,
        key2: &T,
    ) -> Result<NodeRef<'a, T>, LookupError> {
        let from = subtree.index_in(&self.raw);
        self.raw.require_both(from, key1, key2)?;
        self.raw
            .common_ancestor(Some(from), key1, key2)
            .map(|index| NodeRef::new(&self.raw, index))
            .ok_or(LookupError::FirstKeyMissing)
    }
}

impl<T> RawTree<T> {
    fn balance(&self, index: usize) -> isize {
        let node = self.node(index);
        self.height(node.left) as isize - self.height(node.right) as isize
    }
    fn rebalance_after_delete(&mut self, index: usize) -> usize {
        let balance = self.balance(index);
        if balance > 1 {
            if let Some(left) = self.left(index) {
                if self.balance(left) < 0 {
                    let rotated = self.rotate_left(left);
                    self.node_mut(index).left = Some(rotated);
                }
                return self.rotate_right(index);
            }
        } else if balance < -1 {
            if let Some(right) = self.right(index) {
                if self.balance(right) > 0 {
                    let rotated = self.rotate_right(right);
                    self.node_mut(index).right = Some(rotated);
                }
                return self.rotate_left(index);
            }
        }
        index
    }
    /// Detaches the leftmost node of the subtree, rebalancing on the way back up. Returns the new root of the subtree and the detached node.
    fn detach_min_balanced(&mut self, index: usize) -> (Option<usize>, usize) {
        match self.left(index) {
            Some(left) => {
                let (rest, min) = self.detach_min_balanced(left);
                self.node_mut(index).left = rest;
                (Some(self.rebalance_after_delete(index)), min)
            }
            None => (self.right(index), index),
        }
    }
}

impl<T: Ord> RawTree<T> {
    /// Returns the new root of the subtree. The index of the new leaf, if one was added, is written to `inserted`.
    fn insert_balanced(&mut self, index: Option<usize>, key: T, inserted: &mut Option<usize>) -> usize {
        let index = match index {
            Some(index) => index,
            None => {
                let leaf = self.add(key);
                *inserted = Some(leaf);
                return leaf;
            }
        };
        match key.cmp(self.key(index)) {
            Ordering::Less => {
                let left = self.left(index);
                let left = self.insert_balanced(left, key, inserted);
                self.node_mut(index).left = Some(left);
            }
            Ordering::Greater => {
                let right = self.right(index);
                let right = self.insert_balanced(right, key, inserted);
                self.node_mut(index).right = Some(right);
            }
            Ordering::Equal => {
                trace!(index, "key already present, skipping insertion");
                return index;
            }
        }
        match *inserted {
            Some(leaf) => self.rebalance_after_insert(index, leaf),
            None => index,
        }
    }
    /// The rotation case is picked by which side of the heavy child the new leaf went to.
    fn rebalance_after_insert(&mut self, index: usize, leaf: usize) -> usize {
        let balance = self.balance(index);
        if balance > 1 {
            if let Some(left) = self.left(index) {
                match self.key(leaf).cmp(self.key(left)) {
                    Ordering::Less => return self.rotate_right(index),
                    Ordering::Greater => {
                        let rotated = self.rotate_left(left);
                        self.node_mut(index).left = Some(rotated);
                        return self.rotate_right(index);
                    }
                    Ordering::Equal => {}
                }
            }
        } else if balance < -1 {
            if let Some(right) = self.right(index) {
                match self.key(leaf).cmp(self.key(right)) {
                    Ordering::Greater => return self.rotate_left(index),
                    Ordering::Less => {
                        let rotated = self.rotate_right(right);
                        self.node_mut(index).right = Some(rotated);
                        return self.rotate_left(index);
                    }
                    Ordering::Equal => {}
                }
            }
        }
        index
    }

    /// Returns the new root of the subtree. The index of the unlinked node, which is left in the storage for the caller to release, is written to `removed`.
    fn delete_balanced(&mut self, index: Option<usize>, key: &T, removed: &mut Option<usize>) -> Option<usize> {
        let index = index?;
        match key.cmp(self.key(index)) {
            Ordering::Less => {
                let left = self.left(index);
                let left = self.delete_balanced(left, key, removed);
                self.node_mut(index).left = left;
            }
            Ordering::Greater => {
                let right = self.right(index);
                let right = self.delete_balanced(right, key, removed);
                self.node_mut(index).right = right;
            }
            Ordering::Equal => {
                *removed = Some(index);
                return match (self.left(index), self.right(index)) {
                    (Some(left), Some(right)) => {
                        let (rest, successor) = self.detach_min_balanced(right);
                        let node = self.node_mut(successor);
                        node.left = Some(left);
                        node.right = rest;
                        Some(self.rebalance_after_delete(successor))
                    }
                    (only, None) | (None, only) => only,
                };
            }
        }
        if removed.is_some() {
            Some(self.rebalance_after_delete(index))
        } else {
            Some(index)
        }
    }

    /// Recursive lowest common ancestor search. A node matching either key reports itself, and a node to which both subtrees report a match is the ancestor.
    fn common_ancestor(&self, index: Option<usize>, key1: &T, key2: &T) -> Option<usize> {
        let index = index?;
        let node = self.node(index);
        if node.key == *key1 || node.key == *key2 {
            return Some(index);
        }
        let left = self.common_ancestor(node.left, key1, key2);
        let right = self.common_ancestor(node.right, key1, key2);
        match (left, right) {
            (Some(_), Some(_)) => Some(index),
            (left, right) => left.or(right),
        }
    }
}

impl_tree_traits!(AvlTree);
