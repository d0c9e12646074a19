//! Binary search trees, which keep the keys of every left subtree smaller and the keys of every right subtree larger than the key of the subtree's root.
//!
//! The tree does not balance itself: inserting keys in sorted order degenerates it into a list. All algorithms are iterative, so even a degenerate tree of any size can be worked with safely. See [`AvlTree`] for a self-balancing alternative.
//!
//! # Example
//! ```rust
//! use kindling::{BinarySearchTree, Tree};
//!
//! let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].iter().copied().collect();
//! assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
//!
//! // A node with two children is replaced by its in-order successor.
//! tree.delete(&50);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(60));
//! assert_eq!(tree.min(), Some(&20));
//! assert!(tree.validate().is_ok());
//! ```
//!
//! [`AvlTree`]: ../struct.AvlTree.html " "

use core::cmp::Ordering;
use alloc::{vec, vec::Vec};
use tracing::{debug, trace};
use crate::{
    base::{Link, RawTree},
    InvariantViolation,
    Tree,
};

/// An unbalanced binary search tree. See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct BinarySearchTree<T> {
    raw: RawTree<T>,
}
impl<T: Ord> BinarySearchTree<T> {
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

    /// Restores the ordering of a tree whose keys were edited by hand, keeping its shape.
    ///
    /// The keys are sorted and then handed out to the nodes in in-order sequence, so that the smallest key ends up in the leftmost node and so on. Nodes are relinked in place rather than having their keys moved, which means that the key type does not need to be `Clone`.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{BinarySearchTree, Tree};
    ///
    /// let mut tree: BinarySearchTree<_> = [2, 1, 3].iter().copied().collect();
    /// tree.root_mut().unwrap().set_key(10);
    /// assert!(tree.validate().is_err());
    ///
    /// tree.convert_to_bst();
    /// assert!(tree.validate().is_ok());
    /// assert_eq!(tree.pre_order(), [&3, &1, &10]);
    /// ```
    pub fn convert_to_bst(&mut self) -> &mut Self {
        let raw = &mut self.raw;
        let order = raw.in_order(raw.root);
        let mut sorted = order.clone();
        sorted.sort_by(|&a, &b| raw.key(a).cmp(raw.key(b)));

        let len = order.iter().copied().max().map_or(0, |max| max + 1);
        let mut position = vec![0; len];
        for (i, &index) in order.iter().enumerate() {
            position[index] = i;
        }
        // The node at in-order position i is replaced by the i-th smallest one
        let relocate = |index: usize| sorted[position[index]];
        let links: Vec<_> = order
            .iter()
            .map(|&index| {
                let node = raw.node(index);
                (node.left.map(relocate), node.right.map(relocate))
            })
            .collect();
        for (&index, (left, right)) in sorted.iter().zip(links) {
            let node = raw.node_mut(index);
            node.left = left;
            node.right = right;
        }
        raw.root = raw.root.map(relocate);
        debug!(nodes = order.len(), "redistributed keys");
        self
    }
    /// Checks that every key is greater than all keys in its left subtree and smaller than all keys in its right subtree.
    ///
    /// # Errors
    /// Returns the depth of the first node found to be out of order.
    #[inline]
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.raw.check_ordering()
    }
}
impl<T: Ord> Tree for BinarySearchTree<T> {
    type Key = T;

    #[inline(always)]
    fn raw(&self) -> &RawTree<T> {
        &self.raw
    }
    #[inline(always)]
    fn raw_mut(&mut self) -> &mut RawTree<T> {
        &mut self.raw
    }

    /// Deletes the node with the specified key.
    ///
    /// A node with at most one child is replaced by that child. A node with two children is replaced by its in-order successor, which is first spliced out of the right subtree.
    fn delete(&mut self, key: &T) -> &mut Self {
        let raw = &mut self.raw;
        let mut link = Link::Root;
        let target = loop {
            let index = match raw.get_link(link) {
                Some(index) => index,
                None => {
                    trace!("key not found, nothing to delete");
                    return self;
                }
            };
            link = match key.cmp(raw.key(index)) {
                Ordering::Less => Link::Left(index),
                Ordering::Greater => Link::Right(index),
                Ordering::Equal => break index,
            };
        };
        let replacement = match (raw.left(target), raw.right(target)) {
            (Some(_), Some(_)) => raw.splice_out_min(Link::Right(target)).map(|successor| {
                // Read after splicing, since the successor may have been the right child
                let (left, right) = (raw.left(target), raw.right(target));
                let node = raw.node_mut(successor);
                node.left = left;
                node.right = right;
                successor
            }),
            (only, None) | (None, only) => only,
        };
        raw.set_link(link, replacement);
        raw.release(target);
        debug!(index = target, "deleted node");
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
}

impl<T> RawTree<T> {
    /// Detaches the leftmost node of the subtree in the specified slot, putting its right child in its place.
    fn splice_out_min(&mut self, from: Link) -> Option<usize> {
        let mut link = from;
        while let Some(index) = self.get_link(link) {
            match self.left(index) {
                Some(_) => link = Link::Left(index),
                None => {
                    let right = self.right(index);
                    self.set_link(link, right);
                    return Some(index);
                }
            }
        }
        None
    }
}

impl_tree_traits!(BinarySearchTree);
