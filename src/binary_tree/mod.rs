//! Binary trees which do not keep their keys in any particular order.
//!
//! Keys are still inserted by walking down and comparing, so a `BinaryTree` built only by insertion is ordered. It stops being ordered once keys are edited or children are attached by hand through [`NodeRefMut`], and deletion makes no attempt to keep it ordered either: the deleted node is replaced by the node which comes last in level order. Because of that, `contains`, `min` and `max` look at every node instead of descending.
//!
//! # Example
//! ```rust
//! use kindling::{BinaryTree, Tree};
//!
//! let mut tree = BinaryTree::with_root(1);
//! // Wire up the children by hand, without any regard for ordering.
//! tree.root_mut().unwrap().set_left(Some(3)).set_right(Some(2));
//! assert_eq!(tree.pre_order(), [&1, &3, &2]);
//! assert!(tree.contains(&3));
//! assert_eq!(tree.max(), Some(&3));
//!
//! // The root is replaced by the last node in level order.
//! tree.delete(&1);
//! assert_eq!(tree.pre_order(), [&2, &3]);
//! ```
//!
//! [`NodeRefMut`]: ../struct.NodeRefMut.html " "

use tracing::{debug, trace};
use crate::{base::RawTree, Tree};

/// A binary tree with no ordering invariant. See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct BinaryTree<T> {
    raw: RawTree<T>,
}
impl<T: Ord> BinaryTree<T> {
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
}
impl<T: Ord> Tree for BinaryTree<T> {
    type Key = T;

    #[inline(always)]
    fn raw(&self) -> &RawTree<T> {
        &self.raw
    }
    #[inline(always)]
    fn raw_mut(&mut self) -> &mut RawTree<T> {
        &mut self.raw
    }

    /// Deletes the first node in pre-order which holds the specified key. The node which comes last in level order is detached and takes its place.
    fn delete(&mut self, key: &T) -> &mut Self {
        let raw = &mut self.raw;
        let (link, target) = match raw.find(key) {
            Some(found) => found,
            None => {
                trace!("key not found, nothing to delete");
                return self;
            }
        };
        if let Some((last_link, last)) = raw.deepest_rightmost() {
            // The last node is always a leaf, so detaching it never orphans anything.
            raw.set_link(last_link, None);
            if last != target {
                let (left, right) = (raw.left(target), raw.right(target));
                let replacement = raw.node_mut(last);
                replacement.left = left;
                replacement.right = right;
                raw.set_link(link, Some(last));
            }
        }
        raw.release(target);
        debug!(index = target, "deleted node");
        self
    }
    /// Looks at every node, since the tree is not necessarily ordered.
    #[inline]
    fn contains(&self, key: &T) -> bool {
        self.raw.find(key).is_some()
    }
}

impl_tree_traits!(BinaryTree);

#[cfg(test)]
mod tests;
