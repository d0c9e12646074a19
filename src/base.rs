//! The arena shared by every tree kind and the algorithms which only rely on the node structure.

use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
};
use alloc::vec::Vec;
use granite::{SparseVec, Storage};
use tracing::trace;
use crate::{
    node::Node,
    util::Stack,
    LookupError,
};

/// The arena and the root index which every tree kind is built around.
///
/// Nodes live in a *sparse* storage: removing a node leaves a hole behind instead of shifting the elements after it, so the indices of all other nodes stay valid. The type is only public so that it can be named by the [`Tree`] trait; all of its methods are internal.
///
/// [`Tree`]: ../trait.Tree.html " "
pub struct RawTree<T> {
    pub(crate) storage: SparseVec<Node<T>>,
    pub(crate) root: Option<usize>,
}

/// A slot which can hold a node: either the root slot of the tree or a child slot of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Link {
    Root,
    Left(usize),
    Right(usize),
}

impl<T> RawTree<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            storage: SparseVec::new(),
            root: None,
        }
    }
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: SparseVec::with_capacity(capacity),
            root: None,
        }
    }
    pub(crate) fn with_root(key: T) -> Self {
        let mut tree = Self::new();
        let root = tree.add(key);
        tree.root = Some(root);
        tree
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        self.storage
            .get(&index)
            .unwrap_or_else(|| panic!("invalid node index: {}", index))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.storage
            .get_mut(&index)
            .unwrap_or_else(|| panic!("invalid node index: {}", index))
    }
    #[inline(always)]
    pub(crate) fn storage_contains(&self, index: usize) -> bool {
        // Holes count as present keys for the storage itself
        self.storage.get(&index).is_some()
    }
    #[inline]
    pub(crate) fn key(&self, index: usize) -> &T {
        &self.node(index).key
    }
    #[inline]
    pub(crate) fn left(&self, index: usize) -> Option<usize> {
        self.node(index).left
    }
    #[inline]
    pub(crate) fn right(&self, index: usize) -> Option<usize> {
        self.node(index).right
    }

    /// Puts a detached leaf into the storage.
    #[inline]
    pub(crate) fn add(&mut self, key: T) -> usize {
        self.storage.add(Node::leaf(key))
    }
    /// Removes a node which is no longer linked into the tree, returning its key.
    ///
    /// The children of the node are not touched; they must have been relinked or released already.
    #[inline]
    pub(crate) fn release(&mut self, index: usize) -> T {
        self.storage.remove(&index).key
    }
    /// Removes a detached node and all of its descendants, returning how many nodes were removed.
    pub(crate) fn release_subtree(&mut self, index: usize) -> usize {
        let mut pending: Stack<usize> = Stack::new();
        pending.push(index);
        let mut released = 0;
        while let Some(index) = pending.pop() {
            let node = self.storage.remove(&index);
            pending.extend(node.left);
            pending.extend(node.right);
            released += 1;
        }
        released
    }

    #[inline]
    pub(crate) fn get_link(&self, link: Link) -> Option<usize> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.left(parent),
            Link::Right(parent) => self.right(parent),
        }
    }
    #[inline]
    pub(crate) fn set_link(&mut self, link: Link, child: Option<usize>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.node_mut(parent).left = child,
            Link::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    /// Maps a sequence of node indices to their keys.
    pub(crate) fn keys(&self, indices: Vec<usize>) -> Vec<&T> {
        indices.into_iter().map(|index| self.key(index)).collect()
    }

    /// Number of nodes on the longest path down from `from`, 0 for an absent subtree.
    pub(crate) fn height(&self, from: Option<usize>) -> usize {
        let mut height = 0;
        let mut pending: Stack<(usize, usize)> = Stack::new();
        pending.extend(from.map(|index| (index, 1)));
        while let Some((index, depth)) = pending.pop() {
            height = height.max(depth);
            for child in self.node(index).children() {
                pending.push((child, depth + 1));
            }
        }
        height
    }
    pub(crate) fn size(&self, from: Option<usize>) -> usize {
        let mut size = 0;
        let mut pending: Stack<usize> = Stack::new();
        pending.extend(from);
        while let Some(index) = pending.pop() {
            size += 1;
            pending.extend(self.node(index).children());
        }
        size
    }
    /// Whether every node of the subtree has either zero or two children.
    pub(crate) fn is_full(&self, from: Option<usize>) -> bool {
        let mut pending: Stack<usize> = Stack::new();
        pending.extend(from);
        while let Some(index) = pending.pop() {
            let node = self.node(index);
            if !node.is_leaf() && !node.is_full_branch() {
                return false;
            }
            pending.extend(node.children());
        }
        true
    }

    /// The leftmost node of the subtree.
    pub(crate) fn leftmost(&self, from: usize) -> usize {
        let mut current = from;
        while let Some(left) = self.left(current) {
            current = left;
        }
        current
    }
    /// The rightmost node of the subtree.
    #[cfg(any(feature = "search_tree", feature = "avl_tree"))]
    pub(crate) fn rightmost(&self, from: usize) -> usize {
        let mut current = from;
        while let Some(right) = self.right(current) {
            current = right;
        }
        current
    }

    /// The deepest node which comes last in level order, together with the slot holding it.
    pub(crate) fn deepest_rightmost(&self) -> Option<(Link, usize)> {
        let height = self.height(self.root);
        let mut last = None;
        self.visit_level(height, |link, index| last = Some((link, index)));
        last
    }
}

impl<T: Ord> RawTree<T> {
    /// Plain BST insertion. Returns the index of the new leaf, or `None` if the key was met along the descent path.
    pub(crate) fn insert(&mut self, key: T) -> Option<usize> {
        let mut link = Link::Root;
        while let Some(index) = self.get_link(link) {
            link = match key.cmp(self.key(index)) {
                Ordering::Less => Link::Left(index),
                Ordering::Greater => Link::Right(index),
                Ordering::Equal => {
                    trace!(index, "key already present, skipping insertion");
                    return None;
                }
            };
        }
        let leaf = self.add(key);
        self.set_link(link, Some(leaf));
        Some(leaf)
    }

    /// Descends by comparison, assuming BST ordering below `from`.
    pub(crate) fn search(&self, from: Option<usize>, key: &T) -> Option<usize> {
        let mut current = from;
        while let Some(index) = current {
            current = match key.cmp(self.key(index)) {
                Ordering::Less => self.left(index),
                Ordering::Greater => self.right(index),
                Ordering::Equal => return Some(index),
            };
        }
        None
    }
    /// Looks at every node in pre-order without assuming any ordering, returning the first match and the slot holding it.
    #[cfg(feature = "binary_tree")]
    pub(crate) fn find(&self, key: &T) -> Option<(Link, usize)> {
        let mut pending: Stack<(Link, usize)> = Stack::new();
        pending.extend(self.root.map(|root| (Link::Root, root)));
        while let Some((link, index)) = pending.pop() {
            let node = self.node(index);
            if node.key == *key {
                return Some((link, index));
            }
            pending.extend(node.right.map(|right| (Link::Right(index), right)));
            pending.extend(node.left.map(|left| (Link::Left(index), left)));
        }
        None
    }

    /// Smallest key of the subtree, found by looking at every node.
    pub(crate) fn scan_min(&self, from: Option<usize>) -> Option<usize> {
        self.pre_order(from)
            .into_iter()
            .min_by(|&a, &b| self.key(a).cmp(self.key(b)))
    }
    /// Largest key of the subtree, found by looking at every node.
    pub(crate) fn scan_max(&self, from: Option<usize>) -> Option<usize> {
        self.pre_order(from)
            .into_iter()
            .max_by(|&a, &b| self.key(a).cmp(self.key(b)))
    }

    /// Successor of `index` by key: the leftmost node of its right subtree, or else the last node on the root-to-`index` descent where the search went left.
    pub(crate) fn successor(&self, index: usize) -> Option<usize> {
        if let Some(right) = self.right(index) {
            return Some(self.leftmost(right));
        }
        let key = self.key(index);
        let mut successor = None;
        let mut current = self.root;
        while let Some(candidate) = current {
            current = match key.cmp(self.key(candidate)) {
                Ordering::Less => {
                    successor = Some(candidate);
                    self.left(candidate)
                }
                Ordering::Greater => self.right(candidate),
                Ordering::Equal => break,
            };
        }
        successor
    }

    /// Depth of `key` below `from`, counting `from` itself as `start`. The left subtree is searched before the right one.
    pub(crate) fn level(&self, from: usize, key: &T, start: usize) -> Option<usize> {
        let mut pending: Stack<(usize, usize)> = Stack::new();
        pending.push((from, start));
        while let Some((index, level)) = pending.pop() {
            let node = self.node(index);
            if node.key == *key {
                return Some(level);
            }
            pending.extend(node.right.map(|right| (right, level + 1)));
            pending.extend(node.left.map(|left| (left, level + 1)));
        }
        None
    }

    /// Fails unless both keys are present below `from`.
    pub(crate) fn require_both(&self, from: usize, key1: &T, key2: &T) -> Result<(), LookupError> {
        self.level(from, key1, 0).ok_or(LookupError::FirstKeyMissing)?;
        self.level(from, key2, 0).ok_or(LookupError::SecondKeyMissing)?;
        Ok(())
    }

    /// The lowest common ancestor of two keys which are both known to be present below `from`.
    ///
    /// A node matching either key reports itself; a node to which both children report a hit is the ancestor; otherwise the hit of whichever child reported one is passed up. Evaluated bottom-up over the post-order sequence with a stack of child results.
    pub(crate) fn lowest_common_ancestor(&self, from: usize, key1: &T, key2: &T) -> Option<usize> {
        let mut hits: Stack<Option<usize>> = Stack::new();
        for index in self.post_order(Some(from)) {
            let node = self.node(index);
            let right = node.right.and_then(|_| hits.pop().flatten());
            let left = node.left.and_then(|_| hits.pop().flatten());
            let hit = if node.key == *key1 || node.key == *key2 {
                Some(index)
            } else {
                match (left, right) {
                    (Some(_), Some(_)) => Some(index),
                    (left, right) => left.or(right),
                }
            };
            hits.push(hit);
        }
        hits.pop().flatten()
    }

    /// Checks the BST ordering of the whole tree.
    #[cfg(any(feature = "search_tree", feature = "avl_tree"))]
    pub(crate) fn check_ordering(&self) -> Result<(), crate::InvariantViolation> {
        let mut pending: Stack<(usize, Option<&T>, Option<&T>, usize)> = Stack::new();
        pending.extend(self.root.map(|root| (root, None, None, 0)));
        while let Some((index, lower, upper, depth)) = pending.pop() {
            let key = self.key(index);
            let above_lower = lower.map_or(true, |lower| key > lower);
            let below_upper = upper.map_or(true, |upper| key < upper);
            if !(above_lower && below_upper) {
                return Err(crate::InvariantViolation::Unordered { depth });
            }
            let node = self.node(index);
            pending.extend(node.left.map(|left| (left, lower, Some(key), depth + 1)));
            pending.extend(node.right.map(|right| (right, Some(key), upper, depth + 1)));
        }
        Ok(())
    }
}

impl<T: Debug> Debug for RawTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawTree")
            .field("root", &self.root)
            .field("in_order", &self.keys(self.in_order(self.root)))
            .finish()
    }
}
