use alloc::vec::Vec;
use crate::{
    base::RawTree,
    LookupError,
    NodeRef,
    NodeRefMut,
    Sideways,
};

/// The operations shared by every kind of binary tree in the crate.
///
/// Implementors only have to provide access to their [`RawTree`] and a `delete` strategy; every other method has a default implementation which relies only on the shape of the tree. The defaults never recurse, since trees which don't balance themselves can be arbitrarily deep. Some of them still assume BST ordering (`insert`, `search`, `in_order_successor`), others don't assume any (`min`, `max`, `lowest_common_ancestor`, `level`); search trees override the latter where ordering makes them cheaper.
///
/// Methods which take a [`NodeRef`] to a subtree panic if the reference points into a different tree.
///
/// [`RawTree`]: base/struct.RawTree.html " "
/// [`NodeRef`]: struct.NodeRef.html " "
pub trait Tree: Sized {
    /// The key stored in every node.
    type Key: Ord;

    /// Returns a reference to the arena holding the nodes.
    fn raw(&self) -> &RawTree<Self::Key>;
    /// Returns a *mutable* reference to the arena holding the nodes.
    fn raw_mut(&mut self) -> &mut RawTree<Self::Key>;

    /// Inserts a key, returning the tree to allow chaining.
    ///
    /// The position is found by a plain binary search descent. If a node with the same key is met along the way, nothing happens.
    fn insert(&mut self, key: Self::Key) -> &mut Self {
        self.raw_mut().insert(key);
        self
    }
    /// Deletes the node with the specified key, returning the tree to allow chaining. Deleting a key which is not in the tree does nothing.
    fn delete(&mut self, key: &Self::Key) -> &mut Self;

    /// Finds the node with the specified key by a binary search descent.
    fn search(&self, key: &Self::Key) -> Option<NodeRef<'_, Self::Key>> {
        let raw = self.raw();
        raw.search(raw.root, key).map(|index| NodeRef::new(raw, index))
    }
    /// Returns `true` if the tree holds the specified key.
    fn contains(&self, key: &Self::Key) -> bool {
        self.search(key).is_some()
    }

    /// Returns the keys in left, node, right order.
    fn in_order(&self) -> Vec<&Self::Key> {
        let raw = self.raw();
        raw.keys(raw.in_order(raw.root))
    }
    /// Returns the keys of the subtree rooted at `node` in left, node, right order.
    #[track_caller]
    fn in_order_from<'a>(&'a self, node: NodeRef<'a, Self::Key>) -> Vec<&'a Self::Key> {
        let raw = self.raw();
        let from = node.index_in(raw);
        raw.keys(raw.in_order(Some(from)))
    }
    /// Returns the keys in node, left, right order.
    fn pre_order(&self) -> Vec<&Self::Key> {
        let raw = self.raw();
        raw.keys(raw.pre_order(raw.root))
    }
    /// Returns the keys in left, right, node order.
    fn post_order(&self) -> Vec<&Self::Key> {
        let raw = self.raw();
        raw.keys(raw.post_order(raw.root))
    }
    /// Returns the keys level by level, each level from left to right.
    fn level_order(&self) -> Vec<&Self::Key> {
        let raw = self.raw();
        raw.keys(raw.level_order())
    }

    /// Returns the smallest key, or `None` if the tree is empty. The default implementation looks at every node.
    fn min(&self) -> Option<&Self::Key> {
        let raw = self.raw();
        raw.scan_min(raw.root).map(|index| raw.key(index))
    }
    /// Returns the largest key, or `None` if the tree is empty. The default implementation looks at every node.
    fn max(&self) -> Option<&Self::Key> {
        let raw = self.raw();
        raw.scan_max(raw.root).map(|index| raw.key(index))
    }

    /// Returns the number of nodes on the longest path from the root down, 0 for an empty tree.
    fn height(&self) -> usize {
        let raw = self.raw();
        raw.height(raw.root)
    }
    /// Returns the number of nodes in the tree.
    fn size(&self) -> usize {
        let raw = self.raw();
        raw.size(raw.root)
    }
    /// Returns `true` if every node has either zero or two children.
    fn is_full(&self) -> bool {
        let raw = self.raw();
        raw.is_full(raw.root)
    }
    /// Returns `true` if the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.raw().root.is_none()
    }

    /// Returns a reference to the root node, or `None` if the tree is empty.
    fn root(&self) -> Option<NodeRef<'_, Self::Key>> {
        let raw = self.raw();
        raw.root.map(|root| NodeRef::new(raw, root))
    }
    /// Returns a *mutable* reference to the root node, or `None` if the tree is empty.
    fn root_mut(&mut self) -> Option<NodeRefMut<'_, Self::Key>> {
        let raw = self.raw_mut();
        let root = raw.root?;
        Some(NodeRefMut::new(raw, root))
    }
    /// Returns the key of the deepest node which comes last in level order, or `None` if the tree is empty.
    fn last(&self) -> Option<&Self::Key> {
        let raw = self.raw();
        raw.deepest_rightmost().map(|(_, index)| raw.key(index))
    }

    /// Returns the node holding the smallest key greater than the key of `node`.
    ///
    /// If `node` has a right subtree, that's its leftmost node. Otherwise the tree is searched from the root for the key of `node`, and the last node at which the search went left is the successor; this only gives a meaningful answer if the tree is ordered.
    #[track_caller]
    fn in_order_successor<'a>(&'a self, node: NodeRef<'a, Self::Key>) -> Option<NodeRef<'a, Self::Key>> {
        let raw = self.raw();
        let index = node.index_in(raw);
        raw.successor(index).map(|successor| NodeRef::new(raw, successor))
    }

    /// Finds the lowest node in the subtree which has both keys among its descendants, where a node counts as its own descendant.
    ///
    /// # Errors
    /// Both keys are required to be present in the subtree. If one isn't, the search is not attempted and the missing key is reported instead.
    #[track_caller]
    fn lowest_common_ancestor<'a>(
        &'a self,
        subtree: NodeRef<'a, Self::Key>,
        key1: &Self::Key,
        key2: &Self::Key,
    ) -> Result<NodeRef<'a, Self::Key>, LookupError> {
        let raw = self.raw();
        let from = subtree.index_in(raw);
        raw.require_both(from, key1, key2)?;
        raw.lowest_common_ancestor(from, key1, key2)
            .map(|index| NodeRef::new(raw, index))
            .ok_or(LookupError::FirstKeyMissing)
    }
    /// Returns the depth of `key` below `subtree`, with `subtree` itself being at depth `start`, or `None` if the key is not in the subtree. The left subtree is searched before the right one.
    #[track_caller]
    fn level<'a>(&'a self, subtree: NodeRef<'a, Self::Key>, key: &Self::Key, start: usize) -> Option<usize> {
        let raw = self.raw();
        raw.level(subtree.index_in(raw), key, start)
    }
    /// Returns the number of edges between the nodes holding the two keys, going through their lowest common ancestor within `subtree`.
    ///
    /// # Errors
    /// Same as [`lowest_common_ancestor`].
    ///
    /// [`lowest_common_ancestor`]: #method.lowest_common_ancestor " "
    #[track_caller]
    fn distance<'a>(
        &'a self,
        subtree: NodeRef<'a, Self::Key>,
        key1: &Self::Key,
        key2: &Self::Key,
    ) -> Result<usize, LookupError> {
        let ancestor = self.lowest_common_ancestor(subtree, key1, key2)?;
        let raw = self.raw();
        let from = ancestor.raw_key();
        let first = raw.level(from, key1, 0).ok_or(LookupError::FirstKeyMissing)?;
        let second = raw.level(from, key2, 0).ok_or(LookupError::SecondKeyMissing)?;
        Ok(first + second)
    }

    /// Returns a value which draws the tree sideways when displayed.
    fn sideways(&self) -> Sideways<'_, Self::Key> {
        Sideways::new(self.raw())
    }
}
