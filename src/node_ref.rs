use core::{
    fmt::{self, Debug, Formatter},
    ptr,
};
use arrayvec::ArrayVec;
use crate::{base::RawTree, Sideways};

/// A reference to a node in a tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the storage, it can be used to walk the tree. It borrows the tree immutably, so it can never observe a node which has since been deleted.
pub struct NodeRef<'a, T> {
    tree: &'a RawTree<T>,
    index: usize,
}
impl<'a, T> NodeRef<'a, T> {
    #[inline(always)]
    pub(crate) fn new(tree: &'a RawTree<T>, index: usize) -> Self {
        debug_assert!(
            tree.storage_contains(index),
            "debug key check failed: tried to reference index {} which is not present in the storage",
            index,
        );
        Self { tree, index }
    }
    /// Returns the index of the node in the storage of its tree.
    #[inline(always)]
    pub fn raw_key(&self) -> usize {
        self.index
    }
    /// Returns a reference to the key stored in the node.
    #[inline]
    pub fn key(&self) -> &'a T {
        self.tree.key(self.index)
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left(&self) -> Option<Self> {
        self.tree.left(self.index).map(|x| Self::new(self.tree, x))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right(&self) -> Option<Self> {
        self.tree.right(self.index).map(|x| Self::new(self.tree, x))
    }
    /// Returns references to the existing children, the left one first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        for child in self.tree.node(self.index).children() {
            children.push(Self::new(self.tree, child));
        }
        children
    }
    /// Returns `true` if the node does not have any children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.index).is_leaf()
    }
    /// Returns `true` if the node has exactly two children, `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        self.tree.node(self.index).is_full_branch()
    }
    /// Returns the height of the subtree rooted at this node, counted in nodes. Computed anew on every call.
    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height(Some(self.index))
    }
    /// Returns the number of nodes in the subtree rooted at this node. Computed anew on every call.
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.size(Some(self.index))
    }
    /// Returns the leftmost descendant of this node, or the node itself if it has no left child.
    ///
    /// This only walks leftward and never looks at the right subtree; for the successor by key, see [`Tree::in_order_successor`].
    ///
    /// [`Tree::in_order_successor`]: trait.Tree.html#method.in_order_successor " "
    #[inline]
    pub fn in_order_successor(&self) -> Self {
        Self::new(self.tree, self.tree.leftmost(self.index))
    }

    /// Returns a value which draws the subtree rooted at this node sideways when displayed. Heights are those within the subtree.
    #[inline]
    pub fn sideways(&self) -> Sideways<'a, T> {
        Sideways::from_node(self.tree, self.index)
    }

    /// Returns the storage index of the node, panicking if it belongs to a different tree.
    #[track_caller]
    pub(crate) fn index_in(&self, tree: &RawTree<T>) -> usize {
        assert!(
            ptr::eq(self.tree, tree),
            "the node reference does not belong to this tree",
        );
        self.index
    }
}
impl<T> Copy for NodeRef<'_, T> {}
impl<T> Clone for NodeRef<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> PartialEq for NodeRef<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}
impl<T> Eq for NodeRef<'_, T> {}
impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("key", self.key())
            .finish()
    }
}
