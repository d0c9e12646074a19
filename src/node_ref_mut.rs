use core::{
    fmt::{self, Debug, Formatter},
    mem,
};
use tracing::trace;
use crate::{
    base::{Link, RawTree},
    NodeRef,
};

/// A *mutable* reference to a node in a tree.
///
/// Allows replacing keys and wiring up children by hand. None of those operations check the ordering or balance of the tree; it's up to the caller to keep search trees ordered (see `validate` on the search tree types) or to use the result only with operations which do not rely on ordering.
pub struct NodeRefMut<'a, T> {
    tree: &'a mut RawTree<T>,
    index: usize,
}
impl<'a, T> NodeRefMut<'a, T> {
    #[inline(always)]
    pub(crate) fn new(tree: &'a mut RawTree<T>, index: usize) -> Self {
        Self { tree, index }
    }
    /// Returns the index of the node in the storage of its tree.
    #[inline(always)]
    pub fn raw_key(&self) -> usize {
        self.index
    }
    /// Returns a reference to the key stored in the node.
    #[inline]
    pub fn key(&self) -> &T {
        self.tree.key(self.index)
    }
    /// Returns a *mutable* reference to the key stored in the node.
    #[inline]
    pub fn key_mut(&mut self) -> &mut T {
        &mut self.tree.node_mut(self.index).key
    }
    /// Replaces the key stored in the node, returning the previous one.
    #[inline]
    pub fn set_key(&mut self, key: T) -> T {
        mem::replace(self.key_mut(), key)
    }
    /// Returns a *mutable* reference to the left child, or `None` if there is none.
    pub fn left_mut(&mut self) -> Option<NodeRefMut<'_, T>> {
        let left = self.tree.left(self.index)?;
        Some(NodeRefMut::new(self.tree, left))
    }
    /// Returns a *mutable* reference to the right child, or `None` if there is none.
    pub fn right_mut(&mut self) -> Option<NodeRefMut<'_, T>> {
        let right = self.tree.right(self.index)?;
        Some(NodeRefMut::new(self.tree, right))
    }
    /// Consumes the reference and returns a *mutable* reference to the left child, or `None` if there is none.
    pub fn into_left(self) -> Option<Self> {
        let left = self.tree.left(self.index)?;
        Some(Self::new(self.tree, left))
    }
    /// Consumes the reference and returns a *mutable* reference to the right child, or `None` if there is none.
    pub fn into_right(self) -> Option<Self> {
        let right = self.tree.right(self.index)?;
        Some(Self::new(self.tree, right))
    }
    /// Replaces the left child. The previous left subtree, if any, is removed from the tree entirely; `Some` attaches a new leaf with the specified key.
    pub fn set_left(&mut self, key: Option<T>) -> &mut Self {
        self.replace_child(Link::Left(self.index), key);
        self
    }
    /// Replaces the right child. The previous right subtree, if any, is removed from the tree entirely; `Some` attaches a new leaf with the specified key.
    pub fn set_right(&mut self, key: Option<T>) -> &mut Self {
        self.replace_child(Link::Right(self.index), key);
        self
    }

    fn replace_child(&mut self, link: Link, key: Option<T>) {
        if let Some(old) = self.tree.get_link(link) {
            self.tree.set_link(link, None);
            let released = self.tree.release_subtree(old);
            trace!(parent = self.index, released, "released subtree");
        }
        if let Some(key) = key {
            let leaf = self.tree.add(key);
            self.tree.set_link(link, Some(leaf));
        }
    }
}
impl<'a, T> From<NodeRefMut<'a, T>> for NodeRef<'a, T> {
    #[inline(always)]
    fn from(op: NodeRefMut<'a, T>) -> Self {
        NodeRef::new(op.tree, op.index)
    }
}
impl<'a, T> From<&'a NodeRefMut<'_, T>> for NodeRef<'a, T> {
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, T>) -> Self {
        NodeRef::new(&*op.tree, op.index)
    }
}
impl<T: Debug> Debug for NodeRefMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRefMut")
            .field("index", &self.index)
            .field("key", self.key())
            .finish()
    }
}
