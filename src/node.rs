use core::num::NonZeroIsize;
use arrayvec::ArrayVec;
use granite::{ListStorage, MoveFix};

/// A node of a tree.
///
/// Created by the trees internally and only publicly exposed so that the element type of their storage could be named. Children are stored as indices into the same storage; there is no link back to the parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(crate) const fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
    /// Indices of the existing children, left one first.
    #[inline]
    pub(crate) fn children(&self) -> ArrayVec<[usize; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left);
        children.extend(self.right);
        children
    }
    #[inline]
    pub(crate) fn is_full_branch(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// Trees only ever use sparse storage, which punches holes instead of shifting, so these hooks only
// run if the nodes are put into a dense list storage directly.
impl<T> MoveFix for Node<T> {
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where S: ListStorage<Element = Self>,
    {
        let shifted_by = shifted_by.get();
        for i in 0..storage.len() {
            let node = match storage.get_mut(i) {
                Some(node) => node,
                None => continue,
            };
            for child in node.left.iter_mut().chain(node.right.iter_mut()) {
                if shifted_by > 0 && *child >= shifted_from {
                    *child += shifted_by as usize;
                } else if shifted_by < 0 && *child > shifted_from {
                    *child -= shifted_by.unsigned_abs();
                }
            }
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where S: ListStorage<Element = Self>,
    {
        for i in 0..storage.len() {
            let node = match storage.get_mut(i) {
                Some(node) => node,
                None => continue,
            };
            for child in node.left.iter_mut().chain(node.right.iter_mut()) {
                if *child == previous_index {
                    *child = current_index;
                    return;
                }
            }
        }
    }
}
