use alloc::vec::Vec;

// Explicit stacks used by the iterative algorithms. A tree which is not self-balancing can be
// arbitrarily deep, so those algorithms never recurse.
pub(crate) type Stack<T> = Vec<T>;

/// Implements the collection and formatting traits shared by every tree type. The type must have a single `raw: RawTree<T>` field and implement `Tree` for all `T: Ord`.
#[allow(unused_macros)]
macro_rules! impl_tree_traits {
    ($tree:ident) => {
        impl<T: Ord> Default for $tree<T> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }
        impl<T: Ord> core::iter::FromIterator<T> for $tree<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut tree = Self::new();
                tree.extend(iter);
                tree
            }
        }
        impl<T: Ord> Extend<T> for $tree<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for key in iter {
                    $crate::Tree::insert(self, key);
                }
            }
        }
        impl<T: core::fmt::Debug> core::fmt::Debug for $tree<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($tree))
                    .field("keys", &self.raw.keys(self.raw.in_order(self.raw.root)))
                    .finish()
            }
        }
        impl<T: core::fmt::Display> core::fmt::Display for $tree<T> {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&$crate::Sideways::new(&self.raw), f)
            }
        }
    };
}
