use core::fmt::{self, Display, Formatter};
use alloc::string::String;
use crate::{base::RawTree, util::Stack};

/// A sideways ASCII drawing of a tree, meant for eyeballing trees while debugging.
///
/// The right subtree is drawn above its parent and the left one below, with every node printed as `key:height`. The exact layout is not stable.
///
/// Created by [`Tree::sideways`] for the whole tree or by [`NodeRef::sideways`] for the subtree under a node.
///
/// [`Tree::sideways`]: trait.Tree.html#method.sideways " "
/// [`NodeRef::sideways`]: struct.NodeRef.html#method.sideways " "
#[derive(Debug)]
pub struct Sideways<'a, T> {
    tree: &'a RawTree<T>,
    from: Option<usize>,
}
impl<'a, T> Sideways<'a, T> {
    #[inline(always)]
    pub(crate) fn new(tree: &'a RawTree<T>) -> Self {
        Self {
            tree,
            from: tree.root,
        }
    }
    #[inline(always)]
    pub(crate) fn from_node(tree: &'a RawTree<T>, index: usize) -> Self {
        Self {
            tree,
            from: Some(index),
        }
    }
}
impl<T> Copy for Sideways<'_, T> {}
impl<T> Clone for Sideways<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

/// Whether a node hangs to the right of its parent and the indentation of its line; `None` for the root.
type Placement = Option<(bool, String)>;

enum Step {
    Expand(usize, Placement),
    Draw(usize, Placement),
}

fn child_placement(parent: &Placement, is_right: bool) -> Placement {
    let mut indent = String::new();
    if let Some((parent_is_right, parent_indent)) = parent {
        indent.push_str(parent_indent);
        indent.push_str(if *parent_is_right == is_right {
            "      "
        } else {
            " |    "
        });
    }
    Some((is_right, indent))
}

impl<T: Display> Display for Sideways<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = match self.from {
            Some(root) => root,
            None => return writeln!(f, "(empty)"),
        };
        let mut pending: Stack<Step> = Stack::new();
        pending.push(Step::Expand(root, None));
        while let Some(step) = pending.pop() {
            match step {
                Step::Expand(index, placement) => {
                    let node = self.tree.node(index);
                    if let Some(left) = node.left {
                        pending.push(Step::Expand(left, child_placement(&placement, false)));
                    }
                    let right = node.right.map(|right| (right, child_placement(&placement, true)));
                    pending.push(Step::Draw(index, placement));
                    if let Some((right, placement)) = right {
                        pending.push(Step::Expand(right, placement));
                    }
                }
                Step::Draw(index, placement) => {
                    let key = self.tree.key(index);
                    let height = self.tree.height(Some(index));
                    match placement {
                        Some((is_right, indent)) => {
                            let branch = if is_right { " /" } else { " \\" };
                            writeln!(f, "{}{}-- {}:{}", indent, branch, key, height)?;
                        }
                        None => writeln!(f, "{}:{}", key, height)?,
                    }
                }
            }
        }
        Ok(())
    }
}
