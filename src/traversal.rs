//! Depth-first and level-order traversals, producing sequences of node indices.

use alloc::vec::Vec;
use crate::{
    base::{Link, RawTree},
    util::Stack,
};

impl<T> RawTree<T> {
    /// Node, left subtree, right subtree.
    pub(crate) fn pre_order(&self, from: Option<usize>) -> Vec<usize> {
        let mut order = Vec::new();
        let mut pending: Stack<usize> = Stack::new();
        pending.extend(from);
        while let Some(index) = pending.pop() {
            order.push(index);
            let node = self.node(index);
            pending.extend(node.right);
            pending.extend(node.left);
        }
        order
    }
    /// Left subtree, node, right subtree.
    pub(crate) fn in_order(&self, from: Option<usize>) -> Vec<usize> {
        let mut order = Vec::new();
        let mut pending: Stack<usize> = Stack::new();
        let mut current = from;
        loop {
            while let Some(index) = current {
                pending.push(index);
                current = self.left(index);
            }
            match pending.pop() {
                Some(index) => {
                    order.push(index);
                    current = self.right(index);
                }
                None => break,
            }
        }
        order
    }
    /// Left subtree, right subtree, node.
    pub(crate) fn post_order(&self, from: Option<usize>) -> Vec<usize> {
        // Node-right-left pre-order, reversed
        let mut order = Vec::new();
        let mut pending: Stack<usize> = Stack::new();
        pending.extend(from);
        while let Some(index) = pending.pop() {
            order.push(index);
            let node = self.node(index);
            pending.extend(node.left);
            pending.extend(node.right);
        }
        order.reverse();
        order
    }
    /// Breadth-first order, produced by one fixed-depth descent per level.
    pub(crate) fn level_order(&self) -> Vec<usize> {
        let mut order = Vec::new();
        for level in 1..=self.height(self.root) {
            self.visit_level(level, |_, index| order.push(index));
        }
        order
    }
    /// Calls `f` on every node at depth `level` (the root being at depth 1), left to right, along with the slot holding the node.
    pub(crate) fn visit_level(&self, level: usize, mut f: impl FnMut(Link, usize)) {
        let mut pending: Stack<(Link, usize, usize)> = Stack::new();
        pending.extend(self.root.map(|root| (Link::Root, root, 1)));
        while let Some((link, index, depth)) = pending.pop() {
            if depth == level {
                f(link, index);
                continue;
            }
            if depth < level {
                let node = self.node(index);
                pending.extend(node.right.map(|right| (Link::Right(index), right, depth + 1)));
                pending.extend(node.left.map(|left| (Link::Left(index), left, depth + 1)));
            }
        }
    }
}
