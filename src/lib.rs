//! Implements arena-allocated binary trees, binary search trees and AVL trees, along with the algorithms which work on all of them.
//!
//! # Overview
//! All trees in Kindling are ["arena-allocated trees"][arena tree blog post]: nodes are stored in a single backing storage and link to their children using indices into it instead of pointers. The storage is a [`SparseVec`] from Granite, which leaves a hole behind a removed node instead of shifting the nodes after it, so the index of a node never changes for as long as the node exists.
//!
//! There are three kinds of trees, all of which implement the [`Tree`] trait:
//! - [`BinaryTree`]: does not keep its keys in any particular order. Insertion still walks down by comparison, but deletion replaces the deleted node with the deepest node on the last level, and lookups which can't rely on ordering look at every node.
//! - [`BinarySearchTree`]: keeps every key of a left subtree smaller, and every key of a right subtree larger, than the key of the subtree's root. Deletion replaces a node with two children with its in-order successor.
//! - [`AvlTree`]: a binary search tree which additionally keeps the heights of the two subtrees of every node within 1 of each other, using rotations after every insertion and deletion.
//!
//! Keys are unique within a tree; inserting a key which is already there does nothing.
//!
//! ```rust
//! use kindling::{AvlTree, Tree};
//!
//! let mut tree = AvlTree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
//! assert_eq!(tree.min(), Some(&1));
//! ```
//!
//! # Diagnostics
//! Structural changes (rotations, deletions, released subtrees) are reported through [`tracing`] at the `trace` and `debug` levels. Nothing is emitted unless the application installs a subscriber.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only turns on the standard library support of `tracing` and `thiserror`. *An allocator is required either way.*
//! - `binary_tree`, `search_tree`, `avl_tree` (**enabled by default**): the respective tree types. The trees don't depend on each other and can be enabled separately.
//! - `union_optimizations`: enables the union-based layout optimizations in Granite, decreasing memory usage of the sparse storage. **Requires a nightly compiler** and thus is disabled by default.
//! - `doc_cfg`: marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `granite` (**required**): `^1.0`
//!
//! [`SparseVec`]: https://docs.rs/granite/*/granite/type.SparseVec.html " "
//! [`tracing`]: https://docs.rs/tracing/*/tracing/ " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

use thiserror::Error;

#[macro_use]
mod util;
pub mod base;
mod traversal;

mod node;
pub use node::Node;
mod node_ref;
pub use node_ref::NodeRef;
mod node_ref_mut;
pub use node_ref_mut::NodeRefMut;

mod tree;
pub use tree::Tree;
mod sideways;
pub use sideways::Sideways;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryTree;

#[cfg(feature = "search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
pub mod search_tree;
#[cfg(feature = "search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
pub use search_tree::BinarySearchTree;

#[cfg(feature = "avl_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
pub mod avl_tree;
#[cfg(feature = "avl_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
pub use avl_tree::AvlTree;

/// The error type returned by lookups which need two keys to be present in a subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LookupError {
    /// The first of the two keys is not in the subtree.
    #[error("the first key is not present in the subtree")]
    FirstKeyMissing,
    /// The second of the two keys is not in the subtree.
    #[error("the second key is not present in the subtree")]
    SecondKeyMissing,
}

/// The error type returned by `validate` on the ordered tree types, describing the first broken invariant found.
///
/// Those invariants can only be broken by editing keys or children by hand through [`NodeRefMut`].
///
/// [`NodeRefMut`]: struct.NodeRefMut.html " "
#[cfg(any(feature = "search_tree", feature = "avl_tree"))]
#[cfg_attr(feature = "doc_cfg", doc(cfg(any(feature = "search_tree", feature = "avl_tree"))))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum InvariantViolation {
    /// A key is out of order with respect to one of its ancestors.
    #[error("key at depth {depth} is out of order")]
    Unordered {
        /// The depth of the offending node, the root being at depth 0.
        depth: usize,
    },
    /// The heights of the subtrees of a node differ by more than 1.
    #[error("subtree heights differ by {difference} at depth {depth}")]
    Unbalanced {
        /// The depth of the offending node, the root being at depth 0.
        depth: usize,
        /// The height of the left subtree minus the height of the right one.
        difference: isize,
    },
}

/// A prelude for using Kindling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        Tree as _,
        NodeRef as TreeNodeRef,
        NodeRefMut as TreeNodeRefMut,
        LookupError as TreeLookupError,
    };
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::BinaryTree;
    #[cfg(feature = "search_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
    #[doc(no_inline)]
    pub use crate::BinarySearchTree;
    #[cfg(feature = "avl_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
    #[doc(no_inline)]
    pub use crate::AvlTree;
}
