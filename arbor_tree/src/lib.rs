// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Tree: the editing engine behind Arbor's visual binary tree.
//!
//! This crate owns the node set and the structural logic of the editor:
//!
//! - An arena of labeled nodes with parent/left/right links stored as
//!   generational [`NodeId`] handles ([`Tree`]).
//! - Structural edits: [`Tree::add_child`], [`Tree::remove`] (with
//!   BST-style successor promotion for two-child nodes), [`Tree::rename`].
//! - Selection: one node at a time, either directly ([`Tree::select`]) or by
//!   screen-space hit testing through an [`arbor_view::ViewTransform`]
//!   ([`Tree::select_at`]).
//! - The three classical depth-first traversals ([`Tree::traversal`],
//!   [`Tree::traversal_labels`]).
//! - A full layout pass after each edit that positions nodes by in-order
//!   rank and depth ([`LayoutParams`]).
//!
//! Invalid structural requests never partially apply: they are rejected with
//! a [`TreeError`] and the tree is left exactly as it was.
//!
//! ## Example
//!
//! ```rust
//! use arbor_tree::{Side, Traversal, Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! let root = tree.root();
//! tree.rename(root, "A").unwrap();
//! let b = tree.add_child(root, "B", Side::Left).unwrap();
//! tree.add_child(root, "C", Side::Right).unwrap();
//! tree.add_child(b, "D", Side::Left).unwrap();
//!
//! assert_eq!(tree.traversal_labels(Traversal::Preorder), ["A", "B", "D", "C"]);
//!
//! // The right slot of the root is taken; the tree is unchanged.
//! assert_eq!(tree.add_child(root, "X", Side::Right), Err(TreeError::SlotOccupied));
//!
//! // Two-child removal relabels `b` with its in-order successor ("D" here
//! // is on the left, so the successor comes from the right subtree).
//! tree.add_child(b, "E", Side::Right).unwrap();
//! tree.remove(b).unwrap();
//! assert_eq!(tree.label(b), Some("E"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod traverse;
mod tree;
mod types;

pub use tree::Tree;
pub use types::{LayoutParams, NodeId, Side, Traversal, TreeError};
