// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree engine: node identifiers, sides, traversal
//! orders, layout parameters, and the structural error enum.

use kurbo::Point;

/// Identifier for a node in the tree (generational).
///
/// A `NodeId` stays valid until its node is removed. Removing a node frees
/// its arena slot for reuse with a bumped generation, so identifiers held
/// across a removal go stale instead of silently pointing at a new node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Which child slot of a parent node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// Depth-first traversal orders over the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Left subtree, then node, then right subtree.
    Inorder,
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

impl Traversal {
    /// Human-readable name, capitalized as displayed to users
    /// (`"Inorder"`, `"Preorder"`, `"Postorder"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inorder => "Inorder",
            Self::Preorder => "Preorder",
            Self::Postorder => "Postorder",
        }
    }
}

/// Why a structural edit was rejected.
///
/// Rejected edits leave the tree completely unchanged; callers that want the
/// "silently absorb invalid requests" behavior can simply discard the error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TreeError {
    /// The identifier does not refer to a live node of this tree.
    Stale,
    /// The requested child slot is already occupied.
    SlotOccupied,
    /// The root node cannot be removed.
    IsRoot,
}

impl core::fmt::Display for TreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Stale => "node identifier is stale",
            Self::SlotOccupied => "child slot is already occupied",
            Self::IsRoot => "the root node cannot be removed",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for TreeError {}

/// Spacing constants used by the layout pass, plus the node circle radius
/// that screen-space selection tests against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Model-space position given to the leftmost node at depth zero.
    pub origin: Point,
    /// Horizontal distance the in-order cursor advances between nodes.
    pub column_spacing: f64,
    /// Vertical distance between consecutive depths.
    pub row_spacing: f64,
    /// Model-space radius of a node's circle.
    pub node_radius: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            origin: Point::new(400.0, 100.0),
            column_spacing: 150.0,
            row_spacing: 100.0,
            node_radius: 30.0,
        }
    }
}
