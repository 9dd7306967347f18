// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first traversals over the tree.
//!
//! All three orders visit every live node exactly once, skipping absent
//! children, and are pure reads. They run with explicit stacks so that
//! pathologically skewed trees cannot overflow the call stack.

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::tree::Tree;
use crate::types::{NodeId, Traversal};

type Stack = SmallVec<[NodeId; 32]>;

impl Tree {
    /// The node identifiers in the given depth-first order, starting from
    /// the root.
    pub fn traversal(&self, order: Traversal) -> Vec<NodeId> {
        match order {
            Traversal::Inorder => self.inorder(),
            Traversal::Preorder => self.preorder(),
            Traversal::Postorder => self.postorder(),
        }
    }

    /// The node labels in the given depth-first order. Convenience wrapper
    /// over [`Self::traversal`] for display.
    pub fn traversal_labels(&self, order: Traversal) -> Vec<String> {
        self.traversal(order)
            .into_iter()
            .map(|id| String::from(self.node(id).label.as_str()))
            .collect()
    }

    fn inorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Stack::new();
        let mut current = Some(self.root());
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            out.push(id);
            current = self.node(id).right;
        }
        out
    }

    fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Stack::new();
        stack.push(self.root());
        while let Some(id) = stack.pop() {
            out.push(id);
            let n = self.node(id);
            // Right first so the left subtree pops first.
            if let Some(r) = n.right {
                stack.push(r);
            }
            if let Some(l) = n.left {
                stack.push(l);
            }
        }
        out
    }

    fn postorder(&self) -> Vec<NodeId> {
        // Emit node-right-left, then reverse into left-right-node.
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Stack::new();
        stack.push(self.root());
        while let Some(id) = stack.pop() {
            out.push(id);
            let n = self.node(id);
            if let Some(l) = n.left {
                stack.push(l);
            }
            if let Some(r) = n.right {
                stack.push(r);
            }
        }
        out.reverse();
        out
    }
}
