// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-tree layout: in-order cursor placement with depth-scaled rows.

use kurbo::Point;
use smallvec::SmallVec;

use crate::tree::Tree;
use crate::types::NodeId;

impl Tree {
    /// Recompute every node's model-space position from the tree shape.
    ///
    /// The horizontal cursor advances by one column per in-order visit and
    /// the vertical coordinate is the node's depth scaled by the row
    /// spacing, so the left-to-right ordering of nodes on screen always
    /// matches the in-order traversal. This is not a minimal-width tree
    /// drawing: sibling subtrees may overlap or waste space, which is an
    /// accepted property of the scheme, not a defect.
    ///
    /// Runs in O(live nodes) with an explicit stack, and is invoked after
    /// every structural edit.
    pub(crate) fn reflow(&mut self) {
        let params = *self.params();
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        let mut current = Some((self.root(), 0_usize));
        let mut rank = 0_usize;
        while current.is_some() || !stack.is_empty() {
            while let Some((id, depth)) = current {
                stack.push((id, depth));
                current = self.node(id).left.map(|l| (l, depth + 1));
            }
            let Some((id, depth)) = stack.pop() else {
                break;
            };
            let x = params.origin.x + rank as f64 * params.column_spacing;
            let y = params.origin.y + depth as f64 * params.row_spacing;
            self.node_mut(id).pos = Point::new(x, y);
            rank += 1;
            current = self.node(id).right.map(|r| (r, depth + 1));
        }
    }
}
