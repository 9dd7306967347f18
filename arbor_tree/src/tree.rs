// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, edits, selection, queries.

use alloc::string::String;
use alloc::vec::Vec;
use arbor_view::ViewTransform;
use kurbo::Point;

use crate::types::{LayoutParams, NodeId, Side, TreeError};

/// An editable binary tree of labeled, positioned nodes.
///
/// Nodes live in an arena of slots addressed by generational [`NodeId`]
/// handles; parent and child links are stored as optional identifiers rather
/// than references, so the back-pointing object graph carries no ownership
/// cycles. The tree is created with a single root node that can never be
/// removed, and structural edits keep two invariants:
///
/// - every non-root node's parent has a child slot pointing back at it, and
/// - every live node is reachable from the root.
///
/// Node positions are recomputed by a full layout pass after every
/// structural edit, so positions read back through [`Tree::position`] are
/// always current.
///
/// ## Example
///
/// ```rust
/// use arbor_tree::{Side, Traversal, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.root();
/// let b = tree.add_child(root, "B", Side::Left).unwrap();
/// tree.add_child(root, "C", Side::Right).unwrap();
/// tree.add_child(b, "D", Side::Left).unwrap();
///
/// let labels = tree.traversal_labels(Traversal::Inorder);
/// assert_eq!(labels, ["D", "B", "Root", "C"]);
/// ```
#[derive(Clone, Debug)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: NodeId,
    selected: Option<NodeId>,
    params: LayoutParams,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) label: String,
    pub(crate) pos: Point,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    fn new(generation: u32, label: String) -> Self {
        Self {
            generation,
            label,
            pos: Point::ZERO,
            parent: None,
            left: None,
            right: None,
        }
    }
}

impl Tree {
    /// Create a tree with the default layout parameters and a root node
    /// labeled `"Root"`.
    pub fn new() -> Self {
        Self::with_params(LayoutParams::default())
    }

    /// Create a tree with explicit layout parameters.
    pub fn with_params(params: LayoutParams) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 1),
            selected: None,
            params,
        };
        tree.root = tree.alloc(String::from("Root"));
        tree.reflow();
        tree
    }

    /// The root node. Always live; never changes over the tree's lifetime.
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The currently selected node, if any.
    pub const fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// The layout parameters this tree was built with.
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// An identifier is live if its slot is occupied and its generation
    /// matches the slot's current generation. See [`NodeId`] for the
    /// generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// There is always at least the root.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the identifiers of all live nodes, in arena-slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, slot)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            slot.as_ref().map(|n| NodeId::new(i as u32, n.generation))
        })
    }

    /// The label of a live node, or `None` for stale identifiers.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.label.as_str())
    }

    /// The model-space position of a live node, as of the last layout pass.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node_opt(id).map(|n| n.pos)
    }

    /// The parent of a live node, or `None` for the root and for stale
    /// identifiers.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// The child of a live node on the given side, if present.
    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| match side {
            Side::Left => n.left,
            Side::Right => n.right,
        })
    }

    /// Create a new node under `parent` on the given side.
    ///
    /// Fails with [`TreeError::Stale`] if `parent` is not live, and with
    /// [`TreeError::SlotOccupied`] if `parent` already has a child on that
    /// side; the tree is unchanged in both cases. Labels carry no uniqueness
    /// constraint. On success the whole tree is relaid out.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        side: Side,
    ) -> Result<NodeId, TreeError> {
        if !self.is_alive(parent) {
            return Err(TreeError::Stale);
        }
        if self.child(parent, side).is_some() {
            return Err(TreeError::SlotOccupied);
        }
        let id = self.alloc(label.into());
        self.node_mut(id).parent = Some(parent);
        let p = self.node_mut(parent);
        match side {
            Side::Left => p.left = Some(id),
            Side::Right => p.right = Some(id),
        }
        self.reflow();
        Ok(id)
    }

    /// Remove a node, with the standard case analysis on its child count.
    ///
    /// - No children: the node is detached from its parent's slot.
    /// - One child: the node is spliced out; its parent's slot adopts the
    ///   sole child and the child's parent link is rewritten.
    /// - Two children: the in-order successor's label is copied onto the
    ///   node (whose identity and position are unchanged) and the successor
    ///   is removed instead. This is standard BST deletion, applied
    ///   uniformly even though labels are not kept in sorted order.
    ///
    /// Promotion is an explicit loop rather than call recursion, so deeply
    /// skewed trees cannot overflow the stack. If the slot that is finally
    /// discarded was selected, the selection is cleared. Fails with
    /// [`TreeError::IsRoot`] for the root and [`TreeError::Stale`] for dead
    /// identifiers, leaving the tree unchanged.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::IsRoot);
        }
        if !self.is_alive(id) {
            return Err(TreeError::Stale);
        }

        // Successor promotion: while the target has two children, copy the
        // leftmost label of its right subtree onto it and retarget the
        // removal at that successor. The successor never has a left child,
        // so this terminates at a node with at most one child.
        let mut target = id;
        loop {
            let (left, right) = {
                let n = self.node(target);
                (n.left, n.right)
            };
            let (Some(_), Some(right)) = (left, right) else {
                break;
            };
            let successor = self.leftmost(right);
            let label = self.node(successor).label.clone();
            self.node_mut(target).label = label;
            target = successor;
        }

        // Detach or splice. `target` descends from the non-root `id`, so it
        // always has a parent.
        let (parent, child) = {
            let n = self.node(target);
            (n.parent, n.left.or(n.right))
        };
        if let Some(p) = parent {
            let pn = self.node_mut(p);
            if pn.left == Some(target) {
                pn.left = child;
            } else if pn.right == Some(target) {
                pn.right = child;
            }
        }
        if let Some(c) = child {
            self.node_mut(c).parent = parent;
        }
        if self.selected == Some(target) {
            self.selected = None;
        }
        self.nodes[target.idx()] = None;
        self.free_list.push(target.idx());
        self.reflow();
        Ok(())
    }

    /// Replace a live node's label. Positions are unaffected, so no layout
    /// pass runs.
    pub fn rename(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        match self.node_opt_mut(id) {
            Some(n) => {
                n.label = label.into();
                Ok(())
            }
            None => Err(TreeError::Stale),
        }
    }

    /// Select a live node directly.
    pub fn select(&mut self, id: NodeId) -> Result<(), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::Stale);
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the selection; no-op if nothing is selected.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Hit-test a screen-space point against all node circles and select the
    /// matching node, if any.
    ///
    /// Each node's circle is its model-space position and the configured
    /// [`LayoutParams::node_radius`], tested through the view transform.
    /// When circles overlap after zoom/pan, the most recently created node
    /// wins (higher generation, then higher slot index), which makes the
    /// result deterministic. A hit replaces any previous selection and is
    /// returned; a miss returns `None` and leaves the selection unchanged.
    pub fn select_at(&mut self, screen_pt: Point, view: &ViewTransform) -> Option<NodeId> {
        let radius = self.params.node_radius;
        let mut best: Option<NodeId> = None;
        for id in self.ids() {
            if !view.hits_circle(screen_pt, self.node(id).pos, radius) {
                continue;
            }
            match best {
                Some(b) if !id_is_newer(id, b) => {}
                _ => best = Some(id),
            }
        }
        if best.is_some() {
            self.selected = best;
        }
        best
    }

    // --- internals ---

    fn alloc(&mut self, label: String) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, label));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, label)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new((self.nodes.len() - 1) as u32, generation)
        }
    }

    /// Leftmost node of the subtree rooted at `id`; the in-order successor
    /// helper for two-child removal.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn id_is_newer(a: NodeId, b: NodeId) -> bool {
    (a.1 > b.1) || (a.1 == b.1 && a.0 > b.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Traversal;
    use alloc::string::ToString;
    use alloc::vec;
    use kurbo::Vec2;

    /// Checks the back-reference invariant over every live node: a non-root
    /// node's parent has a child slot pointing back at it, and child links
    /// point at live nodes that name this node as their parent.
    fn assert_links_consistent(tree: &Tree) {
        for id in tree.ids() {
            match tree.parent_of(id) {
                None => assert_eq!(id, tree.root(), "only the root may lack a parent"),
                Some(p) => {
                    let back = tree.child(p, Side::Left) == Some(id)
                        || tree.child(p, Side::Right) == Some(id);
                    assert!(back, "parent's child slot must point back at {id:?}");
                }
            }
            for side in [Side::Left, Side::Right] {
                if let Some(c) = tree.child(id, side) {
                    assert!(tree.is_alive(c), "child link to dead node");
                    assert_eq!(tree.parent_of(c), Some(id), "child's parent link mismatch");
                }
            }
        }
    }

    fn sample_tree() -> (Tree, NodeId, NodeId, NodeId) {
        // Root "A" with left "B", right "C", and "D" under "B".
        let mut tree = Tree::new();
        let a = tree.root();
        tree.rename(a, "A").unwrap();
        let b = tree.add_child(a, "B", Side::Left).unwrap();
        let c = tree.add_child(a, "C", Side::Right).unwrap();
        tree.add_child(b, "D", Side::Left).unwrap();
        (tree, a, b, c)
    }

    #[test]
    fn new_tree_has_root_only() {
        let tree = Tree::new();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.label(tree.root()), Some("Root"));
        assert_eq!(tree.parent_of(tree.root()), None);
        assert_eq!(tree.selected(), None);
        assert_eq!(tree.position(tree.root()), Some(Point::new(400.0, 100.0)));
    }

    #[test]
    fn add_child_links_both_ways() {
        let mut tree = Tree::new();
        let root = tree.root();
        let l = tree.add_child(root, "L", Side::Left).unwrap();
        assert_eq!(tree.parent_of(l), Some(root));
        assert_eq!(tree.child(root, Side::Left), Some(l));
        assert_eq!(tree.child(root, Side::Right), None);
        assert_links_consistent(&tree);
    }

    #[test]
    fn add_child_occupied_slot_is_rejected_unchanged() {
        let mut tree = Tree::new();
        let root = tree.root();
        let first = tree.add_child(root, "first", Side::Right).unwrap();
        let before: Vec<_> = tree.traversal_labels(Traversal::Preorder);

        let second = tree.add_child(root, "second", Side::Right);
        assert_eq!(second, Err(TreeError::SlotOccupied));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.child(root, Side::Right), Some(first));
        assert_eq!(tree.traversal_labels(Traversal::Preorder), before);
    }

    #[test]
    fn add_child_to_stale_parent_is_rejected() {
        let mut tree = Tree::new();
        let root = tree.root();
        let l = tree.add_child(root, "L", Side::Left).unwrap();
        tree.remove(l).unwrap();
        assert_eq!(tree.add_child(l, "X", Side::Left), Err(TreeError::Stale));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_root_is_rejected_unchanged() {
        let (mut tree, a, ..) = sample_tree();
        let before = tree.traversal_labels(Traversal::Inorder);
        assert_eq!(tree.remove(a), Err(TreeError::IsRoot));
        assert_eq!(tree.root(), a);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.traversal_labels(Traversal::Inorder), before);
    }

    #[test]
    fn remove_leaf_detaches() {
        let (mut tree, _, b, _) = sample_tree();
        let d = tree.child(b, Side::Left).unwrap();
        tree.remove(d).unwrap();
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_alive(d));
        assert_eq!(tree.child(b, Side::Left), None);
        for order in [Traversal::Inorder, Traversal::Preorder, Traversal::Postorder] {
            assert!(!tree.traversal_labels(order).iter().any(|l| l == "D"));
        }
        assert_links_consistent(&tree);
    }

    #[test]
    fn remove_single_child_node_splices() {
        let (mut tree, a, b, _) = sample_tree();
        let d = tree.child(b, Side::Left).unwrap();
        // B has only the left child D; removing B should hang D off A's left.
        tree.remove(b).unwrap();
        assert_eq!(tree.child(a, Side::Left), Some(d));
        assert_eq!(tree.parent_of(d), Some(a));
        assert!(!tree.is_alive(b));
        assert_eq!(tree.len(), 3);
        assert_links_consistent(&tree);
    }

    #[test]
    fn remove_two_child_node_promotes_inorder_successor() {
        // A with children B/C; B has children D/E. Removing B promotes E
        // (leftmost of B's right subtree) onto B's slot identity.
        let mut tree = Tree::new();
        let a = tree.root();
        tree.rename(a, "A").unwrap();
        let b = tree.add_child(a, "B", Side::Left).unwrap();
        tree.add_child(a, "C", Side::Right).unwrap();
        tree.add_child(b, "D", Side::Left).unwrap();
        let e = tree.add_child(b, "E", Side::Right).unwrap();

        let inorder_before = tree.traversal_labels(Traversal::Inorder);
        assert_eq!(inorder_before, ["D", "B", "E", "A", "C"]);

        tree.remove(b).unwrap();
        assert_eq!(tree.len(), 4);
        // The node that kept its identity is `b`, now relabeled "E"; the
        // discarded slot is the old successor node.
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(e));
        assert_eq!(tree.label(b), Some("E"));
        // In-order order equals the old order with the removed label's slot
        // collapsed onto the successor's duplicate.
        assert_eq!(tree.traversal_labels(Traversal::Inorder), ["D", "E", "A", "C"]);
        assert_links_consistent(&tree);
    }

    #[test]
    fn remove_two_child_node_keeps_position() {
        let mut tree = Tree::new();
        let a = tree.root();
        let b = tree.add_child(a, "B", Side::Left).unwrap();
        tree.add_child(b, "D", Side::Left).unwrap();
        tree.add_child(b, "E", Side::Right).unwrap();
        tree.add_child(a, "C", Side::Right).unwrap();

        tree.remove(b).unwrap();
        // `b` survived with the successor's label; its position must agree
        // with a fresh layout of the shrunken tree, not with stale data.
        let pos = tree.position(b).unwrap();
        let params = *tree.params();
        assert_eq!(pos.y, params.origin.y + params.row_spacing);
        assert_links_consistent(&tree);
    }

    #[test]
    fn deep_successor_walk_stays_iterative() {
        // A two-child node whose right subtree is a long left spine: finding
        // the in-order successor walks thousands of links in one `remove`.
        let mut tree = Tree::new();
        let root = tree.root();
        let x = tree.add_child(root, "X", Side::Left).unwrap();
        tree.add_child(x, "L", Side::Left).unwrap();
        let mut spine = tree.add_child(x, "R", Side::Right).unwrap();
        for i in 0..5_000 {
            spine = tree.add_child(spine, i.to_string(), Side::Left).unwrap();
        }
        let before = tree.len();
        tree.remove(x).unwrap();
        assert_eq!(tree.len(), before - 1);
        assert!(tree.is_alive(x));
        // The deepest label was promoted onto `x`.
        assert_eq!(tree.label(x), Some("4999"));
        assert_links_consistent(&tree);
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.add_child(root, "A", Side::Left).unwrap();
        tree.remove(a).unwrap();
        let b = tree.add_child(root, "B", Side::Left).unwrap();
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn rename_changes_label_only() {
        let mut tree = Tree::new();
        let root = tree.root();
        let pos = tree.position(root).unwrap();
        tree.rename(root, "renamed").unwrap();
        assert_eq!(tree.label(root), Some("renamed"));
        assert_eq!(tree.position(root), Some(pos));

        let l = tree.add_child(root, "L", Side::Left).unwrap();
        tree.remove(l).unwrap();
        assert_eq!(tree.rename(l, "ghost"), Err(TreeError::Stale));
    }

    #[test]
    fn selection_tracks_removal_of_discarded_slot() {
        let (mut tree, _, b, _) = sample_tree();
        let d = tree.child(b, Side::Left).unwrap();
        tree.select(d).unwrap();
        tree.remove(d).unwrap();
        assert_eq!(tree.selected(), None, "selection must not dangle");
    }

    #[test]
    fn selection_survives_promotion_onto_selected_node() {
        // Selecting a two-child node and removing it keeps the selection:
        // the node keeps its identity and only its label changes.
        let mut tree = Tree::new();
        let a = tree.root();
        let b = tree.add_child(a, "B", Side::Left).unwrap();
        tree.add_child(b, "D", Side::Left).unwrap();
        tree.add_child(b, "E", Side::Right).unwrap();
        tree.select(b).unwrap();
        tree.remove(b).unwrap();
        assert_eq!(tree.selected(), Some(b));
        assert_eq!(tree.label(b), Some("E"));
    }

    #[test]
    fn select_at_hits_and_replaces_selection() {
        let (mut tree, _, b, c) = sample_tree();
        let view = ViewTransform::new();

        let b_pos = tree.position(b).unwrap();
        assert_eq!(tree.select_at(b_pos, &view), Some(b));
        assert_eq!(tree.selected(), Some(b));

        let c_pos = tree.position(c).unwrap();
        assert_eq!(tree.select_at(c_pos, &view), Some(c));
        assert_eq!(tree.selected(), Some(c));
    }

    #[test]
    fn select_at_miss_leaves_selection_unchanged() {
        let (mut tree, _, b, _) = sample_tree();
        let view = ViewTransform::new();
        tree.select(b).unwrap();

        let far = Point::new(-10_000.0, -10_000.0);
        assert_eq!(tree.select_at(far, &view), None);
        assert_eq!(tree.selected(), Some(b));
    }

    #[test]
    fn select_at_respects_zoom_and_pan() {
        let (mut tree, _, b, _) = sample_tree();
        let mut view = ViewTransform::new();
        view.zoom_by(0.25);
        view.pan_by(Vec2::new(300.0, 120.0));

        let screen = view.to_screen(tree.position(b).unwrap());
        assert_eq!(tree.select_at(screen, &view), Some(b));

        // Just outside the scaled radius must miss.
        let r = tree.params().node_radius * view.zoom();
        let outside = Point::new(screen.x + r + 0.001, screen.y);
        tree.deselect();
        assert_eq!(tree.select_at(outside, &view), None);
        assert_eq!(tree.selected(), None);
    }

    #[test]
    fn overlapping_circles_newest_node_wins() {
        // With a radius far larger than the layout spacing, every circle
        // covers every node; the most recently created node must win.
        let mut tree = Tree::with_params(LayoutParams {
            node_radius: 10_000.0,
            ..LayoutParams::default()
        });
        let root = tree.root();
        tree.add_child(root, "B", Side::Left).unwrap();
        let newest = tree.add_child(root, "C", Side::Right).unwrap();

        let view = ViewTransform::new();
        let hit = tree.select_at(tree.position(root).unwrap(), &view);
        assert_eq!(hit, Some(newest));
    }

    #[test]
    fn link_invariant_holds_over_edit_sequences() {
        let mut tree = Tree::new();
        let root = tree.root();
        let mut live = vec![root];
        // A deterministic add/remove churn.
        for i in 0_usize..200 {
            let parent = live[i % live.len()];
            let side = if i % 2 == 0 { Side::Left } else { Side::Right };
            if let Ok(id) = tree.add_child(parent, i.to_string(), side) {
                live.push(id);
            }
            if i % 5 == 0 {
                let victim = live[(i / 5) % live.len()];
                if tree.remove(victim).is_ok() {
                    live.retain(|&n| tree.is_alive(n));
                }
            }
            assert_links_consistent(&tree);
        }
    }
}
