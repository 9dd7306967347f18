// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render snapshot: everything a canvas needs for one redraw.

use alloc::vec::Vec;
use arbor_tree::{NodeId, Tree};
use arbor_view::ViewTransform;
use kurbo::Point;

/// One node circle, already mapped to screen space.
#[derive(Clone, Copy, Debug)]
pub struct SceneNode<'a> {
    /// The node this circle renders.
    pub id: NodeId,
    /// Screen-space center.
    pub center: Point,
    /// Screen-space radius (model radius scaled by the zoom).
    pub radius: f64,
    /// The node's label.
    pub label: &'a str,
    /// Whether this node is the current selection.
    pub selected: bool,
}

/// One parent→child edge segment in screen space.
#[derive(Clone, Copy, Debug)]
pub struct SceneEdge {
    /// Screen-space position of the parent's center.
    pub from: Point,
    /// Screen-space position of the child's center.
    pub to: Point,
}

/// A per-frame snapshot of the tree through the view transform.
///
/// Edges come first so a renderer drawing the fields in order paints lines
/// under circles.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    /// Parent→child segments.
    pub edges: Vec<SceneEdge>,
    /// Node circles with labels and the selection flag.
    pub nodes: Vec<SceneNode<'a>>,
}

pub(crate) fn build<'a>(tree: &'a Tree, view: &ViewTransform) -> Scene<'a> {
    let radius = tree.params().node_radius * view.zoom();
    let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));
    let mut nodes = Vec::with_capacity(tree.len());
    for id in tree.ids() {
        let center = view.to_screen(tree.position(id).expect("live node has a position"));
        if let Some(parent) = tree.parent_of(id) {
            let from = view.to_screen(tree.position(parent).expect("live node has a position"));
            edges.push(SceneEdge { from, to: center });
        }
        nodes.push(SceneNode {
            id,
            center,
            radius,
            label: tree.label(id).expect("live node has a label"),
            selected: tree.selected() == Some(id),
        });
    }
    Scene { edges, nodes }
}
