// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: pointer events and commands in, tree edits
//! and render snapshots out.

use alloc::string::String;
use arbor_event_state::{ClickKind, MultiClick, PanDrag};
use arbor_tree::{LayoutParams, NodeId, Side, Traversal, Tree};
use arbor_view::ViewTransform;
use kurbo::Point;

use crate::prompt::{Prompt, cleaned};
use crate::scene::{self, Scene};

/// Pointer buttons the controller distinguishes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Selects nodes; a rapid second press edits the selected node's label.
    Primary,
    /// Pans the view while held, typically bound to the middle button.
    Pan,
}

/// Single-threaded controller owning the tree, the view transform, and the
/// pointer-gesture state.
///
/// The host event loop feeds raw pointer/wheel events into the `on_*`
/// methods and maps UI affordances (sidebar buttons, keyboard shortcuts)
/// onto the command methods. Modal interactions go through a [`Prompt`];
/// a dismissed or blank prompt always leaves the tree untouched.
#[derive(Debug)]
pub struct Editor {
    tree: Tree,
    view: ViewTransform,
    clicks: MultiClick,
    drag: PanDrag,
}

impl Editor {
    /// Create an editor over a fresh tree with default layout parameters.
    pub fn new() -> Self {
        Self::with_params(LayoutParams::default())
    }

    /// Create an editor with explicit layout parameters.
    pub fn with_params(params: LayoutParams) -> Self {
        Self {
            tree: Tree::with_params(params),
            view: ViewTransform::new(),
            clicks: MultiClick::new(),
            drag: PanDrag::new(),
        }
    }

    /// Read access to the tree.
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Read access to the view transform.
    pub const fn view(&self) -> &ViewTransform {
        &self.view
    }

    // --- raw pointer/wheel events ---

    /// Handle a pointer press at a screen position.
    ///
    /// Primary presses classify as single or double by elapsed time. A
    /// single press runs screen-space selection (a miss leaves the previous
    /// selection in place); a double press with a current selection opens
    /// the rename prompt seeded with the node's label. Pan presses start a
    /// drag.
    pub fn on_pointer_down(
        &mut self,
        button: PointerButton,
        pos: Point,
        timestamp_ms: u64,
        prompt: &mut dyn Prompt,
    ) {
        match button {
            PointerButton::Primary => match self.clicks.on_press(timestamp_ms) {
                ClickKind::Single => {
                    if let Some(id) = self.tree.select_at(pos, &self.view) {
                        log::trace!("selected {id:?}");
                    }
                }
                ClickKind::Double => {
                    if self.tree.selected().is_some() {
                        self.rename_selected(prompt);
                    }
                }
            },
            PointerButton::Pan => self.drag.begin(pos),
        }
    }

    /// Handle a pointer release.
    pub fn on_pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Pan {
            self.drag.end();
        }
    }

    /// Handle pointer motion; pans the view while a pan drag is active.
    pub fn on_pointer_move(&mut self, pos: Point) {
        if let Some(delta) = self.drag.on_move(pos) {
            self.view.pan_by(delta);
        }
    }

    /// Handle wheel scroll: positive steps zoom in, negative zoom out.
    pub fn on_wheel(&mut self, steps: i32) {
        self.view.zoom_step(steps);
    }

    // --- commands ---

    /// Prompt for a name and add a child of the selected node on `side`.
    ///
    /// Does nothing without a selection. A dismissed or blank prompt adds
    /// nothing. An occupied slot is logged and absorbed rather than surfaced
    /// as an error.
    pub fn add_child(&mut self, side: Side, prompt: &mut dyn Prompt) -> Option<NodeId> {
        let parent = self.tree.selected()?;
        let label = cleaned(prompt.request_text("Add Node", None))?;
        match self.tree.add_child(parent, label, side) {
            Ok(id) => {
                log::debug!("added {id:?} as {side:?} child of {parent:?}");
                Some(id)
            }
            Err(err) => {
                log::debug!("add_child rejected: {err}");
                None
            }
        }
    }

    /// Prompt for a new label for the selected node.
    ///
    /// The prompt is seeded with the current label; dismissing it or
    /// confirming blank text changes nothing. Returns whether a rename was
    /// applied.
    pub fn rename_selected(&mut self, prompt: &mut dyn Prompt) -> bool {
        let Some(id) = self.tree.selected() else {
            return false;
        };
        let initial = self.tree.label(id).map(String::from);
        let Some(label) = cleaned(prompt.request_text("Edit node name", initial.as_deref()))
        else {
            return false;
        };
        // The selection cannot go stale between the reads above.
        self.tree.rename(id, label).is_ok()
    }

    /// Remove the selected node and clear the selection.
    ///
    /// The selection is cleared even when removal is rejected (for the
    /// root). Returns whether a node was removed.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.tree.selected() else {
            return false;
        };
        let removed = match self.tree.remove(id) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("remove rejected: {err}");
                false
            }
        };
        self.tree.deselect();
        removed
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.tree.deselect();
    }

    /// The display string for a traversal, e.g. `"Inorder: D, B, A, C"`.
    pub fn traversal_text(&self, order: Traversal) -> String {
        let labels = self.tree.traversal_labels(order);
        let mut text = String::from(order.name());
        text.push_str(": ");
        text.push_str(&labels.join(", "));
        text
    }

    /// Compute a traversal and present it via the prompt's message box,
    /// titled like `"Inorder Traversal"`.
    pub fn show_traversal(&self, order: Traversal, prompt: &mut dyn Prompt) {
        let mut title = String::from(order.name());
        title.push_str(" Traversal");
        prompt.show_message(&title, &self.traversal_text(order));
    }

    /// Snapshot the tree through the view transform for rendering.
    pub fn scene(&self) -> Scene<'_> {
        scene::build(&self.tree, &self.view)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
