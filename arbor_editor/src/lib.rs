// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Editor: the interaction controller for the visual binary tree.
//!
//! This crate sits between a UI shell and the core crates. The shell owns
//! the window, fonts, real dialogs, buttons, and frame pacing; this crate
//! owns what happens when input arrives:
//!
//! - Pointer and wheel events go to [`Editor::on_pointer_down`],
//!   [`Editor::on_pointer_up`], [`Editor::on_pointer_move`], and
//!   [`Editor::on_wheel`]: selection, double-click rename, pan, and zoom.
//! - Commands the shell maps onto buttons or shortcuts are
//!   [`Editor::add_child`], [`Editor::rename_selected`],
//!   [`Editor::delete_selected`], and [`Editor::show_traversal`].
//! - Each frame the shell pulls a [`Scene`] from [`Editor::scene`] and draws
//!   it: edges first, then circles with labels.
//!
//! Modal interactions are abstracted behind the [`Prompt`] trait, so the
//! controller and its tests never depend on a GUI toolkit. All prompts are
//! synchronous; a dismissed or blank prompt never mutates the tree.
//!
//! ## Example
//!
//! ```rust
//! use arbor_editor::{Editor, PointerButton, Prompt};
//! use arbor_tree::{Side, Traversal};
//!
//! // A host would open real dialogs; this one cancels everything.
//! struct Dismiss;
//! impl Prompt for Dismiss {
//!     fn request_text(&mut self, _title: &str, _initial: Option<&str>) -> Option<String> {
//!         None
//!     }
//!     fn show_message(&mut self, _title: &str, _body: &str) {}
//! }
//!
//! let mut editor = Editor::new();
//! let root = editor.tree().root();
//! let pos = editor.view().to_screen(editor.tree().position(root).unwrap());
//!
//! let mut prompt = Dismiss;
//! editor.on_pointer_down(PointerButton::Primary, pos, 0, &mut prompt);
//! assert_eq!(editor.tree().selected(), Some(root));
//!
//! // The prompt was dismissed, so nothing is added.
//! assert!(editor.add_child(Side::Left, &mut prompt).is_none());
//! assert_eq!(editor.traversal_text(Traversal::Inorder), "Inorder: Root");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod editor;
mod prompt;
mod scene;

pub use editor::{Editor, PointerButton};
pub use prompt::Prompt;
pub use scene::{Scene, SceneEdge, SceneNode};
