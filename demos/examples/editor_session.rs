// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless editing session: build a tree through the controller, pan and
//! zoom the view, and print the scene and traversals a UI shell would draw.
//!
//! Prompts are scripted, standing in for the modal dialogs a real shell
//! would open.
//!
//! Run:
//! - `cargo run -p arbor_demos --example editor_session`

use std::collections::VecDeque;

use arbor_editor::{Editor, PointerButton, Prompt};
use arbor_tree::{Side, Traversal};
use kurbo::Point;

/// Scripted prompt: hands out canned names and prints message boxes.
struct ScriptedPrompt {
    names: VecDeque<&'static str>,
}

impl Prompt for ScriptedPrompt {
    fn request_text(&mut self, title: &str, initial: Option<&str>) -> Option<String> {
        let reply = self.names.pop_front()?;
        match initial {
            Some(old) => println!("[{title}] {old:?} -> {reply:?}"),
            None => println!("[{title}] -> {reply:?}"),
        }
        Some(reply.to_string())
    }

    fn show_message(&mut self, title: &str, body: &str) {
        println!("== {title} ==\n{body}");
    }
}

fn screen_pos(editor: &Editor, id: arbor_tree::NodeId) -> Point {
    editor.view().to_screen(editor.tree().position(id).unwrap())
}

fn main() {
    env_logger::init();

    let mut editor = Editor::new();
    let mut prompt = ScriptedPrompt {
        names: ["B", "C", "D", "A"].into_iter().collect(),
    };

    // Select the root and grow the worked-example tree: B left, C right,
    // then D under B.
    let root = editor.tree().root();
    editor.on_pointer_down(PointerButton::Primary, screen_pos(&editor, root), 0, &mut prompt);
    let b = editor.add_child(Side::Left, &mut prompt).expect("left slot is free");
    editor.add_child(Side::Right, &mut prompt).expect("right slot is free");

    editor.on_pointer_down(PointerButton::Primary, screen_pos(&editor, b), 2_000, &mut prompt);
    editor.add_child(Side::Left, &mut prompt).expect("B's left slot is free");

    // Double-click the root to rename it to "A".
    let root_pos = screen_pos(&editor, root);
    editor.on_pointer_down(PointerButton::Primary, root_pos, 4_000, &mut prompt);
    editor.on_pointer_down(PointerButton::Primary, root_pos, 4_100, &mut prompt);

    // Pan with the drag button and zoom in a couple of wheel steps.
    editor.on_pointer_down(PointerButton::Pan, Point::new(0.0, 0.0), 5_000, &mut prompt);
    editor.on_pointer_move(Point::new(-120.0, 40.0));
    editor.on_pointer_up(PointerButton::Pan);
    editor.on_wheel(2);

    println!(
        "\nview: zoom {:.3}, pan ({:.1}, {:.1})",
        editor.view().zoom(),
        editor.view().pan().x,
        editor.view().pan().y
    );

    let scene = editor.scene();
    println!("scene: {} nodes, {} edges", scene.nodes.len(), scene.edges.len());
    for node in &scene.nodes {
        let marker = if node.selected { " (selected)" } else { "" };
        println!(
            "  {:>4}  at ({:7.1}, {:6.1}) r {:4.1}{marker}",
            node.label, node.center.x, node.center.y, node.radius
        );
    }

    println!();
    for order in [Traversal::Inorder, Traversal::Preorder, Traversal::Postorder] {
        editor.show_traversal(order, &mut prompt);
    }
}
