// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous modal prompt capability.
//!
//! The editor never talks to a GUI toolkit directly. Anything that needs a
//! modal interaction, such as asking for a node name or presenting a
//! traversal result, goes through this trait, so a host can back it with
//! real dialogs while tests use a scripted implementation.

use alloc::string::String;

/// Host-provided modal text prompts and message boxes.
///
/// Both calls are synchronous: the editor assumes the interaction has fully
/// completed (or been dismissed) by the time they return, which serializes
/// tree mutation with user confirmation.
pub trait Prompt {
    /// Ask the user for a line of text.
    ///
    /// `initial` seeds the input field, for flows like renaming where the
    /// current value should be editable in place. Returns `None` when the
    /// prompt is dismissed without confirming.
    fn request_text(&mut self, title: &str, initial: Option<&str>) -> Option<String>;

    /// Present a message the user dismisses.
    fn show_message(&mut self, title: &str, body: &str);
}

/// Normalize prompt input: dismissed, empty, or whitespace-only input all
/// mean "no change requested".
pub(crate) fn cleaned(input: Option<String>) -> Option<String> {
    let text = input?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(String::from(trimmed))
    }
}
