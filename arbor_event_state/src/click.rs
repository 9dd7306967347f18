// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-click recognition by elapsed time between presses.
//!
//! A press within the configured window of the previous press is a double
//! click; anything later (or the first press ever) is a single click. A
//! recognized double click consumes its anchor, so a third rapid press
//! starts a fresh cycle instead of chaining doubles off a stale anchor.
//!
//! ## Usage
//!
//! ```
//! use arbor_event_state::{ClickKind, MultiClick};
//!
//! let mut clicks = MultiClick::new();
//! assert_eq!(clicks.on_press(1_000), ClickKind::Single);
//! assert_eq!(clicks.on_press(1_200), ClickKind::Double);
//! // The double consumed the anchor; this press starts over.
//! assert_eq!(clicks.on_press(1_400), ClickKind::Single);
//! ```

/// Default double-click window in milliseconds.
pub const DOUBLE_CLICK_MS: u64 = 500;

/// Classification of a pointer press.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ClickKind {
    /// A press with no recent predecessor.
    Single,
    /// A press within the double-click window of the previous press.
    Double,
}

/// Double-click state machine.
///
/// Tracks the timestamp of the most recent single press and classifies each
/// new press against it. Timestamps are caller-supplied milliseconds and
/// only ever compared by difference, so any monotonic clock works.
#[derive(Clone, Copy, Debug)]
pub struct MultiClick {
    /// Time window for a follow-up press to count as a double click.
    pub window_ms: u64,
    /// Timestamp of the anchoring single press, if one is pending.
    anchor: Option<u64>,
}

impl MultiClick {
    /// Create a tracker with the default window ([`DOUBLE_CLICK_MS`]).
    pub const fn new() -> Self {
        Self::with_window(DOUBLE_CLICK_MS)
    }

    /// Create a tracker with a custom window in milliseconds.
    pub const fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            anchor: None,
        }
    }

    /// Record a press and classify it.
    ///
    /// Timestamps are expected to be non-decreasing; an out-of-order
    /// timestamp is treated as elapsed time zero rather than wrapping.
    pub fn on_press(&mut self, timestamp: u64) -> ClickKind {
        match self.anchor {
            Some(anchor) if timestamp.saturating_sub(anchor) < self.window_ms => {
                self.anchor = None;
                ClickKind::Double
            }
            _ => {
                self.anchor = Some(timestamp);
                ClickKind::Single
            }
        }
    }

    /// Drop any pending anchor, so the next press is a single click.
    pub fn reset(&mut self) {
        self.anchor = None;
    }
}

impl Default for MultiClick {
    fn default() -> Self {
        Self::new()
    }
}
