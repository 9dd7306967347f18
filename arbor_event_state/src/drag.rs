// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan tracking for a held drag button.

use kurbo::{Point, Vec2};

/// Tracks an active pan drag and yields per-event motion deltas.
///
/// The host calls [`PanDrag::begin`] when the designated drag button goes
/// down, [`PanDrag::on_move`] for each motion event, and [`PanDrag::end`]
/// when the button is released. Each `on_move` while active returns the
/// screen-space delta since the previous event, which is exactly the amount
/// to add to a view's pan offset.
///
/// ```
/// use arbor_event_state::PanDrag;
/// use kurbo::{Point, Vec2};
///
/// let mut drag = PanDrag::new();
/// drag.begin(Point::new(100.0, 100.0));
/// assert_eq!(drag.on_move(Point::new(104.0, 97.0)), Some(Vec2::new(4.0, -3.0)));
/// drag.end();
/// assert_eq!(drag.on_move(Point::new(200.0, 200.0)), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PanDrag {
    last: Option<Point>,
}

impl PanDrag {
    /// Create an inactive tracker.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Whether a drag is in progress.
    pub const fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Start dragging from a screen position. A second `begin` while active
    /// re-anchors the drag.
    pub fn begin(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Stop dragging; subsequent motion is ignored.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Record a motion event.
    ///
    /// Returns the delta since the previous event while a drag is active,
    /// and `None` otherwise.
    pub fn on_move(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        let mut drag = PanDrag::new();
        assert!(!drag.is_active());
        assert_eq!(drag.on_move(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn deltas_accumulate_between_consecutive_events() {
        let mut drag = PanDrag::new();
        drag.begin(Point::new(0.0, 0.0));
        assert_eq!(drag.on_move(Point::new(3.0, 4.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.on_move(Point::new(3.0, 10.0)), Some(Vec2::new(0.0, 6.0)));
        assert_eq!(drag.on_move(Point::new(1.0, 10.0)), Some(Vec2::new(-2.0, 0.0)));
    }

    #[test]
    fn end_stops_deltas() {
        let mut drag = PanDrag::new();
        drag.begin(Point::new(5.0, 5.0));
        drag.end();
        assert!(!drag.is_active());
        assert_eq!(drag.on_move(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn re_begin_re_anchors() {
        let mut drag = PanDrag::new();
        drag.begin(Point::new(0.0, 0.0));
        drag.on_move(Point::new(10.0, 0.0));
        drag.begin(Point::new(100.0, 100.0));
        assert_eq!(
            drag.on_move(Point::new(101.0, 100.0)),
            Some(Vec2::new(1.0, 0.0))
        );
    }
}
