// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor View: the zoom/pan mapping between model space and screen space.
//!
//! A [`ViewTransform`] holds a multiplicative zoom scale and an additive pan
//! offset in screen pixels. The forward map is `screen = model * zoom + pan`;
//! the inverse map undoes it for routing pointer input back into model space.
//!
//! Zoom is deliberately unbounded in both directions: repeated zoom steps can
//! grow or shrink the scale without limit, and callers that want clamping are
//! expected to apply it themselves.
//!
//! ## Example
//!
//! ```rust
//! use arbor_view::ViewTransform;
//! use kurbo::{Point, Vec2};
//!
//! let mut view = ViewTransform::new();
//! view.zoom_step(1);
//! view.pan_by(Vec2::new(10.0, -4.0));
//!
//! let screen = view.to_screen(Point::new(100.0, 50.0));
//! let back = view.to_model(screen);
//! assert!((back.x - 100.0).abs() < 1e-9);
//! assert!((back.y - 50.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

use kurbo::{Affine, Point, Vec2};

/// Multiplicative factor applied per wheel step. One step up multiplies the
/// zoom by this factor, one step down divides by it.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.1;

/// Mapping from model coordinates to screen coordinates.
///
/// The transform is `screen = model * zoom + pan`, with `pan` measured in
/// screen pixels. Zoom starts at `1.0` and pan at zero, so a fresh transform
/// is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan: Vec2,
}

impl ViewTransform {
    /// Create an identity transform (zoom `1.0`, no pan).
    pub const fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// The current zoom scale.
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The current pan offset in screen pixels.
    pub const fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Map a model-space point to screen space.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    /// Map a screen-space point back to model space.
    ///
    /// This is the exact inverse of [`Self::to_screen`] as long as the zoom is
    /// nonzero. Zoom can only reach zero through caller-supplied factors;
    /// [`Self::zoom_step`] alone keeps it positive.
    pub fn to_model(&self, p: Point) -> Point {
        Point::new((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }

    /// The forward map as a kurbo [`Affine`], for renderers that consume
    /// transforms directly.
    pub fn as_affine(&self) -> Affine {
        Affine::scale(self.zoom).then_translate(self.pan)
    }

    /// Multiply the zoom scale by an arbitrary factor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// Apply whole wheel steps: positive steps zoom in by
    /// [`WHEEL_ZOOM_FACTOR`] each, negative steps zoom out.
    pub fn zoom_step(&mut self, steps: i32) {
        if steps >= 0 {
            for _ in 0..steps {
                self.zoom *= WHEEL_ZOOM_FACTOR;
            }
        } else {
            for _ in 0..steps.unsigned_abs() {
                self.zoom /= WHEEL_ZOOM_FACTOR;
            }
        }
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Whether a screen-space point falls on a model-space circle.
    ///
    /// The circle's center is transformed to screen space and its radius is
    /// scaled by the zoom; the test compares squared distances so no square
    /// root is taken. Points exactly on the boundary count as hits.
    pub fn hits_circle(&self, screen_pt: Point, model_center: Point, radius: f64) -> bool {
        let center = self.to_screen(model_center);
        let dx = center.x - screen_pt.x;
        let dy = center.y - screen_pt.y;
        let r = radius * self.zoom;
        dx * dx + dy * dy <= r * r
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trip() {
        let view = ViewTransform::new();
        let p = Point::new(33.0, -7.5);
        assert_eq!(view.to_screen(p), p);
        assert_eq!(view.to_model(p), p);
    }

    #[test]
    fn forward_map_matches_affine() {
        let mut view = ViewTransform::new();
        view.zoom_by(2.5);
        view.pan_by(Vec2::new(-40.0, 12.0));

        let p = Point::new(10.0, 20.0);
        let by_hand = view.to_screen(p);
        let by_affine = view.as_affine() * p;
        assert!((by_hand - by_affine).hypot() < 1e-12);
        assert_eq!(by_hand, Point::new(10.0 * 2.5 - 40.0, 20.0 * 2.5 + 12.0));
    }

    #[test]
    fn inverse_undoes_forward() {
        let mut view = ViewTransform::new();
        view.zoom_step(3);
        view.pan_by(Vec2::new(100.0, -250.0));

        let p = Point::new(-17.0, 42.0);
        let back = view.to_model(view.to_screen(p));
        assert!((back - p).hypot() < 1e-9);
    }

    #[test]
    fn wheel_steps_are_multiplicative() {
        let mut view = ViewTransform::new();
        view.zoom_step(2);
        assert!((view.zoom() - WHEEL_ZOOM_FACTOR * WHEEL_ZOOM_FACTOR).abs() < 1e-12);
        view.zoom_step(-2);
        assert!((view.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_unbounded() {
        let mut view = ViewTransform::new();
        view.zoom_step(-200);
        assert!(view.zoom() > 0.0);
        view.zoom_step(400);
        assert!(view.zoom() > 1.0);
    }

    #[test]
    fn center_always_hits_regardless_of_zoom() {
        for steps in [-10, -1, 0, 1, 10] {
            let mut view = ViewTransform::new();
            view.zoom_step(steps);
            view.pan_by(Vec2::new(13.0, 77.0));

            let center = Point::new(400.0, 100.0);
            let on_screen = view.to_screen(center);
            assert!(
                view.hits_circle(on_screen, center, 30.0),
                "center should hit at {steps} wheel steps"
            );
        }
    }

    #[test]
    fn boundary_hits_and_just_beyond_misses() {
        let mut view = ViewTransform::new();
        view.zoom_by(1.7);
        view.pan_by(Vec2::new(-9.0, 4.0));

        let center = Point::new(50.0, 60.0);
        let radius = 30.0;
        let screen_center = view.to_screen(center);
        let screen_r = radius * view.zoom();

        let on_edge = Point::new(screen_center.x + screen_r, screen_center.y);
        assert!(view.hits_circle(on_edge, center, radius));

        let outside = Point::new(screen_center.x + screen_r + 1e-6, screen_center.y);
        assert!(!view.hits_circle(outside, center, radius));
    }
}
