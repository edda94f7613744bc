// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers shared by the viewport and gesture layers.

use kurbo::{Point, Rect, Vec2};

/// Source of the rendering surface rectangle.
///
/// The rectangle is expressed in the same coordinate space as input positions
/// (`{left, top, width, height}` of the surface). It is owned by the host and
/// only ever read.
pub trait ViewportGeometry {
    /// Returns the current surface rectangle, or `None` when it is not known.
    fn viewport_rect(&self) -> Option<Rect>;

    /// Returns the surface rectangle only when it is usable for clamp and
    /// anchor math.
    ///
    /// Rectangles with a non-positive or non-finite width or height are
    /// treated as unavailable.
    fn usable_rect(&self) -> Option<Rect> {
        let rect = self.viewport_rect()?;
        let (w, h) = (rect.width(), rect.height());
        if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 {
            Some(rect)
        } else {
            None
        }
    }
}

impl ViewportGeometry for Rect {
    fn viewport_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl ViewportGeometry for Option<Rect> {
    fn viewport_rect(&self) -> Option<Rect> {
        *self
    }
}

impl<T: ViewportGeometry + ?Sized> ViewportGeometry for &T {
    fn viewport_rect(&self) -> Option<Rect> {
        (**self).viewport_rect()
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: a NaN `value` yields `min`, and
/// inverted bounds yield `max`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Pan that keeps `anchor` visually stationary across a zoom change.
///
/// `anchor` and `viewport_center` are in surface coordinates and
/// `zoom_ratio` is `new_zoom / old_zoom`. The anchor's offset from the center
/// is scaled by `1 - zoom_ratio` and added to `pan_at_start`; an anchor at
/// the center therefore never moves the pan.
#[must_use]
pub fn anchored_pan(
    pan_at_start: Vec2,
    anchor: Point,
    viewport_center: Point,
    zoom_ratio: f64,
) -> Vec2 {
    let offset = anchor - viewport_center;
    pan_at_start + offset * (1.0 - zoom_ratio)
}
