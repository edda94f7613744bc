// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::viewport::ViewportState;

/// Renderer-agnostic description of how to draw the content.
///
/// The renderer translates by `(translate_x, translate_y)` and scales by
/// `scale` around the center of its surface. `live_update` is a presentation
/// hint: while it is `true` a gesture is in progress and the renderer should
/// apply the transform immediately; otherwise it may animate towards it
/// (stepped zoom, reset).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewTransform {
    /// Horizontal translation in surface pixels.
    pub translate_x: f64,
    /// Vertical translation in surface pixels.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Whether a gesture is actively driving the transform.
    pub live_update: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::from_state(&ViewportState::IDENTITY, false)
    }
}

impl ViewTransform {
    /// Derives the transform for a committed state.
    #[must_use]
    pub fn from_state(state: &ViewportState, live_update: bool) -> Self {
        let pan = state.pan();
        Self {
            translate_x: pan.x,
            translate_y: pan.y,
            scale: state.zoom(),
            live_update,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns the content-to-surface affine for a renderer whose transform
    /// origin is `origin` (normally the center of the surface rectangle).
    #[must_use]
    pub fn to_affine(&self, origin: Point) -> Affine {
        let origin = origin.to_vec2();
        Affine::translate(origin + self.translation())
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }

    /// Maps a surface point (for example a click) to unzoomed content space.
    #[must_use]
    pub fn view_to_content(&self, origin: Point, pt: Point) -> Point {
        self.to_affine(origin).inverse() * pt
    }

    /// Maps an unzoomed content point to where it is drawn on the surface.
    #[must_use]
    pub fn content_to_view(&self, origin: Point, pt: Point) -> Point {
        self.to_affine(origin) * pt
    }
}
