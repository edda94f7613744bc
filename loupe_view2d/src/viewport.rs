// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::geometry::{ViewportGeometry, clamp};
use crate::limits::{MIN_ZOOM, ZoomLimits};

/// Committed zoom/pan state of a viewport.
///
/// The content is scaled by `zoom` around the center of the surface and then
/// shifted by `pan` (in surface pixels). Values of this type are only built by
/// [`ViewportState::resolve`] (or [`ViewportState::IDENTITY`]), so every
/// instance satisfies the clamp invariants for the geometry it was resolved
/// against.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewportState {
    zoom: f64,
    pan: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportState {
    /// Unzoomed, unpanned state.
    pub const IDENTITY: Self = Self {
        zoom: MIN_ZOOM,
        pan: Vec2::ZERO,
    };

    /// Returns the zoom factor.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the pan offset in surface pixels.
    #[must_use]
    pub const fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns `true` when zoomed beyond [`MIN_ZOOM`], which is when panning
    /// is possible.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Largest pan magnitude per axis at `zoom` for a surface of `size`.
    ///
    /// At or below [`MIN_ZOOM`] this is zero on both axes.
    #[must_use]
    pub fn pan_bounds(zoom: f64, size: Size) -> Vec2 {
        let excess = (zoom - MIN_ZOOM).max(0.0);
        Vec2::new(size.width * excess / 2.0, size.height * excess / 2.0)
    }

    /// Clamps a candidate `{zoom, pan}` into a valid state.
    ///
    /// - `zoom` is clamped into `limits`.
    /// - At [`MIN_ZOOM`] the pan is forced to zero and `geometry` is not
    ///   consulted.
    /// - Otherwise each pan axis is clamped into
    ///   [`pan_bounds`](Self::pan_bounds) for the queried surface size.
    ///
    /// Returns `None` when the surface rectangle is needed but unavailable or
    /// degenerate; callers leave their state unchanged in that case.
    #[must_use]
    pub fn resolve<G>(zoom: f64, pan: Vec2, limits: &ZoomLimits, geometry: &G) -> Option<Self>
    where
        G: ViewportGeometry + ?Sized,
    {
        let zoom = limits.clamp(zoom);
        debug_assert!(
            (MIN_ZOOM..=limits.max_zoom()).contains(&zoom),
            "zoom clamp produced {zoom}"
        );
        if zoom <= MIN_ZOOM {
            return Some(Self::IDENTITY);
        }
        let rect = geometry.usable_rect()?;
        let bounds = Self::pan_bounds(zoom, rect.size());
        let pan = Vec2::new(
            clamp(pan.x, -bounds.x, bounds.x),
            clamp(pan.y, -bounds.y, bounds.y),
        );
        Some(Self { zoom, pan })
    }

    /// Re-clamps the zoom into `limits` without querying geometry.
    ///
    /// When the zoom shrinks the pan is scaled by the same factor as the pan
    /// bounds, so a state that was within bounds for some surface stays within
    /// bounds for that surface.
    #[must_use]
    pub fn limited(&self, limits: &ZoomLimits) -> Self {
        let zoom = limits.clamp(self.zoom);
        if zoom <= MIN_ZOOM {
            return Self::IDENTITY;
        }
        if zoom >= self.zoom {
            return *self;
        }
        let scale = (zoom - MIN_ZOOM) / (self.zoom - MIN_ZOOM);
        Self {
            zoom,
            pan: self.pan * scale,
        }
    }

    /// Returns `true` if this state satisfies the clamp invariants for
    /// `limits` and a surface of `size`, allowing `tolerance` of slack on
    /// the pan bounds.
    #[must_use]
    pub fn satisfies(&self, limits: &ZoomLimits, size: Size, tolerance: f64) -> bool {
        if !(MIN_ZOOM..=limits.max_zoom()).contains(&self.zoom) {
            return false;
        }
        if self.zoom <= MIN_ZOOM {
            return self.pan == Vec2::ZERO;
        }
        let bounds = Self::pan_bounds(self.zoom, size);
        self.pan.x.abs() <= bounds.x + tolerance && self.pan.y.abs() <= bounds.y + tolerance
    }
}
